//! Derived values for station records.
//!
//! This crate turns the loosely formatted fields of a station (free text
//! report times, unclamped fuel percentages) into numbers and strings
//! that the store and the command line can show.

/// Approximate age of a station's last report.
pub mod report_age {
    /// Parse the leading decimal number of `text`, the way a browser's
    /// `parseFloat` does. Leading whitespace is skipped and anything after
    /// the number is ignored. Returns `None` when no number starts the text.
    pub fn leading_float(text: &str) -> Option<f64> {
        let s = text.trim_start();
        let bytes = s.as_bytes();
        let mut end = 0;

        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let int_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        let mut digits = end - int_start;
        if end < bytes.len() && bytes[end] == b'.' {
            let frac_start = end + 1;
            let mut frac_end = frac_start;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            digits += frac_end - frac_start;
            if digits > 0 {
                end = frac_end;
            }
        }
        if digits == 0 {
            return s[int_start..].starts_with("Infinity").then(|| {
                if s.starts_with('-') {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                }
            });
        }
        // exponent only counts when at least one digit follows it
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
                exp_end += 1;
            }
            let exp_digits_start = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits_start {
                end = exp_end;
            }
        }
        s[..end].parse::<f64>().ok()
    }

    fn leading_or_zero(text: &str) -> f64 {
        match leading_float(text) {
            Some(v) if !v.is_nan() => v,
            _ => 0.0,
        }
    }

    /// Approximate hours since the last report.
    ///
    /// Unit markers are checked in order: `h` (hours), then `d` (days),
    /// then `m` (minutes). Absent, empty or unparseable text is 0 hours.
    ///
    /// ```
    /// use spbu_data::report_age::parse_hours;
    ///
    /// assert_eq!(parse_hours(Some("26h ago")), 26.0);
    /// assert_eq!(parse_hours(Some("45m ago")), 0.75);
    /// assert_eq!(parse_hours(None), 0.0);
    /// ```
    pub fn parse_hours(text: Option<&str>) -> f64 {
        let txt = match text {
            Some(t) if !t.is_empty() => t,
            _ => return 0.0,
        };
        if txt.contains('h') {
            leading_or_zero(txt)
        } else if txt.contains('d') {
            leading_or_zero(txt) * 24.0
        } else if txt.contains('m') {
            leading_or_zero(txt) / 60.0
        } else {
            0.0
        }
    }

}

/// Fuel stock levels as shown in a station detail panel.
pub mod fuel {
    use serde::Serialize;
    use spbu_station::{FuelGrade, FuelStock};

    /// Clamp a percentage to 0..=100 for display.
    pub fn clamp_percent(value: f64) -> f64 {
        value.clamp(0.0, 100.0)
    }

    /// One fuel gauge: the reported value and the clamped bar width.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct FuelLevel {
        pub grade: FuelGrade,
        /// Reported percentage, 0 when the grade has no reading
        pub percent: f64,
        /// `percent` clamped to 0..=100
        pub bar_percent: f64,
    }

    /// Gauges for every grade, in a fixed order. Missing readings show as 0.
    pub fn levels(stock: Option<&FuelStock>) -> Vec<FuelLevel> {
        FuelGrade::ALL
            .iter()
            .map(|&grade| {
                let percent = stock.and_then(|s| s.get(grade)).unwrap_or(0.0);
                FuelLevel {
                    grade,
                    percent,
                    bar_percent: clamp_percent(percent),
                }
            })
            .collect()
    }

}

/// Text formatting for station fields.
pub mod display {
    /// Shown in place of an absent optional field.
    pub const PLACEHOLDER: &str = "-";

    pub fn or_placeholder(value: Option<&str>) -> String {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or(PLACEHOLDER)
            .to_string()
    }

    /// Coordinates are shown with three decimals.
    pub fn format_coordinate(value: f64) -> String {
        format!("{:.3}", value)
    }

    /// Approximate hours are shown with two decimals.
    pub fn format_hours(hours: f64) -> String {
        format!("{:.2}", hours)
    }

    /// Two character badge for a station avatar: the tail of the last word
    /// of its name ("SPBU 34.123.01" gives "01").
    pub fn badge(name: &str) -> String {
        let last = name.split(' ').next_back().unwrap_or("");
        let chars: Vec<char> = last.chars().collect();
        chars[chars.len().saturating_sub(2)..].iter().collect()
    }

}
