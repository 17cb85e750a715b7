use crate::error::StationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Connectivity status of a station.
///
/// Closed set: every station is in exactly one of these at a time and
/// any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Connected,
    Offline,
    Priority,
    Onroute,
}

impl StationStatus {
    pub const ALL: [StationStatus; 4] = [
        StationStatus::Connected,
        StationStatus::Offline,
        StationStatus::Priority,
        StationStatus::Onroute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Connected => "connected",
            StationStatus::Offline => "offline",
            StationStatus::Priority => "priority",
            StationStatus::Onroute => "onroute",
        }
    }

    /// Display color token for this status.
    pub fn color(&self) -> &'static str {
        match self {
            StationStatus::Connected => "var(--brand-green)",
            StationStatus::Offline => "var(--brand-red)",
            StationStatus::Priority => "var(--brand-orange)",
            StationStatus::Onroute => "var(--brand-blue)",
        }
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StationStatus {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "connected" => Ok(StationStatus::Connected),
            "offline" => Ok(StationStatus::Offline),
            "priority" => Ok(StationStatus::Priority),
            "onroute" | "on-route" | "on_route" => Ok(StationStatus::Onroute),
            _ => Err(StationError::UnknownStatus(s.to_string())),
        }
    }
}
