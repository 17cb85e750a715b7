use crate::error::StationError;
use crate::status::StationStatus;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Embedded seed list of stations, loaded once at startup when no
/// external seed file is configured.
pub static CSV_OBJECT: &str = include_str!("../../fixtures/stations.csv");

/// Fuel grades sold at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelGrade {
    Pertalite,
    Pertamax,
    Solar,
}

impl FuelGrade {
    pub const ALL: [FuelGrade; 3] = [FuelGrade::Pertalite, FuelGrade::Pertamax, FuelGrade::Solar];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelGrade::Pertalite => "pertalite",
            FuelGrade::Pertamax => "pertamax",
            FuelGrade::Solar => "solar",
        }
    }
}

impl fmt::Display for FuelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remaining stock per fuel grade, in percent.
///
/// Values are kept exactly as reported. Out of range numbers are only
/// clamped when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FuelStock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pertalite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pertamax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar: Option<f64>,
}

impl FuelStock {
    pub fn get(&self, grade: FuelGrade) -> Option<f64> {
        match grade {
            FuelGrade::Pertalite => self.pertalite,
            FuelGrade::Pertamax => self.pertamax,
            FuelGrade::Solar => self.solar,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pertalite.is_none() && self.pertamax.is_none() && self.solar.is_none()
    }
}

/// One fuel station tracked by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Stable identifier, unique within a store (e.g. "SPBU-1")
    pub id: String,
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    pub region: String,
    pub status: StationStatus,
    /// Tier label such as "A", "B" or "C"
    #[serde(rename = "class", default, skip_serializing_if = "Option::is_none")]
    pub station_class: Option<String>,
    /// Free text relative time, e.g. "10m ago" or "26h ago"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_report: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_stock: Option<FuelStock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
}

impl Station {
    /// Create a station with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        lat: f64,
        lng: f64,
        region: impl Into<String>,
        status: StationStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat,
            lng,
            region: region.into(),
            status,
            station_class: None,
            last_report: None,
            fuel_stock: None,
            technician: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.station_class = Some(class.into());
        self
    }

    pub fn with_last_report(mut self, last_report: impl Into<String>) -> Self {
        self.last_report = Some(last_report.into());
        self
    }

    pub fn with_fuel_stock(mut self, fuel_stock: FuelStock) -> Self {
        self.fuel_stock = Some(fuel_stock);
        self
    }

    pub fn with_technician(mut self, technician: impl Into<String>) -> Self {
        self.technician = Some(technician.into());
        self
    }

    /// Get the station list from the embedded seed.
    pub fn get_station_vector() -> Result<Vec<Station>, StationError> {
        Station::parse_station_csv(CSV_OBJECT)
    }

    fn optional_text(ess: &str) -> Option<String> {
        let trimmed = ess.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "-" | "null" | "n/a" | "na" => None,
            _ => Some(trimmed.to_string()),
        }
    }

    fn required<'r>(
        record: &'r StringRecord,
        index: usize,
        line: u64,
        field: &'static str,
    ) -> Result<&'r str, StationError> {
        match record.get(index).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(StationError::MissingField { line, field }),
        }
    }

    fn parse_number(value: &str, line: u64, field: &'static str) -> Result<f64, StationError> {
        value.parse::<f64>().map_err(|_| StationError::InvalidNumber {
            line,
            field,
            value: value.to_string(),
        })
    }

    fn optional_number(
        record: &StringRecord,
        index: usize,
        line: u64,
        field: &'static str,
    ) -> Result<Option<f64>, StationError> {
        match record.get(index).and_then(Station::optional_text) {
            Some(value) => Station::parse_number(&value, line, field).map(Some),
            None => Ok(None),
        }
    }

    /// Parse a CSV string of station data into a vector of Stations.
    ///
    /// Expected CSV columns (with headers):
    /// `id,name,lat,lng,region,status,class,last_report,pertalite,pertamax,solar,technician`
    ///
    /// Trailing optional columns may be omitted. Blank, `-`, `null` and `n/a`
    /// cells are read as absent. An unknown status rejects the whole seed.
    pub fn parse_station_csv(csv_object: &str) -> Result<Vec<Station>, StationError> {
        let mut station_list: Vec<Station> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let record = row?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let id = Station::required(&record, 0, line, "id")?;
            let name = Station::required(&record, 1, line, "name")?;
            let lat = Station::parse_number(Station::required(&record, 2, line, "lat")?, line, "lat")?;
            let lng = Station::parse_number(Station::required(&record, 3, line, "lng")?, line, "lng")?;
            let region = Station::required(&record, 4, line, "region")?;
            let status: StationStatus = Station::required(&record, 5, line, "status")?.parse()?;

            let fuel_stock = FuelStock {
                pertalite: Station::optional_number(&record, 8, line, "pertalite")?,
                pertamax: Station::optional_number(&record, 9, line, "pertamax")?,
                solar: Station::optional_number(&record, 10, line, "solar")?,
            };

            station_list.push(Station {
                id: id.to_string(),
                name: name.to_string(),
                lat,
                lng,
                region: region.to_string(),
                status,
                station_class: record.get(6).and_then(Station::optional_text),
                last_report: record.get(7).and_then(Station::optional_text),
                fuel_stock: (!fuel_stock.is_empty()).then_some(fuel_stock),
                technician: record.get(11).and_then(Station::optional_text),
            });
        }
        log::debug!("station: parsed {} stations from csv", station_list.len());
        Ok(station_list)
    }
}
