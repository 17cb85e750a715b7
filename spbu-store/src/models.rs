//! Query inputs and result models for the station directory.
//!
//! All result structs derive `Serialize` so the command line can print
//! them as JSON.

use serde::Serialize;
use spbu_data::fuel::FuelLevel;
use spbu_station::{FuelStock, Station, StationError, StationStatus, UserRole};
use std::str::FromStr;

/// Sentinel accepted wherever a filter value may be "any".
pub const ALL: &str = "all";

/// Status criterion of a [`StationFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(StationStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: StationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Region criterion of a [`StationFilter`]. Regions compare exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    #[default]
    All,
    Only(String),
}

impl RegionFilter {
    pub fn matches(&self, region: &str) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => wanted == region,
        }
    }
}

impl From<&str> for RegionFilter {
    fn from(s: &str) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case(ALL) {
            RegionFilter::All
        } else {
            RegionFilter::Only(s.to_string())
        }
    }
}

/// Criteria for [`StationStore::filter_stations`](crate::StationStore::filter_stations).
///
/// All criteria must hold. The default filter matches every station.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StationFilter {
    /// Case-insensitive substring of the name or the region; empty matches all
    pub query: String,
    pub status: StatusFilter,
    pub region: RegionFilter,
}

impl StationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn status(mut self, status: StationStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = RegionFilter::Only(region.into());
        self
    }

    pub fn matches(&self, station: &Station) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = query.is_empty()
            || station.name.to_lowercase().contains(&query)
            || station.region.to_lowercase().contains(&query);
        matches_query && self.status.matches(station.status) && self.region.matches(&station.region)
    }
}

/// Station counts for the dashboard header cards.
///
/// The four status counts always add up to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Kpi {
    pub total: usize,
    pub connected: usize,
    pub offline: usize,
    pub onroute: usize,
    pub priority: usize,
}

impl Kpi {
    pub fn count(&self, status: StationStatus) -> usize {
        match status {
            StationStatus::Connected => self.connected,
            StationStatus::Offline => self.offline,
            StationStatus::Priority => self.priority,
            StationStatus::Onroute => self.onroute,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Error,
    Info,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Error => "error",
            AlertLevel::Info => "info",
        }
    }
}

/// A notice derived from the current station state. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    /// Stable across recomputation: `off-<station id>` or `prio-<station id>`
    pub id: String,
    pub level: AlertLevel,
    pub message: String,
}

/// Progress of a technician task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Open,
    InProgress,
    Done,
}

/// An offline station on the technician board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub station: Station,
    pub status: TaskStatus,
}

/// Display-ready view of one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDetail {
    pub id: String,
    pub name: String,
    pub badge: String,
    pub region: String,
    pub status: StationStatus,
    pub status_color: &'static str,
    #[serde(rename = "class")]
    pub station_class: String,
    pub latitude: String,
    pub longitude: String,
    pub last_report: String,
    pub technician: String,
    pub fuel: Vec<FuelLevel>,
    /// Approximate hours since the last report, two decimals
    pub offline_hours: String,
}

/// Partial update for [`StationStore::update_station`](crate::StationStore::update_station).
///
/// `None` leaves a field untouched. Optional station fields take
/// `Some(None)` to clear them. The id cannot be changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationPatch {
    pub name: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub region: Option<String>,
    pub status: Option<StationStatus>,
    pub station_class: Option<Option<String>>,
    pub last_report: Option<Option<String>>,
    pub fuel_stock: Option<Option<FuelStock>>,
    pub technician: Option<Option<String>>,
}

impl StationPatch {
    pub fn status(status: StationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, station: &mut Station) {
        if let Some(name) = self.name {
            station.name = name;
        }
        if let Some(lat) = self.lat {
            station.lat = lat;
        }
        if let Some(lng) = self.lng {
            station.lng = lng;
        }
        if let Some(region) = self.region {
            station.region = region;
        }
        if let Some(status) = self.status {
            station.status = status;
        }
        if let Some(station_class) = self.station_class {
            station.station_class = station_class;
        }
        if let Some(last_report) = self.last_report {
            station.last_report = last_report;
        }
        if let Some(fuel_stock) = self.fuel_stock {
            station.fuel_stock = fuel_stock;
        }
        if let Some(technician) = self.technician {
            station.technician = technician;
        }
    }
}

/// Change notification delivered to store observers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StoreEvent {
    Loaded { count: usize },
    Added { id: String },
    Updated { id: String },
    Removed { id: String },
    TaskChanged { id: String, status: TaskStatus },
    RoleChanged { role: UserRole },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> Station {
        Station::new("SPBU-1", "SPBU 34.123.01", -6.2, 106.816, "DKI", StationStatus::Connected)
    }

    #[test]
    fn default_filter_matches_everything() {
        assert!(StationFilter::new().matches(&station()));
    }

    #[test]
    fn query_is_case_insensitive_on_name_and_region() {
        assert!(StationFilter::new().query("spbu").matches(&station()));
        assert!(StationFilter::new().query("dki").matches(&station()));
        assert!(!StationFilter::new().query("jbr").matches(&station()));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let filter = StationFilter::new().query("spbu").status(StationStatus::Offline);
        assert!(!filter.matches(&station()));
        let filter = StationFilter::new().query("spbu").region("JBR");
        assert!(!filter.matches(&station()));
    }

    #[test]
    fn region_matches_exactly() {
        assert!(!StationFilter::new().region("dki").matches(&station()));
        assert!(StationFilter::new().region("DKI").matches(&station()));
    }

    #[test]
    fn all_sentinel_parses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "offline".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(StationStatus::Offline)
        );
        assert!("sleeping".parse::<StatusFilter>().is_err());
        assert_eq!(RegionFilter::from("all"), RegionFilter::All);
        assert_eq!(RegionFilter::from(""), RegionFilter::All);
        assert_eq!(RegionFilter::from("JBR"), RegionFilter::Only("JBR".to_string()));
    }

    #[test]
    fn patch_applies_only_given_fields() {
        let mut s = station().with_technician("Adi");
        StationPatch {
            name: Some("Renamed".to_string()),
            technician: Some(None),
            ..StationPatch::default()
        }
        .apply(&mut s);
        assert_eq!(s.name, "Renamed");
        assert_eq!(s.technician, None);
        assert_eq!(s.region, "DKI");
        assert_eq!(s.id, "SPBU-1");
    }

    #[test]
    fn kpi_count_by_status() {
        let kpi = Kpi {
            total: 4,
            connected: 1,
            offline: 2,
            onroute: 0,
            priority: 1,
        };
        assert_eq!(kpi.count(StationStatus::Offline), 2);
        assert_eq!(kpi.count(StationStatus::Onroute), 0);
    }
}
