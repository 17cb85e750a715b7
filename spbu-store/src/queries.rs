//! Read-only views over the station collection.
//!
//! Every query is recomputed from the current collection on each call and
//! returns owned values in collection order.

use crate::models::{Alert, AlertLevel, Kpi, StationDetail, StationFilter};
use crate::StationStore;
use spbu_data::{display, fuel, report_age};
use spbu_station::{Station, StationStatus};

/// Display color token for a status.
pub fn status_color(status: StationStatus) -> &'static str {
    status.color()
}

impl StationStore {
    /// All stations in insertion order.
    pub fn list_stations(&self) -> Vec<Station> {
        self.inner.borrow().stations.clone()
    }

    pub fn station(&self, id: &str) -> Option<Station> {
        self.inner
            .borrow()
            .stations
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    /// Stations matching every criterion of `filter`, in insertion order.
    pub fn filter_stations(&self, filter: &StationFilter) -> Vec<Station> {
        let rows: Vec<Station> = self
            .inner
            .borrow()
            .stations
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect();
        log::debug!("query: filter_stations returned {} records", rows.len());
        rows
    }

    /// Distinct regions in the order they first appear.
    pub fn regions(&self) -> Vec<String> {
        let inner = self.inner.borrow();
        let mut regions: Vec<String> = Vec::new();
        for station in &inner.stations {
            if !regions.contains(&station.region) {
                regions.push(station.region.clone());
            }
        }
        regions
    }

    /// Station counts by status.
    pub fn compute_kpi(&self) -> Kpi {
        let inner = self.inner.borrow();
        let mut kpi = Kpi {
            total: inner.stations.len(),
            ..Kpi::default()
        };
        for station in &inner.stations {
            match station.status {
                StationStatus::Connected => kpi.connected += 1,
                StationStatus::Offline => kpi.offline += 1,
                StationStatus::Onroute => kpi.onroute += 1,
                StationStatus::Priority => kpi.priority += 1,
            }
        }
        kpi
    }

    /// Alerts for the current collection.
    ///
    /// An offline station whose last report is at least `threshold_hours`
    /// old raises an error alert. Every priority station raises an info
    /// alert. Alerts follow collection order, error before info.
    pub fn compute_alerts(&self, threshold_hours: f64) -> Vec<Alert> {
        let inner = self.inner.borrow();
        let mut alerts = Vec::new();
        for station in &inner.stations {
            let hours = report_age::parse_hours(station.last_report.as_deref());
            if station.status == StationStatus::Offline && hours >= threshold_hours {
                alerts.push(Alert {
                    id: format!("off-{}", station.id),
                    level: AlertLevel::Error,
                    message: format!("{} offline > {} jam", station.name, threshold_hours),
                });
            }
            if station.status == StationStatus::Priority {
                alerts.push(Alert {
                    id: format!("prio-{}", station.id),
                    level: AlertLevel::Info,
                    message: format!("{} priority rollout area", station.name),
                });
            }
        }
        log::debug!(
            "query: compute_alerts({}) returned {} alerts",
            threshold_hours,
            alerts.len()
        );
        alerts
    }

    /// Display-ready detail for one station.
    pub fn station_detail(&self, id: &str) -> Option<StationDetail> {
        self.station(id).map(|s| StationDetail {
            badge: display::badge(&s.name),
            status_color: status_color(s.status),
            station_class: display::or_placeholder(s.station_class.as_deref()),
            latitude: display::format_coordinate(s.lat),
            longitude: display::format_coordinate(s.lng),
            last_report: display::or_placeholder(s.last_report.as_deref()),
            technician: display::or_placeholder(s.technician.as_deref()),
            fuel: fuel::levels(s.fuel_stock.as_ref()),
            offline_hours: display::format_hours(report_age::parse_hours(s.last_report.as_deref())),
            status: s.status,
            region: s.region,
            name: s.name,
            id: s.id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::status_color;
    use crate::models::{AlertLevel, RegionFilter, StationFilter, StatusFilter};
    use crate::StationStore;
    use spbu_station::{Station, StationStatus};
    use std::collections::HashSet;

    fn offline(id: &str, last_report: &str) -> Station {
        Station::new(id, format!("SPBU {id}"), 0.0, 0.0, "JBR", StationStatus::Offline)
            .with_last_report(last_report)
    }

    #[test]
    fn kpi_total_matches_list() {
        let store = StationStore::seeded().unwrap();
        let kpi = store.compute_kpi();
        assert_eq!(kpi.total, store.list_stations().len());
        assert_eq!(kpi.connected + kpi.offline + kpi.onroute + kpi.priority, kpi.total);
        assert_eq!(kpi.offline, 2);
        assert_eq!(kpi.connected, 1);
    }

    #[test]
    fn kpi_of_empty_store_is_zero() {
        let kpi = StationStore::new().compute_kpi();
        assert_eq!(kpi.total, 0);
        assert_eq!(kpi.connected + kpi.offline + kpi.onroute + kpi.priority, 0);
    }

    #[test]
    fn open_filter_returns_everything_in_order() {
        let store = StationStore::seeded().unwrap();
        let filter = StationFilter {
            query: String::new(),
            status: StatusFilter::All,
            region: RegionFilter::All,
        };
        assert_eq!(store.filter_stations(&filter), store.list_stations());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let store = StationStore::seeded().unwrap();
        let rows = store.filter_stations(&StationFilter::new().query("spbu"));
        assert_eq!(rows.len(), 5);
        let rows = store.filter_stations(&StationFilter::new().query("34.123.01"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "SPBU 34.123.01");
    }

    #[test]
    fn filter_by_status_and_region() {
        let store = StationStore::seeded().unwrap();
        let rows = store.filter_stations(&StationFilter::new().status(StationStatus::Offline).region("JBR"));
        let ids: Vec<&str> = rows.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["SPBU-2", "SPBU-5"]);
    }

    #[test]
    fn filter_without_match_is_empty() {
        let store = StationStore::seeded().unwrap();
        assert!(store.filter_stations(&StationFilter::new().query("nowhere")).is_empty());
        assert!(store
            .filter_stations(&StationFilter::new().status(StationStatus::Priority).region("DKI"))
            .is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let store = StationStore::seeded().unwrap();
        let filter = StationFilter::new().query("jbr");
        let once = store.filter_stations(&filter);
        let twice = StationStore::from_stations(once.clone())
            .unwrap()
            .filter_stations(&filter);
        assert_eq!(once, twice);
    }

    #[test]
    fn regions_in_first_seen_order() {
        let store = StationStore::seeded().unwrap();
        assert_eq!(store.regions(), vec!["DKI", "JBR", "JTM", "KLT"]);
    }

    #[test]
    fn offline_alert_respects_threshold() {
        let store = StationStore::from_stations(vec![offline("SPBU-5", "26h ago")]).unwrap();

        let alerts = store.compute_alerts(24.0);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level, AlertLevel::Error);
        assert_eq!(alerts[0].id, "off-SPBU-5");
        assert_eq!(alerts[0].message, "SPBU SPBU-5 offline > 24 jam");

        assert!(store.compute_alerts(30.0).is_empty());
        assert_eq!(store.compute_alerts(26.0).len(), 1, "Threshold is inclusive");
    }

    #[test]
    fn offline_with_unparseable_report_counts_as_zero_hours() {
        let store = StationStore::from_stations(vec![offline("SPBU-1", "yesterday-ish")]).unwrap();
        assert!(store.compute_alerts(1.0).is_empty());
        assert_eq!(store.compute_alerts(0.0).len(), 1);
    }

    #[test]
    fn priority_always_raises_info() {
        for report in [None, Some("999d ago"), Some("garbage")] {
            let mut station = Station::new("P-1", "SPBU P", 0.0, 0.0, "JTM", StationStatus::Priority);
            station.last_report = report.map(String::from);
            let store = StationStore::from_stations(vec![station]).unwrap();
            for threshold in [0.0, 24.0, 1e9] {
                let alerts = store.compute_alerts(threshold);
                assert_eq!(alerts.len(), 1);
                assert_eq!(alerts[0].level, AlertLevel::Info);
                assert_eq!(alerts[0].id, "prio-P-1");
                assert_eq!(alerts[0].message, "SPBU P priority rollout area");
            }
        }
    }

    #[test]
    fn seeded_alerts() {
        let store = StationStore::seeded().unwrap();
        let ids: Vec<String> = store.compute_alerts(24.0).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["prio-SPBU-3", "off-SPBU-5"]);
        let ids: Vec<String> = store.compute_alerts(2.0).into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["off-SPBU-2", "prio-SPBU-3", "off-SPBU-5"]);
    }

    #[test]
    fn alerts_are_deterministic() {
        let store = StationStore::seeded().unwrap();
        assert_eq!(store.compute_alerts(2.0), store.compute_alerts(2.0));
    }

    #[test]
    fn status_color_is_total_and_distinct() {
        let colors: HashSet<&str> = StationStatus::ALL.into_iter().map(status_color).collect();
        assert_eq!(colors.len(), 4);
        assert_eq!(status_color(StationStatus::Connected), "var(--brand-green)");
    }

    #[test]
    fn station_detail_formats_fields() {
        let store = StationStore::seeded().unwrap();
        let detail = store.station_detail("SPBU-4").unwrap();
        assert_eq!(detail.badge, "04");
        assert_eq!(detail.latitude, "-0.789");
        assert_eq!(detail.longitude, "113.921");
        assert_eq!(detail.offline_hours, "0.75");
        assert_eq!(detail.technician, "Budi");
        assert_eq!(detail.status_color, "var(--brand-blue)");
        assert_eq!(detail.fuel.len(), 3);

        let detail = store.station_detail("SPBU-1").unwrap();
        assert_eq!(detail.technician, "-");
        assert!(store.station_detail("SPBU-404").is_none());
    }
}
