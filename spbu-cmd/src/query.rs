//! Read-only commands over the station directory.

use crate::output::{render, Table};
use crate::Format;
use log::info;
use spbu_data::display;
use spbu_station::{Station, StationStatus};
use spbu_store::{status_color, RegionFilter, StationFilter, StationStore, StatusFilter};
use std::collections::BTreeMap;

/// Table of stations shared by `list`, `filter` and the task board.
pub fn station_table(stations: &[Station]) -> Table {
    let mut table = Table::new([
        "ID",
        "NAME",
        "REGION",
        "STATUS",
        "CLASS",
        "LAST REPORT",
        "TECHNICIAN",
    ]);
    for s in stations {
        table.row([
            s.id.clone(),
            s.name.clone(),
            s.region.clone(),
            s.status.to_string(),
            display::or_placeholder(s.station_class.as_deref()),
            display::or_placeholder(s.last_report.as_deref()),
            display::or_placeholder(s.technician.as_deref()),
        ]);
    }
    table
}

pub fn run_list(store: &StationStore, format: Format) -> anyhow::Result<String> {
    let stations = store.list_stations();
    render(format, stations.as_slice(), station_table)
}

pub fn run_filter(
    store: &StationStore,
    format: Format,
    query: &str,
    status: StatusFilter,
    region: &str,
) -> anyhow::Result<String> {
    let filter = StationFilter {
        query: query.to_string(),
        status,
        region: RegionFilter::from(region),
    };
    let stations = store.filter_stations(&filter);
    info!("Filter matched {} stations", stations.len());
    render(format, stations.as_slice(), station_table)
}

pub fn run_kpi(store: &StationStore, format: Format) -> anyhow::Result<String> {
    let kpi = store.compute_kpi();
    render(format, &kpi, |k| {
        let mut table = Table::new(["METRIC", "COUNT"]);
        table.row(["total".to_string(), k.total.to_string()]);
        for status in StationStatus::ALL {
            table.row([status.to_string(), k.count(status).to_string()]);
        }
        table
    })
}

pub fn run_alerts(
    store: &StationStore,
    format: Format,
    threshold_hours: f64,
) -> anyhow::Result<String> {
    if threshold_hours.is_nan() {
        anyhow::bail!("threshold must be a number of hours");
    }
    let alerts = store.compute_alerts(threshold_hours);
    info!(
        "{} alerts at a threshold of {} hours",
        alerts.len(),
        threshold_hours
    );
    render(format, alerts.as_slice(), |alerts| {
        let mut table = Table::new(["ID", "LEVEL", "MESSAGE"]);
        for a in alerts {
            table.row([a.id.as_str(), a.level.as_str(), a.message.as_str()]);
        }
        table
    })
}

pub fn run_show(store: &StationStore, format: Format, id: &str) -> anyhow::Result<String> {
    let Some(detail) = store.station_detail(id) else {
        anyhow::bail!("station {} not found", id);
    };
    render(format, &detail, |d| {
        let mut table = Table::new(["FIELD", "VALUE"]);
        table.row(["id", d.id.as_str()]);
        table.row(["name", d.name.as_str()]);
        table.row(["badge", d.badge.as_str()]);
        table.row(["region", d.region.as_str()]);
        table.row(["status".to_string(), format!("{} ({})", d.status, d.status_color)]);
        table.row(["class", d.station_class.as_str()]);
        table.row(["latitude", d.latitude.as_str()]);
        table.row(["longitude", d.longitude.as_str()]);
        table.row(["last report", d.last_report.as_str()]);
        table.row(["technician", d.technician.as_str()]);
        for level in &d.fuel {
            table.row([level.grade.to_string(), format!("{}%", level.percent)]);
        }
        table.row(["offline duration".to_string(), format!("~ {} hours (approx)", d.offline_hours)]);
        table
    })
}

pub fn run_regions(store: &StationStore, format: Format) -> anyhow::Result<String> {
    let regions = store.regions();
    render(format, regions.as_slice(), |regions| {
        let mut table = Table::new(["REGION"]);
        for r in regions {
            table.row([r.as_str()]);
        }
        table
    })
}

pub fn run_colors(format: Format, status: Option<StationStatus>) -> anyhow::Result<String> {
    let statuses: Vec<StationStatus> = match status {
        Some(s) => vec![s],
        None => StationStatus::ALL.to_vec(),
    };
    let colors: BTreeMap<String, &'static str> = statuses
        .into_iter()
        .map(|s| (s.to_string(), status_color(s)))
        .collect();
    render(format, &colors, |colors| {
        let mut table = Table::new(["STATUS", "COLOR"]);
        for (status, color) in colors {
            table.row([status.as_str(), *color]);
        }
        table
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StationStore {
        StationStore::seeded().unwrap()
    }

    #[test]
    fn list_prints_every_station() {
        let out = run_list(&store(), Format::Table).unwrap();
        assert_eq!(out.lines().count(), 6);
        assert!(out.lines().next().unwrap().starts_with("ID"));
        assert!(out.contains("SPBU 34.123.05"));
    }

    #[test]
    fn filter_json_is_a_station_array() {
        let out = run_filter(&store(), Format::Json, "jbr", StatusFilter::All, "all").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let ids: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["SPBU-2", "SPBU-5"]);
    }

    #[test]
    fn filter_without_match_prints_headers_only() {
        let out = run_filter(
            &store(),
            Format::Table,
            "",
            StatusFilter::Only(StationStatus::Priority),
            "KLT",
        )
        .unwrap();
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn kpi_json() {
        let out = run_kpi(&store(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 5);
        assert_eq!(value["offline"], 2);
        assert_eq!(value["onroute"], 1);
    }

    #[test]
    fn alerts_table_shows_levels() {
        let out = run_alerts(&store(), Format::Table, 24.0).unwrap();
        assert!(out.contains("off-SPBU-5"));
        assert!(out.contains("error"));
        assert!(out.contains("prio-SPBU-3"));
        assert!(!out.contains("off-SPBU-2"));
    }

    #[test]
    fn alerts_reject_nan_threshold() {
        assert!(run_alerts(&store(), Format::Table, f64::NAN).is_err());
    }

    #[test]
    fn show_unknown_station_fails() {
        assert!(run_show(&store(), Format::Table, "SPBU-404").is_err());
        let out = run_show(&store(), Format::Table, "SPBU-5").unwrap();
        assert!(out.contains("~ 26.00 hours (approx)"));
        assert!(out.contains("Cici"));
    }

    #[test]
    fn colors_for_one_status() {
        let out = run_colors(Format::Json, Some(StationStatus::Priority)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["priority"], "var(--brand-orange)");
        assert!(value.get("offline").is_none());
    }
}
