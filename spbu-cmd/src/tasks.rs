//! Technician board commands.
//!
//! The board lives only as long as the process, so `accept` and `complete`
//! print the board after applying the change.

use crate::output::{render, Table};
use crate::Format;
use log::info;
use spbu_data::display;
use spbu_store::{StationStore, Task, TaskStatus};

fn task_status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Open => "open",
        TaskStatus::InProgress => "in progress",
        TaskStatus::Done => "done",
    }
}

fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new(["ID", "STATION", "REGION", "LAST REPORT", "TECHNICIAN", "TASK"]);
    for t in tasks {
        table.row([
            t.station.id.clone(),
            t.station.name.clone(),
            t.station.region.clone(),
            display::or_placeholder(t.station.last_report.as_deref()),
            display::or_placeholder(t.station.technician.as_deref()),
            task_status_label(t.status).to_string(),
        ]);
    }
    table
}

pub fn run_tasks(store: &StationStore, format: Format) -> anyhow::Result<String> {
    let tasks = store.tasks();
    render(format, tasks.as_slice(), task_table)
}

pub fn run_accept(store: &StationStore, format: Format, id: &str) -> anyhow::Result<String> {
    store.accept_task(id)?;
    info!("Task {} accepted", id);
    run_tasks(store, format)
}

pub fn run_complete(store: &StationStore, format: Format, id: &str) -> anyhow::Result<String> {
    store.complete_task(id)?;
    info!("Task {} done", id);
    run_tasks(store, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_lists_offline_stations() {
        let store = StationStore::seeded().unwrap();
        let out = run_tasks(&store, Format::Table).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("SPBU-2"));
        assert!(out.contains("SPBU-5"));
        assert!(!out.contains("SPBU-1 "));
    }

    #[test]
    fn accept_marks_task_in_progress() {
        let store = StationStore::seeded().unwrap();
        let out = run_accept(&store, Format::Json, "SPBU-2").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["status"], "in_progress");
        assert_eq!(value[1]["status"], "open");
    }

    #[test]
    fn complete_rejects_connected_station() {
        let store = StationStore::seeded().unwrap();
        let err = run_complete(&store, Format::Table, "SPBU-1").unwrap_err();
        assert!(err.to_string().contains("not on the technician board"));
    }
}
