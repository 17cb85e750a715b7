//! Technician task board.
//!
//! Every offline station is a task. Task progress is tracked per station
//! id and starts out open.

use crate::models::{Task, TaskStatus};
use crate::{StationStore, StoreError, StoreEvent};
use spbu_station::StationStatus;

impl StationStore {
    /// Offline stations with their task progress, in collection order.
    pub fn tasks(&self) -> Vec<Task> {
        let inner = self.inner.borrow();
        inner
            .stations
            .iter()
            .filter(|s| s.status == StationStatus::Offline)
            .map(|s| Task {
                station: s.clone(),
                status: inner.task_status.get(&s.id).copied().unwrap_or_default(),
            })
            .collect()
    }

    pub fn task_status(&self, id: &str) -> Option<TaskStatus> {
        self.tasks()
            .into_iter()
            .find(|t| t.station.id == id)
            .map(|t| t.status)
    }

    pub fn set_task_status(&self, id: &str, status: TaskStatus) -> Result<(), StoreError> {
        {
            let mut inner = self.inner.borrow_mut();
            let station = inner
                .stations
                .iter()
                .find(|s| s.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            if station.status != StationStatus::Offline {
                log::warn!("tasks: station {} is {}, not a task", id, station.status);
                return Err(StoreError::NotATask(id.to_string()));
            }
            inner.task_status.insert(id.to_string(), status);
        }
        log::debug!("tasks: {} is now {:?}", id, status);
        self.notify(StoreEvent::TaskChanged {
            id: id.to_string(),
            status,
        });
        Ok(())
    }

    /// A technician takes the task.
    pub fn accept_task(&self, id: &str) -> Result<(), StoreError> {
        self.set_task_status(id, TaskStatus::InProgress)
    }

    pub fn complete_task(&self, id: &str) -> Result<(), StoreError> {
        self.set_task_status(id, TaskStatus::Done)
    }
}
