//! Mutation entry points.
//!
//! Each mutation validates against the current collection, applies the
//! change and then notifies observers. A rejected mutation changes nothing.

use crate::models::StationPatch;
use crate::{StationStore, StoreError, StoreEvent};
use spbu_station::{Station, StationStatus};

impl StationStore {
    /// Append a station. Its id must not be in use.
    pub fn add_station(&self, station: Station) -> Result<(), StoreError> {
        let id = station.id.clone();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.stations.iter().any(|s| s.id == id) {
                log::warn!("mutation: add rejected, duplicate station id {}", id);
                return Err(StoreError::DuplicateId(id));
            }
            inner.stations.push(station);
        }
        log::debug!("mutation: added station {}", id);
        self.notify(StoreEvent::Added { id });
        Ok(())
    }

    /// Apply `patch` to the station with `id`, keeping its position.
    ///
    /// Returns the updated station. A station that leaves the offline
    /// status also leaves the technician board.
    pub fn update_station(&self, id: &str, patch: StationPatch) -> Result<Station, StoreError> {
        let updated = {
            let mut inner = self.inner.borrow_mut();
            let station = match inner.stations.iter_mut().find(|s| s.id == id) {
                Some(station) => station,
                None => {
                    log::warn!("mutation: update rejected, unknown station id {}", id);
                    return Err(StoreError::NotFound(id.to_string()));
                }
            };
            patch.apply(station);
            let updated = station.clone();
            if updated.status != StationStatus::Offline {
                inner.task_status.remove(id);
            }
            updated
        };
        log::debug!("mutation: updated station {}", id);
        self.notify(StoreEvent::Updated { id: id.to_string() });
        Ok(updated)
    }

    /// Remove the station with `id` and return it.
    pub fn remove_station(&self, id: &str) -> Result<Station, StoreError> {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            let Some(position) = inner.stations.iter().position(|s| s.id == id) else {
                log::warn!("mutation: remove rejected, unknown station id {}", id);
                return Err(StoreError::NotFound(id.to_string()));
            };
            inner.task_status.remove(id);
            inner.stations.remove(position)
        };
        log::debug!("mutation: removed station {}", id);
        self.notify(StoreEvent::Removed { id: id.to_string() });
        Ok(removed)
    }
}
