//! Seed loading.
//!
//! A seed is a CSV string in the format read by
//! [`Station::parse_station_csv`]. Loading replaces the whole collection
//! and resets the technician board; a seed with duplicate ids is rejected
//! and leaves the store untouched.

use crate::{StationStore, StoreError, StoreEvent};
use spbu_station::Station;
use std::collections::HashSet;

impl StationStore {
    /// Replace the collection with the stations in `csv_data`.
    ///
    /// # Example CSV
    /// ```text
    /// id,name,lat,lng,region,status,class,last_report,pertalite,pertamax,solar,technician
    /// SPBU-2,SPBU 34.123.02,-6.920,107.610,JBR,offline,B,3h ago,12,20,8,Adi
    /// ```
    pub fn load_stations(&self, csv_data: &str) -> Result<usize, StoreError> {
        let stations = Station::parse_station_csv(csv_data)?;
        self.replace_all(stations)
    }

    pub(crate) fn replace_all(&self, stations: Vec<Station>) -> Result<usize, StoreError> {
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.id.as_str()) {
                log::warn!("loader: rejected seed, duplicate station id {}", station.id);
                return Err(StoreError::DuplicateId(station.id.clone()));
            }
        }

        let count = stations.len();
        {
            let mut inner = self.inner.borrow_mut();
            inner.stations = stations;
            inner.task_status.clear();
        }
        log::info!("loader: Loaded {} stations", count);
        self.notify(StoreEvent::Loaded { count });
        Ok(count)
    }
}
