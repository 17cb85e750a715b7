//! In-memory station directory for the SPBU operations dashboard.
//!
//! The store owns the canonical, insertion-ordered list of stations and
//! exposes typed, side-effect-free views over it. Every page of the
//! dashboard (map, station list, technician board, consumer view) reads
//! through these views instead of keeping its own copy.
//!
//! # Architecture
//!
//! - `Rc<RefCell<..>>` wrapper: single-threaded, cheaply cloneable, every
//!   clone sees the same collection
//! - Seed data loaded once from CSV (the embedded fixture or a file chosen
//!   at startup)
//! - Derivations recomputed on demand; nothing is cached
//! - Mutations validate at the boundary and notify explicit observers
//!
//! # Usage
//!
//! ```rust
//! use spbu_store::{StationFilter, StationStore};
//! use spbu_station::StationStatus;
//!
//! let store = StationStore::seeded().unwrap();
//!
//! let kpi = store.compute_kpi();
//! assert_eq!(kpi.total, store.list_stations().len());
//!
//! let offline = store.filter_stations(&StationFilter::new().status(StationStatus::Offline));
//! assert_eq!(offline.len(), kpi.offline);
//!
//! let alerts = store.compute_alerts(24.0);
//! assert!(alerts.iter().any(|a| a.id == "off-SPBU-5"));
//! ```

pub mod error;
mod loader;
pub mod models;
mod mutations;
mod queries;
mod tasks;

pub use error::StoreError;
pub use models::{
    Alert, AlertLevel, Kpi, RegionFilter, StationDetail, StationFilter, StationPatch, StatusFilter,
    StoreEvent, Task, TaskStatus,
};
pub use queries::status_color;

use spbu_station::{Station, UserRole};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type Observer = Rc<dyn Fn(&StoreEvent)>;

#[derive(Default)]
struct Inner {
    stations: Vec<Station>,
    task_status: HashMap<String, TaskStatus>,
    role: UserRole,
    observers: Vec<Observer>,
}

/// The station directory.
///
/// Cloning is cheap (via `Rc`); clones share the same stations, task
/// board and observers.
///
/// # Example
///
/// ```rust
/// use spbu_store::StationStore;
/// use spbu_station::{Station, StationStatus};
///
/// let store = StationStore::new();
/// store
///     .add_station(Station::new("SPBU-1", "SPBU 34.123.01", -6.2, 106.816, "DKI", StationStatus::Connected))
///     .unwrap();
/// assert_eq!(store.list_stations().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct StationStore {
    inner: Rc<RefCell<Inner>>,
}

impl StationStore {
    /// Create an empty store. Use [`load_stations`](Self::load_stations)
    /// or the mutation methods to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the embedded seed list.
    pub fn seeded() -> Result<Self, StoreError> {
        let store = Self::new();
        store.load_stations(spbu_station::station::CSV_OBJECT)?;
        Ok(store)
    }

    /// Create a store from an already parsed list of stations.
    pub fn from_stations(stations: Vec<Station>) -> Result<Self, StoreError> {
        let store = Self::new();
        store.replace_all(stations)?;
        Ok(store)
    }

    /// Register an observer called after every successful mutation, in
    /// registration order.
    pub fn subscribe(&self, observer: impl Fn(&StoreEvent) + 'static) {
        self.inner.borrow_mut().observers.push(Rc::new(observer));
    }

    pub fn role(&self) -> UserRole {
        self.inner.borrow().role
    }

    pub fn set_role(&self, role: UserRole) {
        self.inner.borrow_mut().role = role;
        self.notify(StoreEvent::RoleChanged { role });
    }

    /// Observers run with no borrow held, so they may read the store.
    fn notify(&self, event: StoreEvent) {
        let observers = self.inner.borrow().observers.clone();
        for observer in observers {
            observer(&event);
        }
    }
}
