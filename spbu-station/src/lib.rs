//! Core types for the SPBU operations dashboard.
//!
//! A [`station::Station`] is one fuel outlet with a location, a closed
//! [`status::StationStatus`] and optional operational metadata. Seed lists
//! are read from CSV; the fixture compiled into this crate is the default
//! seed used by the store and the CLI.

pub mod error;
pub mod role;
pub mod station;
pub mod status;

pub use error::StationError;
pub use role::UserRole;
pub use station::{FuelGrade, FuelStock, Station};
pub use status::StationStatus;
