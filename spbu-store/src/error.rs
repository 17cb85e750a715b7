use spbu_station::StationError;
use thiserror::Error;

/// Errors returned by store mutations and seed loading.
///
/// Read-only views never fail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("station {0:?} already exists")]
    DuplicateId(String),

    #[error("station {0:?} not found")]
    NotFound(String),

    #[error("station {0:?} is not on the technician board")]
    NotATask(String),

    #[error("invalid seed: {0}")]
    Seed(#[from] StationError),
}
