use thiserror::Error;

/// Errors raised while turning external input into station records.
#[derive(Debug, Error)]
pub enum StationError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown station status {0:?}")]
    UnknownStatus(String),

    #[error("unknown user role {0:?}")]
    UnknownRole(String),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line}: field `{field}` is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },
}
