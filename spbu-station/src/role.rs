use crate::error::StationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of the person viewing the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Admin,
    Technician,
    Operator,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Admin => "admin",
            UserRole::Technician => "technician",
            UserRole::Operator => "operator",
        };
        f.write_str(s)
    }
}

impl FromStr for UserRole {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "technician" => Ok(UserRole::Technician),
            "operator" => Ok(UserRole::Operator),
            _ => Err(StationError::UnknownRole(s.to_string())),
        }
    }
}
