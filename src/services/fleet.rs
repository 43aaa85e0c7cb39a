use crate::models::{Driver, DriverHistoryRecord, SleepProfile};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Demo dataset compiled into the binary
const BUILTIN_DATASET: &str = include_str!("../../data/fleet.json");

/// Errors that can occur when loading a fleet dataset
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Failed to read dataset: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid dataset: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Read-only snapshot of the drivers the dashboard shows
///
/// Loaded once at startup and shared between workers behind an `Arc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fleet {
    #[serde(default)]
    pub drivers: Vec<Driver>,
    #[serde(default)]
    pub history: Vec<DriverHistoryRecord>,
    #[serde(rename = "sleepProfiles", default)]
    pub sleep_profiles: Vec<SleepProfile>,
}

impl Fleet {
    /// Parse a dataset from JSON
    pub fn from_json(json: &str) -> Result<Self, FleetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a dataset from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FleetError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let fleet = Self::from_json(&json)?;

        tracing::debug!(
            "Loaded dataset from {}: {} drivers, {} history records, {} sleep profiles",
            path.as_ref().display(),
            fleet.drivers.len(),
            fleet.history.len(),
            fleet.sleep_profiles.len()
        );

        Ok(fleet)
    }

    /// The bundled demo dataset
    pub fn builtin() -> Result<Self, FleetError> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Load from `path` when given, otherwise use the bundled dataset
    pub fn load(path: Option<&str>) -> Result<Self, FleetError> {
        match path {
            Some(path) if !path.is_empty() => Self::from_path(path),
            _ => Self::builtin(),
        }
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn sleep_profile(&self, id: &str) -> Option<&SleepProfile> {
        self.sleep_profiles.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let fleet = Fleet::builtin().unwrap();

        assert!(!fleet.drivers.is_empty());
        assert!(!fleet.history.is_empty());
        assert!(!fleet.sleep_profiles.is_empty());
        assert!(fleet.drivers.iter().any(|d| !d.is_on_duty));
    }

    #[test]
    fn test_lookup_by_id() {
        let fleet = Fleet::builtin().unwrap();

        assert_eq!(fleet.driver("d1").map(|d| d.name.as_str()), Some("Carlos Mendoza"));
        assert!(fleet.driver("missing").is_none());
        assert!(fleet.sleep_profile("s1").is_some());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Fleet::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FleetError::ParseError(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Fleet::from_path("/nonexistent/vigil/fleet.json").unwrap_err();
        assert!(matches!(err, FleetError::IoError(_)));
    }

    #[test]
    fn test_empty_path_falls_back_to_builtin() {
        let fleet = Fleet::load(Some("")).unwrap();
        assert!(!fleet.drivers.is_empty());
    }
}
