use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::{DriverStatus, RiskLevel};

/// Query for ranked suggestions at a trip distance
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SuggestionsQuery {
    #[validate(range(min = 0.0), custom(function = "validate_finite"))]
    #[serde(alias = "distance_km", rename = "distanceKm")]
    pub distance_km: f64,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<usize>,
}

/// NaN passes a range check, so non-finite distances are rejected here
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

/// Filters for the driver history view
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct HistoryQuery {
    #[validate(length(max = 100))]
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<DriverStatus>,
    #[serde(alias = "risk_level", rename = "riskLevel", default)]
    pub risk_level: Option<RiskLevel>,
}
