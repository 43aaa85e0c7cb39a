use serde::{Deserialize, Serialize};

/// Upper bound (inclusive) of a short trip in kilometers
pub const SHORT_MAX_KM: f64 = 50.0;

/// Upper bound (inclusive) of a medium trip in kilometers
pub const MEDIUM_MAX_KM: f64 = 200.0;

/// Trip length class used by the suitability adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceCategory {
    /// Urban and local routes, up to 50 km
    Short,
    /// Regional routes, 50 - 200 km
    Medium,
    /// Intercity routes, over 200 km
    Long,
}

impl DistanceCategory {
    pub const ALL: [DistanceCategory; 3] = [
        DistanceCategory::Short,
        DistanceCategory::Medium,
        DistanceCategory::Long,
    ];

    /// Classify a trip distance in kilometers
    #[inline]
    pub fn from_km(distance_km: f64) -> Self {
        if distance_km <= SHORT_MAX_KM {
            DistanceCategory::Short
        } else if distance_km <= MEDIUM_MAX_KM {
            DistanceCategory::Medium
        } else {
            DistanceCategory::Long
        }
    }

    /// Distance the suggestions overview scores each category at
    pub fn reference_distance_km(&self) -> f64 {
        match self {
            DistanceCategory::Short => 50.0,
            DistanceCategory::Medium => 200.0,
            DistanceCategory::Long => 500.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceCategory::Short => "short",
            DistanceCategory::Medium => "medium",
            DistanceCategory::Long => "long",
        }
    }
}
