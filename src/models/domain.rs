use serde::{Deserialize, Serialize};

/// Driver experience tier
///
/// The dashboard data uses Spanish labels, accepted here as aliases.
/// Anything else lands in `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[serde(alias = "novato")]
    Novice,
    #[serde(alias = "intermedio")]
    Intermediate,
    #[serde(alias = "experto")]
    Expert,
    #[serde(other)]
    Unrecognized,
}

/// Qualitative attention level reported by the in-cab monitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttentionLevel {
    #[serde(alias = "optimo")]
    Optimal,
    #[serde(alias = "moderado")]
    Moderate,
    #[serde(alias = "critico")]
    Critical,
    #[serde(other)]
    Unknown,
}

/// One alertness reading. Remote metrics records share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertnessSample {
    pub timestamp: String,
    #[serde(rename = "attentionScore")]
    pub attention_score: f64,
    #[serde(rename = "eyeMovement")]
    pub eye_movement: f64,
    #[serde(rename = "headPosition")]
    pub head_position: f64,
    #[serde(rename = "blinkRate")]
    pub blink_rate: f64,
    #[serde(rename = "yawnCount")]
    pub yawn_count: u32,
}

/// Driver as shown on the real-time monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "attentionLevel")]
    pub attention_level: AttentionLevel,
    /// 0-100
    #[serde(rename = "attentionScore")]
    pub attention_score: f64,
    /// 0-100, inverse of alertness
    #[serde(rename = "fatigueLevel")]
    pub fatigue_level: f64,
    #[serde(rename = "alertnessData", default)]
    pub alertness_data: Vec<AlertnessSample>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: String,
    #[serde(rename = "licenseNumber")]
    pub license_number: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "totalTrips", default)]
    pub total_trips: u32,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: u32,
    #[serde(rename = "lastTripDate", default)]
    pub last_trip_date: String,
    #[serde(rename = "safetyScore", default)]
    pub safety_score: f64,
    #[serde(rename = "currentRoute", default)]
    pub current_route: Option<String>,
    #[serde(rename = "estimatedDistance", default)]
    pub estimated_distance: Option<f64>,
    #[serde(rename = "isOnDuty")]
    pub is_on_duty: bool,
    #[serde(rename = "shiftStartTime", default)]
    pub shift_start_time: Option<String>,
    #[serde(rename = "hoursOnDuty", default)]
    pub hours_on_duty: Option<f64>,
}

impl Driver {
    /// Whether the driver is currently assigned to a route
    pub fn has_active_route(&self) -> bool {
        self.current_route
            .as_deref()
            .map_or(false, |route| !route.is_empty())
    }
}

/// Employment status in the driver history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    #[serde(alias = "activo")]
    Active,
    #[serde(alias = "inactivo")]
    Inactive,
    #[serde(alias = "suspendido")]
    Suspended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[serde(alias = "bajo")]
    Low,
    #[serde(alias = "medio")]
    Medium,
    #[serde(alias = "alto")]
    High,
}

/// Long-term record shown in the driver history view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverHistoryRecord {
    pub id: String,
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(rename = "licenseNumber")]
    pub license_number: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "totalTrips", default)]
    pub total_trips: u32,
    #[serde(rename = "experienceLevel")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: u32,
    #[serde(rename = "averageAttentionScore")]
    pub average_attention_score: f64,
    #[serde(rename = "lastActiveDate", default)]
    pub last_active_date: String,
    pub status: DriverStatus,
    #[serde(rename = "incidentsCount", default)]
    pub incidents_count: u32,
    #[serde(rename = "tripType", alias = "tipoviaje", default)]
    pub trip_type: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "totalHoursDriven", default)]
    pub total_hours_driven: f64,
    #[serde(rename = "fatigueIncidents", default)]
    pub fatigue_incidents: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SleepStatus {
    #[serde(alias = "perfecto")]
    Optimal,
    #[serde(alias = "con-problemas")]
    WithIssues,
    #[serde(alias = "critico")]
    Critical,
}

/// One night of recorded sleep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepNight {
    pub date: String,
    pub hours: f64,
    /// 0-100
    pub quality: f64,
    #[serde(rename = "deepSleep")]
    pub deep_sleep: f64,
    #[serde(rename = "remSleep")]
    pub rem_sleep: f64,
}

/// Driver profile from the sleep monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub status: SleepStatus,
    #[serde(rename = "sleepData", default)]
    pub sleep_data: Vec<SleepNight>,
    #[serde(rename = "lastUpdate", default)]
    pub last_update: String,
    #[serde(rename = "averageHours")]
    pub average_hours: f64,
    #[serde(rename = "sleepQuality")]
    pub sleep_quality: f64,
    #[serde(rename = "licenseNumber")]
    pub license_number: String,
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
    #[serde(rename = "totalTrips", default)]
    pub total_trips: u32,
    #[serde(rename = "confidenceLevel", default)]
    pub confidence_level: f64,
    #[serde(rename = "yearsExperience", default)]
    pub years_experience: u32,
    #[serde(rename = "lastTripDate", default)]
    pub last_trip_date: String,
    #[serde(rename = "safetyScore", default)]
    pub safety_score: f64,
}

/// Ranked suitability of one driver for a trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitabilityResult {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    pub name: String,
    /// Unrounded, used for ordering
    pub score: f64,
    /// `score` rounded to the nearest whole point for display
    #[serde(rename = "displayScore")]
    pub display_score: u8,
    pub tier: SuitabilityTier,
    /// Present only when the driver is not recommended
    pub advisory: Option<Advisory>,
}

/// Display tier for a suitability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityTier {
    Excellent,
    Good,
    NotRecommended,
}

/// Main reason a driver is not recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    HighFatigue,
    LowAttention,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spanish_labels_deserialize() {
        let level: ExperienceLevel = serde_json::from_str("\"experto\"").unwrap();
        assert_eq!(level, ExperienceLevel::Expert);

        let level: AttentionLevel = serde_json::from_str("\"critico\"").unwrap();
        assert_eq!(level, AttentionLevel::Critical);

        let risk: RiskLevel = serde_json::from_str("\"alto\"").unwrap();
        assert_eq!(risk, RiskLevel::High);
    }

    #[test]
    fn test_unrecognized_experience() {
        let level: ExperienceLevel = serde_json::from_str("\"veterano\"").unwrap();
        assert_eq!(level, ExperienceLevel::Unrecognized);
    }

    #[test]
    fn test_driver_optional_fields_default() {
        let json = r#"{
            "id": "d1",
            "name": "Ana Ruiz",
            "attentionLevel": "optimo",
            "attentionScore": 88,
            "fatigueLevel": 12,
            "licenseNumber": "C-100",
            "vehicleType": "camión de carga",
            "experienceLevel": "intermedio",
            "isOnDuty": true
        }"#;

        let driver: Driver = serde_json::from_str(json).unwrap();
        assert!(driver.hours_on_duty.is_none());
        assert!(driver.alertness_data.is_empty());
        assert!(!driver.has_active_route());
    }
}
