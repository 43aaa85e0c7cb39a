use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use crate::core::{
    DistanceCategory, DistancePoint, HistorySummary, LatestReadings, MonitorSummary, RankResult,
    SleepSummary, SuggestionsOverview,
};
use crate::models::domain::{AlertnessSample, Driver, DriverHistoryRecord, SuitabilityResult};
use crate::models::SleepProfile;

/// Real-time monitor view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorResponse {
    pub drivers: Vec<Driver>,
    pub summary: MonitorSummary,
}

/// Driver detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDetailResponse {
    pub driver: Driver,
    #[serde(rename = "latestReadings")]
    pub latest_readings: LatestReadings,
    #[serde(rename = "attentionByDistance")]
    pub attention_by_distance: Vec<DistancePoint>,
}

/// Driver history view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub records: Vec<DriverHistoryRecord>,
    pub shown: usize,
    pub summary: HistorySummary,
}

/// Ranked suggestions for one distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub category: DistanceCategory,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    pub suggestions: Vec<SuitabilityResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
}

impl From<RankResult> for SuggestionsResponse {
    fn from(result: RankResult) -> Self {
        Self {
            category: result.category,
            distance_km: result.distance_km,
            suggestions: result.results,
            total_candidates: result.total_candidates,
            eligible_candidates: result.eligible_candidates,
        }
    }
}

/// Suggestions for every distance category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsOverviewResponse {
    pub short: SuggestionsResponse,
    pub medium: SuggestionsResponse,
    pub long: SuggestionsResponse,
}

impl From<SuggestionsOverview> for SuggestionsOverviewResponse {
    fn from(overview: SuggestionsOverview) -> Self {
        Self {
            short: overview.short.into(),
            medium: overview.medium.into(),
            long: overview.long.into(),
        }
    }
}

/// Best-effort remote metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveMetricsResponse {
    pub available: bool,
    pub samples: Vec<AlertnessSample>,
    #[serde(rename = "fetchedAt")]
    pub fetched_at: chrono::DateTime<chrono::Utc>,
}

/// Sleep profile with its computed summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SleepProfileResponse {
    pub profile: SleepProfile,
    pub summary: SleepSummary,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

/// Lets extractor error handlers return the JSON body directly
impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}
