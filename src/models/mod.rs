// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Advisory, AlertnessSample, AttentionLevel, Driver, DriverHistoryRecord, DriverStatus,
    ExperienceLevel, RiskLevel, SleepNight, SleepProfile, SleepStatus, SuitabilityResult,
    SuitabilityTier,
};
pub use requests::{HistoryQuery, SuggestionsQuery};
pub use responses::{
    DriverDetailResponse, ErrorResponse, HealthResponse, HistoryResponse, LiveMetricsResponse,
    MonitorResponse, SleepProfileResponse, SuggestionsOverviewResponse, SuggestionsResponse,
};
