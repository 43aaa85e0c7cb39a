// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod navigation;
pub mod ranker;
pub mod scoring;
pub mod sleep;
pub mod summary;
pub mod timeline;

pub use distance::DistanceCategory;
pub use filters::{filter_history, is_critical, is_eligible_for_dispatch, matches_history_query};
pub use navigation::{Action, DashboardState, View};
pub use ranker::{RankResult, Ranker, SuggestionsOverview, DEFAULT_SUGGESTION_LIMIT};
pub use scoring::{advisory, calculate_suitability_score, suitability_tier};
pub use sleep::{summarize_sleep, SleepSummary};
pub use summary::{summarize_history, summarize_monitor, HistorySummary, MonitorSummary};
pub use timeline::{attention_by_distance, latest_readings, DistancePoint, LatestReadings};
