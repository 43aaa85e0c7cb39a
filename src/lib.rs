//! Vigil Algo - Driver suitability scoring for the Vigil attention monitor
//!
//! This library provides the suitability scorer used to suggest drivers for a
//! trip, plus the read models behind the monitor, history and sleep views.
//! Everything operates on in-memory snapshots; nothing is persisted.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{calculate_suitability_score, DistanceCategory, Ranker, RankResult};
pub use crate::models::{Driver, DriverHistoryRecord, ExperienceLevel, AttentionLevel, SuitabilityResult};
pub use crate::services::{Fleet, MetricsSource};
