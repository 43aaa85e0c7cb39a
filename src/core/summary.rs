//! Headline figures for the monitor and history views

use serde::{Deserialize, Serialize};
use crate::core::filters::{is_critical, is_eligible_for_dispatch};
use crate::models::{Driver, DriverHistoryRecord, DriverStatus, RiskLevel};

/// Monitor header statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSummary {
    #[serde(rename = "activeDrivers")]
    pub active_drivers: usize,
    #[serde(rename = "criticalDrivers")]
    pub critical_drivers: usize,
    /// Rounded mean attention score, `None` for an empty fleet
    #[serde(rename = "averageAttention")]
    pub average_attention: Option<f64>,
    #[serde(rename = "activeRoutes")]
    pub active_routes: usize,
}

/// History header statistics, computed over the unfiltered records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    #[serde(rename = "totalDrivers")]
    pub total_drivers: usize,
    #[serde(rename = "activeDrivers")]
    pub active_drivers: usize,
    #[serde(rename = "highRiskDrivers")]
    pub high_risk_drivers: usize,
    #[serde(rename = "averageAttention")]
    pub average_attention: Option<f64>,
}

pub fn summarize_monitor(drivers: &[Driver]) -> MonitorSummary {
    MonitorSummary {
        active_drivers: drivers.iter().filter(|d| is_eligible_for_dispatch(d)).count(),
        critical_drivers: drivers.iter().filter(|d| is_critical(d)).count(),
        average_attention: rounded_mean(drivers.iter().map(|d| d.attention_score)),
        active_routes: drivers.iter().filter(|d| d.has_active_route()).count(),
    }
}

pub fn summarize_history(records: &[DriverHistoryRecord]) -> HistorySummary {
    HistorySummary {
        total_drivers: records.len(),
        active_drivers: records
            .iter()
            .filter(|r| r.status == DriverStatus::Active)
            .count(),
        high_risk_drivers: records
            .iter()
            .filter(|r| r.risk_level == RiskLevel::High)
            .count(),
        average_attention: rounded_mean(records.iter().map(|r| r.average_attention_score)),
    }
}

fn rounded_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    Some((sum / count as f64).round())
}
