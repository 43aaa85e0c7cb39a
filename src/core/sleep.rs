use serde::{Deserialize, Serialize};
use crate::models::SleepProfile;

/// Totals shown on the sleep profile detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub nights: usize,
    #[serde(rename = "totalHours")]
    pub total_hours: f64,
    #[serde(rename = "bestQuality")]
    pub best_quality: Option<f64>,
    #[serde(rename = "worstQuality")]
    pub worst_quality: Option<f64>,
}

pub fn summarize_sleep(profile: &SleepProfile) -> SleepSummary {
    let nights = &profile.sleep_data;

    let best_quality = nights.iter().map(|n| n.quality).reduce(f64::max);
    let worst_quality = nights.iter().map(|n| n.quality).reduce(f64::min);

    SleepSummary {
        nights: nights.len(),
        total_hours: nights.iter().map(|n| n.hours).sum(),
        best_quality,
        worst_quality,
    }
}
