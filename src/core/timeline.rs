//! Per-driver views over the alertness samples

use serde::{Deserialize, Serialize};
use crate::models::AlertnessSample;

/// Most recent monitor readings for the driver detail view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LatestReadings {
    #[serde(rename = "eyeMovement")]
    pub eye_movement: f64,
    #[serde(rename = "headPosition")]
    pub head_position: f64,
    #[serde(rename = "blinkRate")]
    pub blink_rate: f64,
    #[serde(rename = "yawnCount")]
    pub yawn_count: u32,
}

/// Attention score at a point along the route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistancePoint {
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "attentionScore")]
    pub attention_score: f64,
}

/// Readings from the last sample, or all zeros when there is none
pub fn latest_readings(samples: &[AlertnessSample]) -> LatestReadings {
    samples
        .last()
        .map(|sample| LatestReadings {
            eye_movement: sample.eye_movement,
            head_position: sample.head_position,
            blink_rate: sample.blink_rate,
            yawn_count: sample.yawn_count,
        })
        .unwrap_or_default()
}

/// Spread samples evenly over `total_distance_km`
///
/// Sample `i` sits at the end of segment `i`, rounded to whole kilometers.
pub fn attention_by_distance(samples: &[AlertnessSample], total_distance_km: f64) -> Vec<DistancePoint> {
    if samples.is_empty() || !(total_distance_km > 0.0) {
        return Vec::new();
    }

    let segment = total_distance_km / samples.len() as f64;

    samples
        .iter()
        .enumerate()
        .map(|(index, sample)| DistancePoint {
            distance_km: (segment * (index + 1) as f64).round(),
            attention_score: sample.attention_score,
        })
        .collect()
}
