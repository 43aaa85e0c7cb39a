use crate::core::distance::DistanceCategory;
use crate::models::{Advisory, AttentionLevel, Driver, ExperienceLevel, SuitabilityTier};

const ATTENTION_WEIGHT: f64 = 0.4;
const FATIGUE_WEIGHT: f64 = 0.3;

const LONG_TRIP_NOVICE_PENALTY: f64 = 15.0;
const SHORT_TRIP_CRITICAL_PENALTY: f64 = 25.0;

/// Calculate a suitability score (0-100) for a driver on a trip of `distance_km`
///
/// Scoring formula:
/// score = (
///     attention * 0.4              # Instantaneous attentiveness
///     + experience bonus           # expert 30, intermediate 20, otherwise 10
///     - fatigue * 0.3
///     - duty hours penalty         # >8h 20, >6h 10
///     - distance adjustment        # long + novice 15, short + critical 25
/// )
///
/// Penalties may take the running sum below zero; the result is clamped once
/// at the end.
pub fn calculate_suitability_score(driver: &Driver, distance_km: f64) -> f64 {
    let category = DistanceCategory::from_km(distance_km);

    let mut score = driver.attention_score * ATTENTION_WEIGHT;
    score += experience_bonus(driver.experience_level);
    score -= driver.fatigue_level * FATIGUE_WEIGHT;
    score -= duty_hours_penalty(driver.hours_on_duty);
    score -= distance_adjustment(driver, category);

    // f64::max drops NaN, so a NaN sum ends up at 0
    score.max(0.0).min(100.0)
}

#[inline]
fn experience_bonus(level: ExperienceLevel) -> f64 {
    match level {
        ExperienceLevel::Expert => 30.0,
        ExperienceLevel::Intermediate => 20.0,
        ExperienceLevel::Novice | ExperienceLevel::Unrecognized => 10.0,
    }
}

#[inline]
fn duty_hours_penalty(hours_on_duty: Option<f64>) -> f64 {
    match hours_on_duty {
        Some(hours) if hours > 8.0 => 20.0,
        Some(hours) if hours > 6.0 => 10.0,
        _ => 0.0,
    }
}

#[inline]
fn distance_adjustment(driver: &Driver, category: DistanceCategory) -> f64 {
    let mut penalty = 0.0;
    if category == DistanceCategory::Long && driver.experience_level == ExperienceLevel::Novice {
        penalty += LONG_TRIP_NOVICE_PENALTY;
    }
    if category == DistanceCategory::Short && driver.attention_level == AttentionLevel::Critical {
        penalty += SHORT_TRIP_CRITICAL_PENALTY;
    }
    penalty
}

/// Map a score to its display tier
pub fn suitability_tier(score: f64) -> SuitabilityTier {
    if score >= 80.0 {
        SuitabilityTier::Excellent
    } else if score >= 60.0 {
        SuitabilityTier::Good
    } else {
        SuitabilityTier::NotRecommended
    }
}

/// Reason shown next to a driver who is not recommended, if any
pub fn advisory(driver: &Driver, score: f64) -> Option<Advisory> {
    if suitability_tier(score) != SuitabilityTier::NotRecommended {
        return None;
    }

    if driver.fatigue_level > 50.0 {
        Some(Advisory::HighFatigue)
    } else {
        Some(Advisory::LowAttention)
    }
}
