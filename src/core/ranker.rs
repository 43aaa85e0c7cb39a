use crate::core::{
    distance::DistanceCategory,
    filters::is_eligible_for_dispatch,
    scoring::{advisory, calculate_suitability_score, suitability_tier},
};
use crate::models::{Driver, SuitabilityResult};

/// Number of suggestions shown per distance when none is requested
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Result of one ranking request
#[derive(Debug)]
pub struct RankResult {
    pub category: DistanceCategory,
    pub distance_km: f64,
    pub results: Vec<SuitabilityResult>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Suggestions for every distance category, each at its reference distance
#[derive(Debug)]
pub struct SuggestionsOverview {
    pub short: RankResult,
    pub medium: RankResult,
    pub long: RankResult,
}

/// Ranks on-duty drivers by suitability for a trip
///
/// # Pipeline Stages
/// 1. Duty filter
/// 2. Scoring
/// 3. Stable sort, highest score first
/// 4. Truncation
#[derive(Debug, Clone)]
pub struct Ranker {
    default_limit: usize,
}

impl Ranker {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank `drivers` for a trip of `distance_km`
    ///
    /// # Arguments
    /// * `drivers` - Snapshot of the fleet; never modified
    /// * `distance_km` - Trip distance in kilometers
    /// * `limit` - Maximum number of results to return
    ///
    /// # Returns
    /// RankResult whose results are sorted non-increasing by score.
    /// Drivers with equal scores keep their input order.
    pub fn rank(&self, drivers: &[Driver], distance_km: f64, limit: usize) -> RankResult {
        let total_candidates = drivers.len();

        let mut scored: Vec<(&Driver, f64)> = drivers
            .iter()
            // Stage 1: only drivers available for dispatch
            .filter(|driver| is_eligible_for_dispatch(driver))
            // Stage 2: score at the requested distance
            .map(|driver| (driver, calculate_suitability_score(driver, distance_km)))
            .collect();

        let eligible_candidates = scored.len();

        // Stage 3: sort_by is stable, ties keep input order
        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Stage 4: limit results
        scored.truncate(limit);

        let results = scored
            .into_iter()
            .map(|(driver, score)| SuitabilityResult {
                driver_id: driver.id.clone(),
                name: driver.name.clone(),
                score,
                // clamped to 0-100, so the cast cannot truncate
                display_score: score.round() as u8,
                tier: suitability_tier(score),
                advisory: advisory(driver, score),
            })
            .collect();

        RankResult {
            category: DistanceCategory::from_km(distance_km),
            distance_km,
            results,
            total_candidates,
            eligible_candidates,
        }
    }

    /// Rank using the configured default limit
    pub fn rank_default(&self, drivers: &[Driver], distance_km: f64) -> RankResult {
        self.rank(drivers, distance_km, self.default_limit)
    }

    /// Rank the fleet once per distance category
    pub fn suggestions_overview(&self, drivers: &[Driver]) -> SuggestionsOverview {
        let rank_category = |category: DistanceCategory| {
            self.rank_default(drivers, category.reference_distance_km())
        };

        SuggestionsOverview {
            short: rank_category(DistanceCategory::Short),
            medium: rank_category(DistanceCategory::Medium),
            long: rank_category(DistanceCategory::Long),
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_SUGGESTION_LIMIT)
    }
}
