//! Feature reconstruction for the outcome model.
//!
//! The model was trained on rows with a fixed column order. Reordering the
//! columns does not raise an error anywhere downstream, it just silently
//! corrupts every prediction, so the order lives in exactly one place
//! (`FEATURE_COLUMNS`) and `FeatureVector::to_array` is the only emitter.

use crate::types::TeamStats;

/// Number of model input columns.
pub const NUM_FEATURES: usize = 9;

/// Canonical training column order. Must match the training pipeline.
pub const FEATURE_COLUMNS: [&str; NUM_FEATURES] = [
    "is_neutral",
    "is_true_home",
    "is_competitive",
    "home_hierarchy_score",
    "away_hierarchy_score",
    "home_goals_per_match",
    "away_goals_per_match",
    "power_gap",
    "heritage_gap",
];

/// One model-ready feature row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    pub is_neutral: f64,
    pub is_true_home: f64,
    pub is_competitive: f64,
    pub home_hierarchy_score: f64,
    pub away_hierarchy_score: f64,
    pub home_goals_per_match: f64,
    pub away_goals_per_match: f64,
    pub power_gap: f64,
    pub heritage_gap: f64,
}

impl FeatureVector {
    /// Reconstruct the feature row for one fixture.
    ///
    /// Precondition: `home` and `away` come from a successful store lookup;
    /// existence is validated by the caller before this runs.
    ///
    /// `is_true_home` is the complement of `is_neutral` because the request
    /// carries no independent true-home signal. `is_competitive` is pinned
    /// to 1 because the request cannot express a friendly. Raw metrics are
    /// emitted unclamped and unnormalized.
    pub fn build(home: &TeamStats, away: &TeamStats, is_neutral: bool) -> Self {
        let is_neutral = if is_neutral { 1.0 } else { 0.0 };

        let home_goals_per_match = home.goals_per_match;
        let away_goals_per_match = away.goals_per_match;
        let home_hierarchy_score = home.hierarchy_score;
        let away_hierarchy_score = away.hierarchy_score;

        Self {
            is_neutral,
            is_true_home: 1.0 - is_neutral,
            is_competitive: 1.0,
            home_hierarchy_score,
            away_hierarchy_score,
            home_goals_per_match,
            away_goals_per_match,
            power_gap: home_goals_per_match - away_goals_per_match,
            heritage_gap: home_hierarchy_score - away_hierarchy_score,
        }
    }

    /// Flatten to the canonical column order (`FEATURE_COLUMNS`).
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.is_neutral,
            self.is_true_home,
            self.is_competitive,
            self.home_hierarchy_score,
            self.away_hierarchy_score,
            self.home_goals_per_match,
            self.away_goals_per_match,
            self.power_gap,
            self.heritage_gap,
        ]
    }
}
