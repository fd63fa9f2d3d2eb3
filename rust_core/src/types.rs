//! Wire and domain types shared by the core and the API service.

use serde::{Deserialize, Serialize};

/// Precomputed per-team metrics. Produced by the training pipeline and
/// bulk-loaded at startup; never recomputed while serving.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Historical strength/prestige score
    pub hierarchy_score: f64,
    /// Offensive rate (goals per match)
    pub goals_per_match: f64,
}

/// Inbound prediction request. Lives only for the duration of one request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRequest {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub is_neutral: bool,
}

impl MatchRequest {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            is_neutral: false,
        }
    }

    pub fn neutral(mut self) -> Self {
        self.is_neutral = true;
        self
    }
}

/// Outcome probabilities, rounded to 3 decimals for the response.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

/// Assembled prediction response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    /// "Home vs Away" label
    #[serde(rename = "match")]
    pub match_label: String,
    pub probabilities: MatchProbabilities,
    /// Home team if its win probability exceeds the away team's, else the
    /// away team. A draw-favored outcome still resolves to one of the two.
    pub favorite: String,
}
