//! Prediction orchestration.
//!
//! Composes store lookup, feature reconstruction, and model inference into
//! one all-or-nothing operation. Validation happens before feature building;
//! the feature builder itself carries a precondition, not a runtime check.

use thiserror::Error;

use crate::features::FeatureVector;
use crate::model::{OutcomeModel, CLASS_AWAY_WIN, CLASS_DRAW, CLASS_HOME_WIN};
use crate::team_stats::TeamStatsStore;
use crate::types::{MatchProbabilities, MatchRequest, PredictionResult};

/// Why a prediction could not be produced.
#[derive(Debug, Error)]
pub enum PredictionError {
    /// One or both teams are absent from the statistics store. Client
    /// error; never retried, never silently recovered.
    #[error("team(s) not found in statistics store: {}", teams.join(", "))]
    TeamNotFound { teams: Vec<String> },
    /// The model invocation failed. Server error; no fallback prediction.
    #[error("outcome model failed: {0}")]
    Model(anyhow::Error),
}

/// Predict the outcome of one fixture.
///
/// Resolves both teams (collecting every unresolved name), reconstructs the
/// model feature row, and invokes the model. Probabilities are rounded to 3
/// decimals for the response; the favorite comparison uses the unrounded
/// values. If the draw probability is the highest, `favorite` still resolves
/// to whichever side has the larger win probability (preserved behavior).
pub async fn predict(
    request: &MatchRequest,
    store: &TeamStatsStore,
    model: &dyn OutcomeModel,
) -> Result<PredictionResult, PredictionError> {
    let mut missing = Vec::new();
    if !store.exists(&request.home_team) {
        missing.push(request.home_team.clone());
    }
    if !store.exists(&request.away_team) {
        missing.push(request.away_team.clone());
    }
    if !missing.is_empty() {
        return Err(PredictionError::TeamNotFound { teams: missing });
    }

    // Lookups cannot fail past the existence check above.
    let home = store
        .lookup(&request.home_team)
        .ok_or_else(|| PredictionError::TeamNotFound {
            teams: vec![request.home_team.clone()],
        })?;
    let away = store
        .lookup(&request.away_team)
        .ok_or_else(|| PredictionError::TeamNotFound {
            teams: vec![request.away_team.clone()],
        })?;

    let features = FeatureVector::build(home, away, request.is_neutral);
    let probs = model
        .predict_proba(&features)
        .await
        .map_err(PredictionError::Model)?;

    let favorite = if probs[CLASS_HOME_WIN] > probs[CLASS_AWAY_WIN] {
        request.home_team.clone()
    } else {
        request.away_team.clone()
    };

    Ok(PredictionResult {
        match_label: format!("{} vs {}", request.home_team, request.away_team),
        probabilities: MatchProbabilities {
            home_win: round3(probs[CLASS_HOME_WIN]),
            draw: round3(probs[CLASS_DRAW]),
            away_win: round3(probs[CLASS_AWAY_WIN]),
        },
        favorite,
    })
}

fn round3(p: f64) -> f64 {
    (p * 1000.0).round() / 1000.0
}
