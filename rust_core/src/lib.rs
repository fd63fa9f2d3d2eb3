//! Matchcast Core - Feature reconstruction and outcome prediction.
//!
//! This module provides:
//! - Immutable team statistics store loaded once at startup
//! - Feature builder reconstructing the exact model-ready column order
//! - Outcome model abstraction with a loadable softmax artifact
//! - Prediction orchestration (validation, inference, response shaping)

mod types;

pub mod features;
pub mod model;
pub mod predict;
pub mod team_stats;

pub use features::{FeatureVector, FEATURE_COLUMNS, NUM_FEATURES};
pub use model::{OutcomeModel, SoftmaxOutcomeModel, CLASS_AWAY_WIN, CLASS_DRAW, CLASS_HOME_WIN};
pub use predict::{predict, PredictionError};
pub use team_stats::{StoreLoadError, TeamStatsStore};
pub use types::*;
