//! Outcome model abstraction.
//!
//! This module provides:
//! - The `OutcomeModel` trait the orchestrator predicts through
//! - A softmax (multinomial logistic) model loadable from a JSON artifact
//!
//! The model output is a 3-class probability array with a fixed positional
//! meaning: index 0 = away win, 1 = draw, 2 = home win. That convention is
//! an implicit contract with the training pipeline, so the artifact loader
//! verifies the recorded class order instead of assuming it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::features::{FeatureVector, NUM_FEATURES};

/// Output slot for an away win.
pub const CLASS_AWAY_WIN: usize = 0;
/// Output slot for a draw.
pub const CLASS_DRAW: usize = 1;
/// Output slot for a home win.
pub const CLASS_HOME_WIN: usize = 2;

/// Class labels in output-slot order, as recorded by the training pipeline.
pub const EXPECTED_CLASSES: [&str; 3] = ["away_win", "draw", "home_win"];

/// A 3-class match outcome model.
///
/// Implementations take a feature row in the canonical column order and
/// return `[away_win, draw, home_win]` probabilities summing to ~1.
#[async_trait]
pub trait OutcomeModel: Send + Sync {
    /// Probability distribution over the three outcomes for one fixture.
    async fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 3]>;

    /// Model name for the health endpoint and logging.
    fn model_name(&self) -> &str;
}

/// Serialized model artifact, exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    /// Class labels in output-slot order; must match `EXPECTED_CLASSES`.
    pub classes: Vec<String>,
    /// One intercept per class.
    pub intercepts: Vec<f64>,
    /// One weight row per class, columns in `FEATURE_COLUMNS` order.
    pub weights: Vec<Vec<f64>>,
}

/// Multinomial logistic model: per-class linear score over the feature row,
/// softmax across classes.
#[derive(Debug, Clone)]
pub struct SoftmaxOutcomeModel {
    name: String,
    intercepts: [f64; 3],
    weights: [[f64; NUM_FEATURES]; 3],
}

impl SoftmaxOutcomeModel {
    /// Load and validate an artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact '{}'", path.display()))?;
        let artifact: ModelArtifact = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse model artifact '{}'", path.display()))?;
        Self::from_artifact(artifact)
    }

    /// Validate artifact shape and class ordering.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.classes != EXPECTED_CLASSES {
            bail!(
                "model artifact class order {:?} does not match expected {:?}",
                artifact.classes,
                EXPECTED_CLASSES
            );
        }
        if artifact.intercepts.len() != 3 {
            bail!(
                "model artifact has {} intercepts, expected 3",
                artifact.intercepts.len()
            );
        }
        if artifact.weights.len() != 3 {
            bail!(
                "model artifact has {} weight rows, expected 3",
                artifact.weights.len()
            );
        }

        let mut intercepts = [0.0; 3];
        let mut weights = [[0.0; NUM_FEATURES]; 3];
        for (class, row) in artifact.weights.iter().enumerate() {
            if row.len() != NUM_FEATURES {
                bail!(
                    "weight row for class '{}' has {} columns, expected {}",
                    EXPECTED_CLASSES[class],
                    row.len(),
                    NUM_FEATURES
                );
            }
            weights[class].copy_from_slice(row);
            intercepts[class] = artifact.intercepts[class];
        }

        Ok(Self {
            name: artifact.name,
            intercepts,
            weights,
        })
    }

    fn scores(&self, features: &FeatureVector) -> [f64; 3] {
        let row = features.to_array();
        let mut scores = self.intercepts;
        for (class, weights) in self.weights.iter().enumerate() {
            for (w, x) in weights.iter().zip(row.iter()) {
                scores[class] += w * x;
            }
        }
        scores
    }
}

#[async_trait]
impl OutcomeModel for SoftmaxOutcomeModel {
    async fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 3]> {
        Ok(softmax(self.scores(features)))
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}

/// Numerically stable softmax over the three class scores.
fn softmax(scores: [f64; 3]) -> [f64; 3] {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps = scores.map(|s| (s - max).exp());
    let total: f64 = exps.iter().sum();
    exps.map(|e| e / total)
}
