//! Read-only team statistics store.
//!
//! This module provides:
//! - Lookup from team name to precomputed metrics
//! - JSON bulk loading at process start
//! - Sorted team listing for the teams endpoint
//!
//! The store is built once before the first request and never mutated while
//! serving, so it can be shared freely across request handlers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::types::TeamStats;

/// Failure while building the store from its bulk artifact.
#[derive(Debug, Error)]
pub enum StoreLoadError {
    #[error("failed to read team stats file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse team stats file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("team stats file '{path}' contains no teams")]
    Empty { path: String },
}

/// Immutable mapping from team name to precomputed metrics.
#[derive(Debug, Clone, Default)]
pub struct TeamStatsStore {
    teams: HashMap<String, TeamStats>,
}

impl TeamStatsStore {
    /// Build a store from already-resolved records. Used by the loader and
    /// by tests that do not want to touch the filesystem.
    pub fn from_records(teams: HashMap<String, TeamStats>) -> Self {
        Self { teams }
    }

    /// Load from a JSON artifact of shape
    /// `{ "Team": { "hierarchy_score": f, "goals_per_match": f }, ... }`.
    ///
    /// A missing, unreadable, or empty artifact is a startup error; the
    /// service must never come up with a silently empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|source| StoreLoadError::Io {
            path: display.clone(),
            source,
        })?;

        let teams: HashMap<String, TeamStats> =
            serde_json::from_str(&content).map_err(|source| StoreLoadError::Parse {
                path: display.clone(),
                source,
            })?;

        if teams.is_empty() {
            return Err(StoreLoadError::Empty { path: display });
        }

        Ok(Self { teams })
    }

    /// Look up a team's metrics.
    pub fn lookup(&self, team: &str) -> Option<&TeamStats> {
        self.teams.get(team)
    }

    /// Check whether a team is known.
    pub fn exists(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }

    /// All known team names, lexicographically sorted. Keys are unique by
    /// construction so the result carries no duplicates.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.teams.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of known teams.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
