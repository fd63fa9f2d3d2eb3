//! Service configuration from environment variables.

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub team_stats_path: String,
    pub model_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR is not a valid socket address")?;

        let team_stats_path =
            env::var("TEAM_STATS_PATH").unwrap_or_else(|_| "data/team_stats.json".to_string());
        let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| "data/model.json".to_string());

        Ok(Self {
            bind_addr,
            team_stats_path,
            model_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Skips any knob overridden in the ambient environment so the test
        // stays independent of how the process was launched.
        let config = Config::from_env().unwrap();
        if env::var("BIND_ADDR").is_err() {
            assert_eq!(config.bind_addr.port(), 8000);
        }
        if env::var("TEAM_STATS_PATH").is_err() {
            assert_eq!(config.team_stats_path, "data/team_stats.json");
        }
        if env::var("MODEL_PATH").is_err() {
            assert_eq!(config.model_path, "data/model.json");
        }
    }
}
