use std::sync::Arc;

use anyhow::{Context, Result};
use dotenv::dotenv;
use matchcast_rust_core::{OutcomeModel, SoftmaxOutcomeModel, TeamStatsStore};
use prediction_api_rust::{build_router, AppState, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let store = TeamStatsStore::load(&config.team_stats_path)
        .with_context(|| format!("loading team stats from {}", config.team_stats_path))?;
    info!("Loaded {} teams from {}", store.len(), config.team_stats_path);

    let model = SoftmaxOutcomeModel::load(&config.model_path)
        .with_context(|| format!("loading model artifact from {}", config.model_path))?;
    info!("Loaded model '{}' from {}", model.model_name(), config.model_path);

    let state = AppState {
        store: Arc::new(store),
        model: Arc::new(model),
    };
    let app = build_router(state);

    info!("Prediction API listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
