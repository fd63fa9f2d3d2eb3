//! Integration tests for the prediction API router.
//!
//! These exercise the HTTP surface end to end with an in-memory store and a
//! canned model, no network or artifact files involved.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use matchcast_rust_core::{FeatureVector, OutcomeModel, TeamStats, TeamStatsStore};
use prediction_api_rust::{build_router, AppState};
use tower::ServiceExt;

/// Model stub returning a fixed [away_win, draw, home_win] distribution.
struct FixedModel([f64; 3]);

#[async_trait]
impl OutcomeModel for FixedModel {
    async fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 3]> {
        Ok(self.0)
    }

    fn model_name(&self) -> &str {
        "fixed-test-model"
    }
}

fn test_state(probs: [f64; 3]) -> AppState {
    let mut teams = HashMap::new();
    teams.insert(
        "A".to_string(),
        TeamStats {
            hierarchy_score: 80.0,
            goals_per_match: 2.0,
        },
    );
    teams.insert(
        "B".to_string(),
        TeamStats {
            hierarchy_score: 60.0,
            goals_per_match: 1.0,
        },
    );
    AppState {
        store: Arc::new(TeamStatsStore::from_records(teams)),
        model: Arc::new(FixedModel(probs)),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check_reports_model_and_team_count() {
    let app = build_router(test_state([0.2, 0.3, 0.5]));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "online");
    assert_eq!(body["model"], "fixed-test-model");
    assert_eq!(body["teams"], 2);
}

#[tokio::test]
async fn test_teams_listing_sorted() {
    let app = build_router(test_state([0.2, 0.3, 0.5]));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/teams")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["teams"][0], "A");
    assert_eq!(body["teams"][1], "B");
}

#[tokio::test]
async fn test_predict_known_fixture() {
    let app = build_router(test_state([0.2, 0.3, 0.5]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"home_team": "A", "away_team": "B"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["match"], "A vs B");
    assert_eq!(body["probabilities"]["home_win"], 0.5);
    assert_eq!(body["probabilities"]["draw"], 0.3);
    assert_eq!(body["probabilities"]["away_win"], 0.2);
    assert_eq!(body["favorite"], "A");
}

#[tokio::test]
async fn test_predict_defaults_to_non_neutral() {
    // is_neutral omitted from the body must behave like false.
    let app = build_router(test_state([0.2, 0.3, 0.5]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"home_team": "B", "away_team": "A"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_predict_unknown_team_is_404() {
    let app = build_router(test_state([0.2, 0.3, 0.5]));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"home_team": "Atlantis", "away_team": "B"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["missing_teams"][0], "Atlantis");
}

#[tokio::test]
async fn test_predict_model_failure_is_500() {
    struct BrokenModel;

    #[async_trait]
    impl OutcomeModel for BrokenModel {
        async fn predict_proba(&self, _features: &FeatureVector) -> Result<[f64; 3]> {
            Err(anyhow::anyhow!("backend down"))
        }

        fn model_name(&self) -> &str {
            "broken"
        }
    }

    let mut state = test_state([0.2, 0.3, 0.5]);
    state.model = Arc::new(BrokenModel);
    let app = build_router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/predict")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"home_team": "A", "away_team": "B"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
