use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::analyzer::Analyzer;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

pub fn router(analyzer: Arc<Analyzer>) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .with_state(analyzer)
}

/// Both upstream failure modes collapse to the same opaque 500; the real
/// cause is only logged server-side.
async fn analyze_handler(
    State(analyzer): State<Arc<Analyzer>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match analyzer.analyze(&request.text).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => {
            error!("analysis failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Something went wrong" })),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy" }))
}
