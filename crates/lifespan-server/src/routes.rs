//! HTTP routes.

use axum::extract::State;
use axum::http::Method;
use axum::routing::{get, post};
use axum::{Json, Router};
use lifespan_core::predict;
use lifespan_model::PredictionResult;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::diagnostics::{DiagnosticReport, diagnose};
use crate::error::ApiError;
use crate::extract::PredictBody;
use crate::state::AppState;

/// Build the application router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/hello", get(hello))
        .route("/api/predict", post(predict_handler))
        .route("/test", get(diagnostics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello from the life expectancy backend!" }))
}

async fn health() -> &'static str {
    "ok"
}

async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

async fn predict_handler(
    State(state): State<AppState>,
    PredictBody(request): PredictBody,
) -> Result<Json<PredictionResult>, ApiError> {
    let today = state.clock.today();
    match predict(&request, today) {
        Ok(result) => {
            info!(
                lifespan_years = result.predicted_lifespan_years,
                confidence = result.confidence,
                "prediction served"
            );
            Ok(Json(result))
        }
        Err(error) => {
            warn!(field = %error.field(), "prediction rejected");
            Err(ApiError::Validation(error))
        }
    }
}

async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(diagnose(state.probe.as_deref(), &state.database_env))
}
