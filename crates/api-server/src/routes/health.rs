//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::{store_error, RouteError};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    task_count: i64,
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, RouteError> {
    let task_count = state.task_store().count().await.map_err(store_error)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        task_count,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
