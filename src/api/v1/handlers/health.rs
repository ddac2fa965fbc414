/*
 * Responsibility
 * - GET /api/v1/health (疎通用)
 * - API key middleware は通さない
 */
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"status": "ok", "env": state.app_env.as_str()})),
    )
}
