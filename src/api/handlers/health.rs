/*
 * Responsibility
 * - GET /api/health (疎通用)
 * - 認証 middleware は通さない
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
