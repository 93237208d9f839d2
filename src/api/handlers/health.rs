// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::api::AppState;

/// Liveness endpoint. `status` reports the relay itself and is always
/// "healthy"; the backend probe only feeds `backend_connected`.
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let backend_connected = state.backend.is_healthy(&state.config).await;

    Ok(HttpResponse::Ok().json(json!({
        "status": "healthy",
        "backend_connected": backend_connected,
        "backend_url": state.config.backend_url,
    })))
}
