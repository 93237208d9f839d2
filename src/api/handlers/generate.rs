// src/api/handlers/generate.rs
use actix_web::{web, HttpResponse, Result};

use crate::api::AppState;
use crate::errors::RelayError;
use crate::models::{ForwardPayload, GenerationRequest, GenerationResponse};

/// Relays a generation request to the backend and translates the outcome
/// into the response contract the browser client expects.
pub async fn generate(
    state: web::Data<AppState>,
    req: web::Json<GenerationRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let payload = ForwardPayload::from_request(&req);

    match state.backend.generate(&state.config, &payload).await {
        Ok(image) => {
            // The seed is echoed back exactly as the client sent it, not
            // the 0 default that went to the backend.
            Ok(HttpResponse::Ok().json(GenerationResponse::ok(image, req.seed)))
        }
        Err(e) => {
            log::error!("Generation relay failed: {}", e);
            Ok(failure_response(&e))
        }
    }
}

/// Maps a relay failure to its status code: 504 for timeouts, 503 when
/// the backend cannot be reached, 500 for everything else.
fn failure_response(e: &RelayError) -> HttpResponse {
    let response = GenerationResponse::failed(e.to_string());

    match e {
        RelayError::Timeout => HttpResponse::GatewayTimeout().json(response),
        RelayError::Unreachable => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::InternalServerError().json(response),
    }
}
