// src/api/routes.rs
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse};

use super::handlers;
use crate::models::GenerationResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_payload_error_handler))
        .route("/generate", web::post().to(handlers::generate))
        .route("/health", web::get().to(handlers::health_check));
}

/// A body the extractor cannot parse still comes back in the standard
/// failure shape, like any other unexpected error.
fn json_payload_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response =
        HttpResponse::InternalServerError().json(GenerationResponse::failed(err.to_string()));
    InternalError::from_response(err, response).into()
}
