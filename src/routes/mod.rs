// Route exports
pub mod ranking;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;

pub use ranking::AppState;

/// Errors surfaced by the HTTP layer, rendered as JSON `ErrorResponse`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{count} candidates submitted, limit is {limit}")]
    TooManyCandidates { count: usize, limit: usize },

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Worker failed: {0}")]
    Worker(#[from] error::BlockingError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_failed",
            ApiError::TooManyCandidates { .. } => "too_many_candidates",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::Worker(_) => "worker_failed",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::TooManyCandidates { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// JSON extractor config with the payload limit and JSON error bodies
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(handle_json_payload_error)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(ranking::configure),
    );
}
