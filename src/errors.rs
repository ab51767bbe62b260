// src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::web::responses::pretty_json;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => pretty_json(StatusCode::BAD_REQUEST, &json!({ "error": m })),
      // Not-found bodies use the `message` key; validation and store failures
      // use `error`. Callers tell the cases apart by key name.
      AppError::NotFound(m) => pretty_json(StatusCode::NOT_FOUND, &json!({ "message": m })),
      AppError::Config(m) => pretty_json(StatusCode::INTERNAL_SERVER_ERROR, &json!({ "error": m })),
      // Store failures carry the raw driver message through to the caller.
      AppError::Sqlx(e) => pretty_json(StatusCode::INTERNAL_SERVER_ERROR, &json!({ "error": e.to_string() })),
      AppError::Internal(m) => pretty_json(StatusCode::INTERNAL_SERVER_ERROR, &json!({ "error": m })),
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
