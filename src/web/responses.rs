// src/web/responses.rs

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

/// Build a JSON response with a pretty-printed body (two-space indentation).
/// Every body this service produces, error responses included, goes through
/// here.
pub fn pretty_json<T: Serialize>(status: StatusCode, value: &T) -> HttpResponse {
  match serde_json::to_string_pretty(value) {
    Ok(body) => HttpResponse::build(status).content_type("application/json").body(body),
    Err(e) => {
      tracing::error!(error = %e, "Failed to serialize a response body.");
      HttpResponse::InternalServerError()
        .content_type("application/json")
        .body(r#"{"error": "Failed to serialize response body."}"#)
    }
  }
}
