//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use folio_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// Body text of the 501 answered while submissions are switched off.
pub const DISABLED_MESSAGE: &str = "This endpoint is not available in static export";

/// Body text of every 500; the cause is logged, never sent.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("invalid body: {0}")]
  Body(#[from] JsonRejection),

  #[error("submissions are disabled")]
  Disabled,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(e) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
          .into_response()
      }
      ApiError::Body(rejection) => (
        rejection.status(),
        Json(json!({ "error": rejection.body_text() })),
      )
        .into_response(),
      ApiError::Disabled => (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "message": DISABLED_MESSAGE })),
      )
        .into_response(),
      ApiError::Store(_) => (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_MESSAGE })),
      )
        .into_response(),
    }
  }
}
