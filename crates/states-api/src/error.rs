//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Client errors carry the message shown to the caller. Store faults are
/// logged and rendered as a generic 500.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<states_core::Error> for ApiError {
  fn from(e: states_core::Error) -> Self {
    use states_core::Error as Core;
    match e {
      Core::InvalidStateCode(_) => ApiError::BadRequest(e.to_string()),
      Core::NoFunFacts(_) | Core::NoFunFactAtIndex(_) => ApiError::NotFound(e.to_string()),
      Core::Store(inner) => ApiError::Store(inner),
      other => ApiError::Store(Box::new(other)),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::BadRequest(message) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
      }
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store fault");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "Internal Server Error" })),
        )
          .into_response()
      }
    }
  }
}
