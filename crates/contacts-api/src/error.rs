//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection, QueryRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error(transparent)]
  Core(#[from] contacts_core::Error),

  #[error(transparent)]
  Json(#[from] JsonRejection),

  #[error(transparent)]
  Query(#[from] QueryRejection),

  #[error(transparent)]
  Path(#[from] PathRejection),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    use contacts_core::Error as E;
    match self {
      ApiError::NotFound(_) | ApiError::Core(E::NotFound(_)) => {
        StatusCode::NOT_FOUND
      }
      ApiError::Core(E::Duplicate(_)) => StatusCode::CONFLICT,
      ApiError::Core(E::NullRequest(_) | E::Validation(_) | E::NullId) => {
        StatusCode::BAD_REQUEST
      }
      ApiError::Json(r) => r.status(),
      ApiError::Query(r) => r.status(),
      ApiError::Path(r) => r.status(),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    if status.is_client_error() && status != StatusCode::NOT_FOUND {
      tracing::debug!(error = %self, "rejected request");
    }
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
