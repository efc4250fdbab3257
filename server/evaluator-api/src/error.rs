//! API errors and their HTTP mapping.

use ad_evaluator::{ErrorOutput, EvalError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Invalid(#[from] EvalError),

  #[error("daily evaluation limit of {limit} reached")]
  QuotaExceeded { limit: u32 },

  #[error(transparent)]
  Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::Invalid(EvalError::Validation { field, reason }) => (
        StatusCode::BAD_REQUEST,
        ErrorOutput::new(reason.clone()).with_field(field.clone()),
      ),
      ApiError::Invalid(e) => (StatusCode::BAD_REQUEST, ErrorOutput::new(e.to_string())),
      ApiError::QuotaExceeded { .. } => (
        StatusCode::TOO_MANY_REQUESTS,
        ErrorOutput::new(self.to_string()),
      ),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "usage store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          ErrorOutput::new("usage store unavailable"),
        )
      }
    };
    (status, Json(body)).into_response()
  }
}
