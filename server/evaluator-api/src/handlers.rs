//! HTTP handlers for the evaluator API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::date;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{EvaluateRequest, EvaluateResponse, UsageSummary};

pub async fn health() -> &'static str {
  "ok"
}

/// Validate, check the quota, evaluate, then record one usage.
pub async fn evaluate(
  State(state): State<Arc<AppState>>,
  Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
  ad_evaluator::validate(&req.submission)?;

  let today = date::today();
  let used = state.store.used(req.user_id, today).await?;
  if UsageSummary::new(today, used, state.daily_limit).exhausted() {
    tracing::info!(user_id = %req.user_id, used, limit = state.daily_limit, "quota exhausted");
    return Err(ApiError::QuotaExceeded {
      limit: state.daily_limit,
    });
  }

  let evaluation = state.engine.evaluate(&req.submission);
  let used = state.store.increment(req.user_id, today).await?;

  tracing::info!(
    user_id = %req.user_id,
    evaluation_id = %evaluation.evaluation_id,
    overall = evaluation.scores.overall,
    used,
    "evaluation served"
  );

  Ok(Json(EvaluateResponse {
    evaluation,
    usage: UsageSummary::new(today, used, state.daily_limit),
  }))
}

pub async fn usage(
  State(state): State<Arc<AppState>>,
  Path(user_id): Path<Uuid>,
) -> Result<Json<UsageSummary>, ApiError> {
  let today = date::today();
  let used = state.store.used(user_id, today).await?;
  Ok(Json(UsageSummary::new(today, used, state.daily_limit)))
}
