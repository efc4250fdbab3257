//! Request/response types for the evaluator API.

use ad_evaluator::{AdSubmission, Evaluation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
  pub user_id: Uuid,
  pub submission: AdSubmission,
}

/// Today's quota position for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UsageSummary {
  pub date: NaiveDate,
  pub used: u32,
  pub limit: u32,
  pub remaining: u32,
}

impl UsageSummary {
  pub fn new(date: NaiveDate, used: u32, limit: u32) -> Self {
    Self {
      date,
      used,
      limit,
      remaining: limit.saturating_sub(used),
    }
  }

  pub fn exhausted(&self) -> bool {
    self.used >= self.limit
  }
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
  pub evaluation: Evaluation,
  pub usage: UsageSummary,
}
