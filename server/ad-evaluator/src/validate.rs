//! Input validation for callers that collect submissions from a form.
//!
//! `Engine::evaluate` never calls this; it scores whatever it is given.

use crate::error::EvalError;
use crate::text::char_len;
use crate::types::AdSubmission;

pub const MAX_TITLE_CHARS: usize = 500;
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Reject submissions with missing required fields or runaway text.
pub fn validate(sub: &AdSubmission) -> Result<(), EvalError> {
  if sub.title.trim().is_empty() {
    return Err(EvalError::validation("title", "must not be empty"));
  }
  if sub.description.trim().is_empty() {
    return Err(EvalError::validation("description", "must not be empty"));
  }
  if sub.platform.as_str().trim().is_empty() {
    return Err(EvalError::validation("platform", "must not be empty"));
  }
  if sub.industry.as_str().trim().is_empty() {
    return Err(EvalError::validation("industry", "must not be empty"));
  }
  if char_len(&sub.title) > MAX_TITLE_CHARS {
    return Err(EvalError::validation(
      "title",
      &format!("must be at most {} characters", MAX_TITLE_CHARS),
    ));
  }
  if char_len(&sub.description) > MAX_DESCRIPTION_CHARS {
    return Err(EvalError::validation(
      "description",
      &format!("must be at most {} characters", MAX_DESCRIPTION_CHARS),
    ));
  }
  Ok(())
}
