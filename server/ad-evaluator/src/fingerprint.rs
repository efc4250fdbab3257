//! Stable evaluation id derived from the submission.

use crate::types::AdSubmission;

/// `eval-` + 16 hex chars of a blake3 digest over the submission fields.
/// Identical submissions always get the same id.
pub fn evaluation_id(sub: &AdSubmission) -> String {
  let mut hasher = blake3::Hasher::new();
  let fields = [
    sub.title.as_str(),
    sub.description.as_str(),
    sub.platform.as_str(),
    sub.industry.as_str(),
    sub.country.as_str(),
    sub.audience_description.as_str(),
    sub.target_age.as_str(),
    sub.target_gender.as_ref().map(|g| g.as_str()).unwrap_or(""),
    sub.budget.as_str(),
    sub.goals.as_str(),
    sub.ad_type.as_str(),
    sub.language.as_str(),
  ];
  for field in fields {
    // Length prefix keeps "ab"+"c" distinct from "a"+"bc".
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
  }
  let hex = hasher.finalize().to_hex();
  format!("eval-{}", &hex[..16])
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn make(title: &str, description: &str) -> AdSubmission {
    AdSubmission {
      title: title.into(),
      description: description.into(),
      platform: Platform::Twitter,
      industry: Industry::Finance,
      country: Country::Ca,
      audience_description: String::new(),
      target_age: AgeBracket::From45To54,
      target_gender: None,
      budget: BudgetBracket::From5000To10000,
      goals: Goal::LeadGeneration,
      ad_type: AdType::Text,
      language: "fr".into(),
    }
  }

  #[test]
  fn id_is_stable_and_prefixed() {
    let a = evaluation_id(&make("Low rates", "Apply today"));
    let b = evaluation_id(&make("Low rates", "Apply today"));
    assert_eq!(a, b);
    assert!(a.starts_with("eval-"));
    assert_eq!(a.len(), "eval-".len() + 16);
  }

  #[test]
  fn field_boundaries_matter() {
    let a = evaluation_id(&make("ab", "c"));
    let b = evaluation_id(&make("a", "bc"));
    assert_ne!(a, b);
  }
}
