//! Core engine: resolves reference profiles, scores, and assembles the report.

use crate::analysis;
use crate::config::Config;
use crate::context::Context;
use crate::fingerprint;
use crate::score;
use crate::types::{AdSubmission, Evaluation};

/// The ad evaluation engine. Holds no per-call state, so one instance can be
/// shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Score one submission. Never fails: unrecognized platform, industry or
  /// country keys fall back to neutral sub-scores.
  pub fn evaluate(&self, submission: &AdSubmission) -> Evaluation {
    let ctx = Context::new(submission);
    let scores = score::compute_scores(&ctx);
    let analysis = analysis::compute_analysis(&ctx, &scores, &self.config);
    let recommendations = analysis::compute_recommendations(&ctx, &scores, &self.config);
    let evaluation_id = fingerprint::evaluation_id(submission);

    tracing::debug!(
      evaluation_id = %evaluation_id,
      platform = %submission.platform,
      industry = %submission.industry,
      creativity = scores.creativity,
      platform_viability = scores.platform_viability,
      audience_alignment = scores.audience_alignment,
      predicted_engagement = scores.predicted_engagement,
      predicted_conversion = scores.predicted_conversion,
      overall = scores.overall,
      "ad evaluated"
    );

    Evaluation {
      evaluation_id,
      scores,
      analysis,
      recommendations,
    }
  }
}

/// Evaluate with the default configuration.
pub fn evaluate(submission: &AdSubmission) -> Evaluation {
  Engine::with_defaults().evaluate(submission)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn make_submission() -> AdSubmission {
    AdSubmission {
      title: "Try Our Secure Cloud Platform Free".into(),
      description: "Try it free for 30 days. Start your free trial and book a demo today.".into(),
      platform: Platform::GoogleAds,
      industry: Industry::Technology,
      country: Country::Us,
      audience_description: "IT managers at mid-sized companies moving workloads to the cloud".into(),
      target_age: AgeBracket::From25To34,
      target_gender: None,
      budget: BudgetBracket::From10000To25000,
      goals: Goal::LeadGeneration,
      ad_type: AdType::Search,
      language: "en".into(),
    }
  }

  #[test]
  fn evaluation_has_all_sections() {
    let out = Engine::with_defaults().evaluate(&make_submission());
    assert!(out.evaluation_id.starts_with("eval-"));
    assert!(!out.analysis.platform_specific.is_empty());
    assert!(!out.analysis.audience_insights.is_empty());
    assert_eq!(out.analysis.competitor_analysis.len(), 3);
    assert!(out
      .recommendations
      .iter()
      .any(|r| r.contains("search intent")));
  }

  #[test]
  fn stricter_config_moves_strengths() {
    let strict = Engine::new(Config {
      strong_threshold: 101,
      viability_strong_threshold: 101,
      ..Config::default()
    });
    let out = strict.evaluate(&make_submission());
    assert!(out.analysis.strengths.is_empty());
  }

  #[test]
  fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::with_defaults());
    let sub = make_submission();
    let expected = engine.evaluate(&sub);
    let handles: Vec<_> = (0..4)
      .map(|_| {
        let engine = engine.clone();
        let sub = sub.clone();
        std::thread::spawn(move || engine.evaluate(&sub))
      })
      .collect();
    for h in handles {
      assert_eq!(h.join().unwrap(), expected);
    }
  }
}
