//! The five sub-scores. Each starts from a base, applies additive
//! adjustments, and is clamped to 0–100. Scores that need a reference
//! profile the submission does not resolve to return `NEUTRAL`.

use crate::context::Context;
use crate::tables::{self, Competitiveness, PlatformProfile};
use crate::text::{self, CTA_PHRASES, EMOTIONAL_WORDS, POWER_WORDS};
use crate::types::{AdType, AgeBracket, BudgetBracket, Goal, Industry, Platform, ScoreBundle};

/// Score returned when a required reference profile is missing.
pub const NEUTRAL: u8 = 50;

/// Compute all five sub-scores and the overall mean.
pub fn compute_scores(ctx: &Context<'_>) -> ScoreBundle {
  ScoreBundle::new(
    creativity(ctx),
    platform_viability(ctx),
    audience_alignment(ctx),
    predicted_engagement(ctx),
    predicted_conversion(ctx),
  )
}

/// Headline power words, title length fit, CTA, emotional triggers,
/// vocabulary variety, and questions.
pub fn creativity(ctx: &Context<'_>) -> u8 {
  let sub = ctx.submission;
  let mut score: i32 = 50;

  score += 5 * text::count_members(&ctx.copy.title, POWER_WORDS) as i32;

  if let Some(p) = ctx.platform {
    if p.optimal_title.contains(&ctx.title_len) {
      score += 15;
    } else if ctx.title_len < *p.optimal_title.start() {
      score -= 8;
    } else if ctx.title_len > p.title_limit {
      score -= 20;
    }
  }

  if text::contains_any(&ctx.copy.description, CTA_PHRASES) {
    score += 12;
  }

  let emotional = text::count_members(&ctx.copy.description, EMOTIONAL_WORDS) as i32;
  score += (emotional * 4).min(20);

  score += (text::uniqueness_ratio(&ctx.copy.all) * 15.0).round() as i32;

  if sub.title.contains('?') || sub.description.contains('?') {
    score += 5;
  }

  clamp(score)
}

/// Platform/industry fit, hard limits, ad format, budget, and market pressure.
pub fn platform_viability(ctx: &Context<'_>) -> u8 {
  let (Some(p), Some(ind)) = (ctx.platform, ctx.industry) else {
    return NEUTRAL;
  };
  let sub = ctx.submission;
  let mut score: i32 = 60;

  score += if ind.best_platforms.contains(&sub.platform.as_str()) {
    25
  } else {
    -15
  };
  score += if ctx.title_len <= p.title_limit { 8 } else { -15 };
  score += if ctx.description_len <= p.description_limit {
    8
  } else {
    -15
  };
  if tables::is_best_ad_type(p, &sub.ad_type) {
    score += 10;
  }

  score += budget_adequacy(&sub.budget, p);

  if sub.budget == BudgetBracket::Under1000 {
    score += match ctx.country.map(|c| c.competitiveness) {
      Some(Competitiveness::High) => -20,
      Some(Competitiveness::Medium) => -8,
      _ => 0,
    };
  }

  clamp(score)
}

/// Age fit, industry vocabulary, goal fit, and audience detail.
pub fn audience_alignment(ctx: &Context<'_>) -> u8 {
  let Some(ind) = ctx.industry else {
    return NEUTRAL;
  };
  let sub = ctx.submission;
  let mut score: i32 = 55;

  score += age_alignment(&sub.target_age, ind.audience.age_range);
  score += 6 * text::count_phrases(&ctx.copy.all, ind.key_terms) as i32;

  if tables::goal_aligned_industries(&sub.goals).contains(&sub.industry.as_str()) {
    score += 15;
  }

  if ctx.audience_len > 20 {
    score += 8;
  }
  if ctx.audience_len > 50 {
    score += 5;
  }

  clamp(score)
}

/// CTR lift over the platform's average benchmark, plus format bonuses.
pub fn predicted_engagement(ctx: &Context<'_>) -> u8 {
  let Some(p) = ctx.platform else {
    return NEUTRAL;
  };
  let sub = ctx.submission;

  // Adjusted CTR / the platform's average CTR; the baseline cancels out,
  // so only the multiplicative lift is tracked, in basis points. Every
  // product of the three lifts is exact at this scale.
  let mut ratio_bp: i32 = 10_000;
  if p.optimal_title.contains(&ctx.title_len) {
    ratio_bp = ratio_bp * 125 / 100;
  }
  if text::contains_any(&ctx.copy.description, CTA_PHRASES) {
    ratio_bp = ratio_bp * 120 / 100;
  }
  if text::count_members(&ctx.copy.all, EMOTIONAL_WORDS) > 0 {
    ratio_bp = ratio_bp * 115 / 100;
  }
  // 50 + (ratio - 1) * 50, halves rounded up.
  let mut score = 50 + ((ratio_bp - 10_000) * 50 + 5_000) / 10_000;

  score += match (&sub.platform, &sub.ad_type, &sub.industry) {
    (Platform::TikTok, AdType::Video, _) => 10,
    (Platform::Instagram, AdType::Story, _) => 8,
    (Platform::LinkedIn, _, Industry::Technology) => 12,
    _ => 0,
  };

  clamp(score)
}

/// Industry conversion drivers in the copy, goal, and budget.
pub fn predicted_conversion(ctx: &Context<'_>) -> u8 {
  let Some(ind) = ctx.industry else {
    return NEUTRAL;
  };
  let sub = ctx.submission;
  let mut score: i32 = 50;

  score += 12 * text::count_phrases(&ctx.copy.all, ind.conversion_factors) as i32;

  score += match sub.goals {
    Goal::Sales | Goal::LeadGeneration => 15,
    Goal::BrandAwareness => -5,
    Goal::Traffic => 5,
    _ => 0,
  };

  score += match sub.budget {
    BudgetBracket::Over25000 => 10,
    BudgetBracket::From10000To25000 => 8,
    BudgetBracket::Under1000 => -8,
    _ => 0,
  };

  clamp(score)
}

/// Representative spend scaled by the platform's cost multiplier, bucketed.
pub fn budget_adequacy(budget: &BudgetBracket, platform: &PlatformProfile) -> i32 {
  let spend = tables::budget_spend(budget) as f64 * platform.cost_multiplier;
  if spend >= 10_000.0 {
    20
  } else if spend >= 5_000.0 {
    15
  } else if spend >= 2_000.0 {
    10
  } else if spend >= 1_000.0 {
    5
  } else {
    -8
  }
}

/// Bonus when the targeted bracket overlaps the industry's core age range.
pub fn age_alignment(bracket: &AgeBracket, (lower, upper): (u8, u8)) -> i32 {
  match bracket {
    AgeBracket::From25To34 if lower <= 30 && upper >= 30 => 18,
    AgeBracket::From35To44 if lower <= 40 && upper >= 35 => 18,
    AgeBracket::From18To24 if lower <= 25 => 15,
    AgeBracket::From45To54 if upper >= 45 => 12,
    _ => 0,
  }
}

fn clamp(score: i32) -> u8 {
  score.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tables::platform_profile;
  use crate::types::*;

  fn submission() -> AdSubmission {
    AdSubmission {
      title: "Proven Running Shoes For Every Trail".into(),
      description: "Lightweight grip and cushioning over long distances".into(),
      platform: Platform::Facebook,
      industry: Industry::Fitness,
      country: Country::Us,
      audience_description: String::new(),
      target_age: AgeBracket::All,
      target_gender: None,
      budget: BudgetBracket::From1000To5000,
      goals: Goal::Engagement,
      ad_type: AdType::Image,
      language: "en".into(),
    }
  }

  #[test]
  fn budget_adequacy_thresholds() {
    let google = platform_profile(&Platform::GoogleAds).unwrap();
    let pinterest = platform_profile(&Platform::Pinterest).unwrap();
    // 17500 * 1.5
    assert_eq!(budget_adequacy(&BudgetBracket::From10000To25000, google), 20);
    // 3000 * 1.5
    assert_eq!(budget_adequacy(&BudgetBracket::From1000To5000, google), 10);
    // 7500 * 0.7
    assert_eq!(budget_adequacy(&BudgetBracket::From5000To10000, pinterest), 15);
    // 500 * 1.5
    assert_eq!(budget_adequacy(&BudgetBracket::Under1000, google), -8);
    assert_eq!(budget_adequacy(&BudgetBracket::Other("?".into()), google), -8);
  }

  #[test]
  fn age_alignment_table() {
    assert_eq!(age_alignment(&AgeBracket::From25To34, (25, 45)), 18);
    assert_eq!(age_alignment(&AgeBracket::From25To34, (31, 45)), 0);
    assert_eq!(age_alignment(&AgeBracket::From35To44, (18, 35)), 18);
    assert_eq!(age_alignment(&AgeBracket::From35To44, (18, 34)), 0);
    assert_eq!(age_alignment(&AgeBracket::From18To24, (25, 54)), 15);
    assert_eq!(age_alignment(&AgeBracket::From18To24, (28, 55)), 0);
    assert_eq!(age_alignment(&AgeBracket::From45To54, (25, 45)), 12);
    assert_eq!(age_alignment(&AgeBracket::From55To64, (35, 65)), 0);
    assert_eq!(age_alignment(&AgeBracket::All, (18, 65)), 0);
  }

  #[test]
  fn extra_power_word_adds_exactly_five() {
    let base = submission();
    let mut boosted = base.clone();
    // Same length class, all words still distinct.
    boosted.title = "Proven Running Shoes For Every New Trail".into();

    let a = creativity(&Context::new(&base));
    let b = creativity(&Context::new(&boosted));
    assert_eq!(b, a + 5);
  }

  #[test]
  fn lowest_budget_in_high_competition_market_is_penalized() {
    let mut us = submission();
    us.budget = BudgetBracket::Under1000;
    // Off-format ad type keeps the unpenalized score below the ceiling.
    us.ad_type = AdType::Story;
    let mut ca = us.clone();
    ca.country = Country::Ca;
    let mut br = us.clone();
    br.country = Country::Br;

    let us_score = platform_viability(&Context::new(&us)) as i32;
    let ca_score = platform_viability(&Context::new(&ca)) as i32;
    let br_score = platform_viability(&Context::new(&br)) as i32;
    assert_eq!(br_score - us_score, 20);
    assert_eq!(br_score - ca_score, 8);
  }

  #[test]
  fn engagement_lift_from_title_and_cta() {
    let mut sub = submission();
    // 36 chars, inside facebook's 25..=60.
    sub.description = "Shop the spring range".into();
    // 1.25 * 1.2 = 1.5 → 75
    assert_eq!(predicted_engagement(&Context::new(&sub)), 75);

    sub.description = "Built for the trail".into();
    // 1.25 → 62.5 → 63
    assert_eq!(predicted_engagement(&Context::new(&sub)), 63);
  }

  #[test]
  fn emotional_words_add_four_each_up_to_twenty() {
    let mut plain5 = submission();
    plain5.description = "Lightweight grip cushioning over distances".into();
    let mut emo5 = plain5.clone();
    emo5.description = "Amazing stunning beautiful exciting happy".into();
    let mut plain7 = plain5.clone();
    plain7.description = "Lightweight grip cushioning over distances with comfort".into();
    let mut emo7 = plain5.clone();
    emo7.description = "Amazing stunning beautiful exciting happy love incredible".into();

    let score = |s: &AdSubmission| creativity(&Context::new(s)) as i32;
    assert_eq!(score(&emo5) - score(&plain5), 20);
    assert_eq!(score(&emo7) - score(&plain7), 20);
  }

  #[test]
  fn question_mark_adds_five_once() {
    let base = submission();
    let mut in_title = base.clone();
    // 37 chars, still inside facebook's 25..=60.
    in_title.title = "Proven Running Shoes For Every Trail?".into();
    let mut in_description = base.clone();
    in_description.description = "Lightweight grip and cushioning over long distances?".into();
    let mut in_both = in_title.clone();
    in_both.description = in_description.description.clone();

    let a = creativity(&Context::new(&base));
    assert_eq!(creativity(&Context::new(&in_title)), a + 5);
    assert_eq!(creativity(&Context::new(&in_description)), a + 5);
    assert_eq!(creativity(&Context::new(&in_both)), a + 5);
  }

  #[test]
  fn emotional_lift_rounds_half_up() {
    let mut sub = submission();
    sub.title = "Hi".into();
    sub.description = "Plain words".into();
    assert_eq!(predicted_engagement(&Context::new(&sub)), 50);

    // 1.15 → 57.5 → 58
    sub.description = "Plain joy".into();
    assert_eq!(predicted_engagement(&Context::new(&sub)), 58);

    // 1.25 * 1.15 = 1.4375 → 71.875 → 72
    sub.title = "Proven Running Shoes For Every Trail".into();
    assert_eq!(predicted_engagement(&Context::new(&sub)), 72);

    // 1.25 * 1.2 * 1.15 = 1.725 → 86.25 → 86
    sub.description = "Shop with joy".into();
    assert_eq!(predicted_engagement(&Context::new(&sub)), 86);
  }

  #[test]
  fn engagement_format_bonuses() {
    let mut sub = submission();
    sub.title = "Hi".into();
    sub.description = "Plain words".into();
    sub.platform = Platform::TikTok;
    sub.ad_type = AdType::Video;
    assert_eq!(predicted_engagement(&Context::new(&sub)), 60);

    sub.platform = Platform::Instagram;
    sub.ad_type = AdType::Story;
    assert_eq!(predicted_engagement(&Context::new(&sub)), 58);

    sub.platform = Platform::LinkedIn;
    sub.industry = Industry::Technology;
    assert_eq!(predicted_engagement(&Context::new(&sub)), 62);
  }

  #[test]
  fn conversion_counts_tags_goal_and_budget() {
    let mut sub = submission();
    sub.description = "Book a free trial with a personal training coach".into();
    sub.goals = Goal::Sales;
    sub.budget = BudgetBracket::Over25000;
    // 50 + 2*12 + 15 + 10
    assert_eq!(predicted_conversion(&Context::new(&sub)), 99);

    sub.goals = Goal::BrandAwareness;
    sub.budget = BudgetBracket::Under1000;
    // 50 + 24 - 5 - 8
    assert_eq!(predicted_conversion(&Context::new(&sub)), 61);
  }

  #[test]
  fn alignment_audience_detail_steps() {
    let mut sub = submission();
    sub.title = "Plain".into();
    sub.description = "Words".into();
    assert_eq!(audience_alignment(&Context::new(&sub)), 70);

    sub.audience_description = "Runners who race weekly".into();
    assert_eq!(audience_alignment(&Context::new(&sub)), 78);

    sub.audience_description =
      "Runners who race weekly and want lighter shoes for long trails".into();
    assert_eq!(audience_alignment(&Context::new(&sub)), 83);
  }
}
