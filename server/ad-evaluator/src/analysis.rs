//! Narrative analysis and recommendations derived from the scores and the
//! reference tables.

use crate::config::Config;
use crate::context::Context;
use crate::tables;
use crate::types::{AnalysisReport, Platform, ScoreBundle};

const COMPETITOR_ANALYSIS: [&str; 3] = [
  "Competitors in this space typically lead with clear value propositions and social proof",
  "Top-performing ads in this category refresh creative every 2-4 weeks to avoid fatigue",
  "Differentiate with a specific offer or guarantee that competitors do not match",
];

/// Build the analysis report for one evaluation.
pub fn compute_analysis(ctx: &Context<'_>, scores: &ScoreBundle, config: &Config) -> AnalysisReport {
  let sub = ctx.submission;
  let platform = sub.platform.as_str();
  let industry = sub.industry.as_str();
  let mut report = AnalysisReport::default();

  if scores.creativity >= config.strong_threshold {
    report
      .strengths
      .push("Compelling creative: a strong headline and persuasive copy".to_string());
  } else if scores.creativity < config.weak_threshold {
    report
      .weaknesses
      .push("Creative lacks distinctive hooks; headline and copy read as generic".to_string());
  }

  if scores.platform_viability >= config.viability_strong_threshold {
    report.strengths.push(format!(
      "Excellent fit for {}: format, length and budget suit the platform",
      platform
    ));
  } else if scores.platform_viability < config.viability_weak_threshold {
    report.weaknesses.push(format!(
      "{} is not an ideal fit for this ad as configured",
      platform
    ));
  }

  if scores.audience_alignment >= config.strong_threshold {
    report.strengths.push(format!(
      "Messaging aligns well with the {} audience",
      industry
    ));
  } else if scores.audience_alignment < config.weak_threshold {
    report
      .weaknesses
      .push("Messaging is loosely connected to the target audience".to_string());
  }

  if scores.predicted_engagement >= config.strong_threshold {
    report.strengths.push(format!(
      "Above-average engagement expected on {}",
      platform
    ));
  } else if scores.predicted_engagement < config.weak_threshold {
    report.weaknesses.push(format!(
      "Engagement is likely to fall below the {} benchmark",
      platform
    ));
  }

  if scores.predicted_conversion >= config.strong_threshold {
    report
      .strengths
      .push("Strong conversion drivers for the campaign goal".to_string());
  } else if scores.predicted_conversion < config.weak_threshold {
    report
      .weaknesses
      .push("Few conversion drivers present in the copy".to_string());
  }

  report.platform_specific = platform_insights(ctx);
  report.audience_insights = audience_insights(ctx);
  report.competitor_analysis = COMPETITOR_ANALYSIS.iter().map(|s| s.to_string()).collect();
  report
}

/// Platform facts and hard-limit warnings.
fn platform_insights(ctx: &Context<'_>) -> Vec<String> {
  let sub = ctx.submission;
  let platform = sub.platform.as_str();
  let Some(p) = ctx.platform else {
    return vec![format!("No benchmark data available for platform '{}'", platform)];
  };

  let mut out = vec![
    format!(
      "Optimal title length on {}: {}-{} characters (yours: {})",
      platform,
      p.optimal_title.start(),
      p.optimal_title.end(),
      ctx.title_len
    ),
    format!(
      "Average CTR on {}: {:.2}% (top performers reach {:.2}%)",
      platform, p.ctr.average, p.ctr.high
    ),
    format!(
      "Recommended ad types for {}: {}",
      platform,
      p.best_ad_types.join(", ")
    ),
  ];

  if ctx.title_len > p.title_limit {
    out.push(format!(
      "Title exceeds the {} limit of {} characters by {}",
      platform,
      p.title_limit,
      ctx.title_len - p.title_limit
    ));
  }
  if ctx.description_len > p.description_limit {
    out.push(format!(
      "Description exceeds the {} limit of {} characters by {}",
      platform,
      p.description_limit,
      ctx.description_len - p.description_limit
    ));
  }
  if !tables::is_best_ad_type(p, &sub.ad_type) {
    out.push(format!(
      "{} ads are not a primary format on {}",
      sub.ad_type, platform
    ));
  }
  out
}

/// Industry audience facts and country market notes.
fn audience_insights(ctx: &Context<'_>) -> Vec<String> {
  let sub = ctx.submission;
  let industry = sub.industry.as_str();
  let mut out = Vec::new();

  match ctx.industry {
    Some(ind) => {
      let (lower, upper) = ind.audience.age_range;
      out.push(format!(
        "Core {} audience is aged {}-{}",
        industry, lower, upper
      ));
      out.push(format!(
        "Typical interests: {}",
        ind.audience.interests.join(", ")
      ));
      out.push(format!("Average {} CTR: {:.1}%", industry, ind.avg_ctr));
    }
    None => out.push(format!(
      "No audience profile available for industry '{}'",
      industry
    )),
  }

  match ctx.country {
    Some(c) => {
      out.push(format!(
        "{} is a {}-competition market (CPC multiplier {:.2}x)",
        sub.country,
        c.competitiveness.as_str(),
        c.cpc_multiplier
      ));
      let lang = sub.language.trim().to_ascii_lowercase();
      if !lang.is_empty() && !c.languages.contains(&lang.as_str()) {
        out.push(format!(
          "Ad language '{}' is not a primary language in {}; consider localizing",
          sub.language.trim(),
          sub.country
        ));
      }
    }
    None => out.push(format!("No market data available for country '{}'", sub.country)),
  }

  out
}

/// Recommendations: weak-score tips, then platform-family tips. No duplicates.
pub fn compute_recommendations(
  ctx: &Context<'_>,
  scores: &ScoreBundle,
  config: &Config,
) -> Vec<String> {
  let sub = ctx.submission;
  let mut out: Vec<String> = Vec::new();

  if scores.creativity < config.weak_threshold {
    push_unique(
      &mut out,
      "Add a power word such as \"exclusive\", \"proven\" or \"instant\" to the headline".into(),
    );
    push_unique(&mut out, "Close the description with a clear call to action".into());
  }

  if scores.platform_viability < config.viability_weak_threshold {
    match ctx.industry {
      Some(ind) => push_unique(
        &mut out,
        format!(
          "Consider {} for {} campaigns",
          ind.best_platforms.join(", "),
          sub.industry
        ),
      ),
      None => push_unique(&mut out, "Choose a platform suited to your industry".into()),
    }
    if let Some(p) = ctx.platform {
      push_unique(
        &mut out,
        format!(
          "Keep the title under {} and the description under {} characters",
          p.title_limit, p.description_limit
        ),
      );
    }
  }

  if scores.audience_alignment < config.weak_threshold {
    if let Some(ind) = ctx.industry {
      let terms: Vec<&str> = ind.key_terms.iter().take(3).copied().collect();
      push_unique(
        &mut out,
        format!(
          "Use terms your {} audience looks for, e.g. {}",
          sub.industry,
          terms.join(", ")
        ),
      );
    }
    push_unique(&mut out, "Describe your target audience in more detail".into());
  }

  if scores.predicted_engagement < config.weak_threshold {
    if let Some(p) = ctx.platform {
      push_unique(
        &mut out,
        format!(
          "Keep the headline between {} and {} characters",
          p.optimal_title.start(),
          p.optimal_title.end()
        ),
      );
    }
    push_unique(&mut out, "Use emotional language to spark a reaction".into());
  }

  if scores.predicted_conversion < config.weak_threshold {
    if let Some(ind) = ctx.industry {
      let factors: Vec<String> = ind
        .conversion_factors
        .iter()
        .take(3)
        .map(|f| f.replace('_', " "))
        .collect();
      push_unique(
        &mut out,
        format!("Highlight conversion drivers such as {}", factors.join(", ")),
      );
    }
    push_unique(&mut out, "Add urgency or a concrete offer".into());
  }

  match sub.platform {
    Platform::Instagram | Platform::TikTok => {
      push_unique(&mut out, "Lead with eye-catching visuals in the first second".into());
      push_unique(&mut out, "Add 3-5 relevant hashtags to extend reach".into());
    }
    Platform::LinkedIn => {
      push_unique(
        &mut out,
        "Keep a professional tone and lead with business value".into(),
      );
    }
    Platform::GoogleAds => {
      push_unique(&mut out, "Match headline keywords to search intent".into());
    }
    _ => {}
  }

  out
}

fn push_unique(out: &mut Vec<String>, s: String) {
  if !out.contains(&s) {
    out.push(s);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn submission() -> AdSubmission {
    AdSubmission {
      title: "Weekend City Breaks".into(),
      description: "Hotels and flights".into(),
      platform: Platform::Instagram,
      industry: Industry::Travel,
      country: Country::De,
      audience_description: String::new(),
      target_age: AgeBracket::From25To34,
      target_gender: Some(Gender::All),
      budget: BudgetBracket::From1000To5000,
      goals: Goal::Traffic,
      ad_type: AdType::Image,
      language: "en".into(),
    }
  }

  #[test]
  fn thresholds_split_strengths_and_weaknesses() {
    let sub = submission();
    let ctx = Context::new(&sub);
    let config = Config::default();

    let strong = ScoreBundle::new(75, 80, 75, 75, 75);
    let report = compute_analysis(&ctx, &strong, &config);
    assert_eq!(report.strengths.len(), 5);
    assert!(report.weaknesses.is_empty());

    // 79 is below the viability bar but above its weak bar.
    let mixed = ScoreBundle::new(60, 79, 59, 74, 59);
    let report = compute_analysis(&ctx, &mixed, &config);
    assert!(report.strengths.is_empty());
    assert_eq!(report.weaknesses.len(), 2);

    let weak = ScoreBundle::new(0, 64, 0, 0, 0);
    let report = compute_analysis(&ctx, &weak, &config);
    assert_eq!(report.weaknesses.len(), 5);
    assert_eq!(report.competitor_analysis.len(), 3);
  }

  #[test]
  fn platform_facts_and_limit_warnings() {
    let mut sub = submission();
    sub.title = "x".repeat(85);
    sub.description = "y".repeat(2300);
    sub.ad_type = AdType::Search;
    let ctx = Context::new(&sub);
    let report = compute_analysis(&ctx, &ScoreBundle::new(50, 50, 50, 50, 50), &Config::default());

    let ps = &report.platform_specific;
    assert!(ps[0].contains("20-50"));
    assert!(ps.iter().any(|s| s.contains("Title exceeds the instagram limit of 80 characters by 5")));
    assert!(ps.iter().any(|s| s.contains("Description exceeds the instagram limit of 2200 characters by 100")));
    assert!(ps.iter().any(|s| s.contains("search ads are not a primary format")));
  }

  #[test]
  fn audience_facts_and_language_note() {
    let mut sub = submission();
    sub.language = "pt".into();
    let ctx = Context::new(&sub);
    let report = compute_analysis(&ctx, &ScoreBundle::new(50, 50, 50, 50, 50), &Config::default());

    let ai = &report.audience_insights;
    assert!(ai.iter().any(|s| s.contains("aged 25-54")));
    assert!(ai.iter().any(|s| s.contains("DE is a medium-competition market")));
    assert!(ai.iter().any(|s| s.contains("'pt' is not a primary language in DE")));
  }

  #[test]
  fn unknown_keys_produce_placeholder_insights() {
    let mut sub = submission();
    sub.platform = Platform::Other("myspace".into());
    sub.industry = Industry::Other("alchemy".into());
    sub.country = Country::Other("ZZ".into());
    let ctx = Context::new(&sub);
    let report = compute_analysis(&ctx, &ScoreBundle::new(50, 50, 50, 50, 50), &Config::default());

    assert_eq!(report.platform_specific.len(), 1);
    assert!(report.platform_specific[0].contains("myspace"));
    assert_eq!(report.audience_insights.len(), 2);
  }

  #[test]
  fn recommendations_cover_weak_scores_and_platform_family() {
    let sub = submission();
    let ctx = Context::new(&sub);
    let recs = compute_recommendations(&ctx, &ScoreBundle::new(0, 0, 0, 0, 0), &Config::default());

    assert!(recs.iter().any(|r| r.contains("power word")));
    assert!(recs.iter().any(|r| r.contains("for travel campaigns")));
    assert!(recs.iter().any(|r| r.contains("travel, trip, vacation")));
    assert!(recs.iter().any(|r| r.contains("between 20 and 50")));
    assert!(recs.iter().any(|r| r.contains("best price, free cancellation")));
    assert!(recs.iter().any(|r| r.contains("hashtags")));

    let mut unique = recs.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), recs.len());
  }

  #[test]
  fn strong_scores_leave_only_platform_tips() {
    let mut sub = submission();
    sub.platform = Platform::LinkedIn;
    let ctx = Context::new(&sub);
    let recs = compute_recommendations(&ctx, &ScoreBundle::new(90, 90, 90, 90, 90), &Config::default());
    assert_eq!(recs, vec!["Keep a professional tone and lead with business value".to_string()]);

    sub.platform = Platform::Pinterest;
    let ctx = Context::new(&sub);
    let recs = compute_recommendations(&ctx, &ScoreBundle::new(90, 90, 90, 90, 90), &Config::default());
    assert!(recs.is_empty());
  }
}
