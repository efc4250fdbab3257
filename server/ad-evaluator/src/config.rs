//! Engine configuration with sane defaults.

/// Tunable thresholds for turning scores into analysis and recommendations.
#[derive(Debug, Clone)]
pub struct Config {
  /// Sub-score at or above which a strength is reported.
  pub strong_threshold: u8,
  /// Sub-score below which a weakness and recommendations are reported.
  pub weak_threshold: u8,
  /// Strength bar for platform viability, which starts from a higher base.
  pub viability_strong_threshold: u8,
  /// Weakness bar for platform viability.
  pub viability_weak_threshold: u8,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      strong_threshold: 75,
      weak_threshold: 60,
      viability_strong_threshold: 80,
      viability_weak_threshold: 65,
    }
  }
}
