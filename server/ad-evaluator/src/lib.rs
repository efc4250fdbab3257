//! Ad Evaluator: deterministic, rule-based ad scoring.
//!
//! Scores an ad submission (copy, platform, industry, market, audience,
//! budget, goal) against static platform/industry/country tables and
//! returns five sub-scores, an overall score, a narrative analysis, and
//! recommendations.
//!
//! No AI, no DB, no network; pure computation over read-only tables.

pub mod analysis;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod score;
pub mod tables;
pub mod text;
pub mod types;
pub mod validate;

pub use config::Config;
pub use engine::{evaluate, Engine};
pub use error::EvalError;
pub use types::{AdSubmission, AnalysisReport, ErrorOutput, Evaluation, ScoreBundle};
pub use validate::validate;
