//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an AdSubmission. Each output line is either:
//! - An Evaluation (for a valid submission)
//! - An ErrorOutput (when parsing or validation fails)
//!
//! Diagnostics go to stderr so stdout stays machine-readable.

use ad_evaluator::{validate, AdSubmission, Engine, ErrorOutput, EvalError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "ad_evaluator=info".into()),
    )
    .with_writer(io::stderr)
    .init();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();
  let mut evaluated = 0u64;
  let mut rejected = 0u64;

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        tracing::error!(error = %e, "read error");
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let result = serde_json::from_str::<AdSubmission>(trimmed)
      .map_err(EvalError::from)
      .and_then(|sub| validate(&sub).map(|()| sub));

    let written = match result {
      Ok(sub) => {
        evaluated += 1;
        serde_json::to_writer(&mut out, &engine.evaluate(&sub))
      }
      Err(e) => {
        rejected += 1;
        tracing::warn!(error = %e, "rejected input line");
        let err = match &e {
          EvalError::Validation { field, reason } => {
            ErrorOutput::new(reason.clone()).with_field(field.clone())
          }
          EvalError::Json(_) => ErrorOutput::new(e.to_string()),
        };
        serde_json::to_writer(&mut out, &err)
      }
    };
    if let Err(e) = written.map_err(io::Error::from).and_then(|()| writeln!(out)) {
      tracing::error!(error = %e, "write error");
      std::process::exit(1);
    }
  }

  let _ = out.flush();
  tracing::info!(evaluated, rejected, "input exhausted");
}
