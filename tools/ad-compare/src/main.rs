//! ad-compare: score two ad variants side by side
//!
//! Usage:
//!   ad-compare <variant-a.json> <variant-b.json>     # print per-score deltas
//!   ad-compare <variant-a.json> <variant-b.json> -q  # quiet: exit code only
//!
//! Each file holds one AdSubmission JSON object. Exit 0 when B's overall score
//! is at least A's, 1 when B scores lower, 2 on usage or input errors.

use std::env;
use std::fs;
use std::process;

use ad_evaluator::{evaluate, validate, AdSubmission, ScoreBundle};

fn load_submission(path: &str) -> AdSubmission {
    let contents = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("ad-compare: cannot read {}: {}", path, e);
        process::exit(2);
    });
    let sub: AdSubmission = serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("ad-compare: invalid submission in {}: {}", path, e);
        process::exit(2);
    });
    if let Err(e) = validate(&sub) {
        eprintln!("ad-compare: {}: {}", path, e);
        process::exit(2);
    }
    sub
}

/// (label, a, b) rows: the five sub-scores then the overall score.
fn compare(a: &ScoreBundle, b: &ScoreBundle) -> Vec<(&'static str, u8, u8)> {
    let mut rows: Vec<_> = a
        .parts()
        .iter()
        .zip(b.parts().iter())
        .map(|((name, va), (_, vb))| (*name, *va, *vb))
        .collect();
    rows.push(("overall", a.overall, b.overall));
    rows
}

fn format_row(name: &str, a: u8, b: u8) -> String {
    let delta = b as i32 - a as i32;
    format!("{}: {} -> {} ({:+})", name, a, b, delta)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let files: Vec<_> = args.iter().filter(|a| !a.starts_with('-')).skip(1).collect();

    if files.len() != 2 {
        eprintln!("Usage: ad-compare <variant-a.json> <variant-b.json> [-q|--quiet]");
        eprintln!("  -q  Quiet: only exit code (0=B at least as good, 1=B worse)");
        process::exit(2);
    }

    let a = evaluate(&load_submission(files[0]));
    let b = evaluate(&load_submission(files[1]));
    let b_wins = b.scores.overall >= a.scores.overall;

    if quiet {
        process::exit(if b_wins { 0 } else { 1 });
    }

    for (name, va, vb) in compare(&a.scores, &b.scores) {
        println!("{}", format_row(name, va, vb));
    }
    for r in b.recommendations.iter().filter(|r| !a.recommendations.contains(r)) {
        println!("+ {}", r);
    }
    for r in a.recommendations.iter().filter(|r| !b.recommendations.contains(r)) {
        println!("- {}", r);
    }

    process::exit(if b_wins { 0 } else { 1 });
}
