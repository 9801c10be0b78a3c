//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads the model artifact (or enters degraded mode)
//! - runs the scoring pipeline / analytics aggregation
//! - prints reports
//! - writes optional exports

use std::path::Path;

use chrono::Utc;
use clap::Parser;

use crate::analytics::aggregate;
use crate::cli::{AnalyticsArgs, BatchArgs, Cli, Command, ScoreArgs};
use crate::domain::ApplicationInput;
use crate::error::AppError;

pub mod pipeline;

use pipeline::ScoringEngine;

/// Entry point for the `cscore` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Batch(args) => handle_batch(args),
        Command::Analytics(args) => handle_analytics(args),
    }
}

/// Build the engine for this process, honoring the degraded-mode contract:
/// a missing artifact is announced, never fatal.
fn build_engine(artifact_path: Option<&Path>) -> Result<ScoringEngine, AppError> {
    let artifact = crate::io::load_artifact(artifact_path)?;
    let engine = ScoringEngine::new(artifact)?;
    if !engine.has_model() {
        eprintln!("note: no model artifact loaded; scoring via heuristic fallback");
    }
    Ok(engine)
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = build_engine(args.artifact.as_deref())?;
    let input = application_from_args(&args);
    let outcome = engine.score(&input)?;
    println!("{}", crate::report::format_scoring_report(&input, &outcome));
    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<(), AppError> {
    let engine = build_engine(args.artifact.as_deref())?;
    let asof = args.asof.unwrap_or_else(|| Utc::now().date_naive());

    let inputs = crate::data::generate_inputs(args.count, args.seed)?;
    let outcomes = engine.score_batch(&inputs)?;
    let fallback_count = outcomes.iter().filter(|o| o.used_fallback).count();
    let records = crate::data::build_records(&inputs, &outcomes, args.seed, asof);

    println!(
        "Scored {} applications ({} via fallback) | seed={} | as-of {asof}\n",
        records.len(),
        fallback_count,
        args.seed,
    );
    println!("{}", crate::report::format_snapshot(&aggregate(&records)));

    // Optional exports.
    if let Some(path) = &args.export_records {
        crate::io::write_records_json(path, &records)?;
    }
    if let Some(path) = &args.export_csv {
        crate::io::write_records_csv(path, &records)?;
    }

    Ok(())
}

fn handle_analytics(args: AnalyticsArgs) -> Result<(), AppError> {
    let records = crate::io::read_records_json(&args.records)?;
    println!("{}", crate::report::format_snapshot(&aggregate(&records)));
    Ok(())
}

fn application_from_args(args: &ScoreArgs) -> ApplicationInput {
    ApplicationInput {
        age: args.age,
        income: args.income,
        loan_amount: args.loan_amount,
        loan_tenure_months: args.tenure_months,
        avg_dpd_per_delinquency: args.avg_dpd,
        delinquency_ratio: args.delinquency_ratio,
        credit_utilization_ratio: args.utilization,
        num_open_accounts: args.open_accounts,
        residence_type: args.residence,
        loan_purpose: args.purpose,
        loan_type: args.loan_type,
    }
}
