//! Command-line parsing for the credit scoring engine.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the scoring/analytics code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::{LoanPurpose, LoanType, ResidenceType};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cscore", version, about = "Consumer credit scoring and portfolio analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a single application and print the assessment.
    Score(ScoreArgs),
    /// Generate a synthetic portfolio, score it, and print analytics.
    Batch(BatchArgs),
    /// Aggregate a stored-records JSON file into an analytics snapshot.
    Analytics(AnalyticsArgs),
}

/// Applicant attributes for a single scoring request.
#[derive(Debug, Parser, Clone)]
pub struct ScoreArgs {
    /// Applicant age in years.
    #[arg(long)]
    pub age: u32,

    /// Annual income.
    #[arg(long)]
    pub income: f64,

    /// Requested loan amount.
    #[arg(long)]
    pub loan_amount: f64,

    /// Loan tenure in months.
    #[arg(long, default_value_t = 36)]
    pub tenure_months: u32,

    /// Average days-past-due per delinquency event.
    #[arg(long, default_value_t = 0.0)]
    pub avg_dpd: f64,

    /// Fraction of delinquent months (0-1).
    #[arg(long, default_value_t = 0.0)]
    pub delinquency_ratio: f64,

    /// Revolving credit utilization (0-1).
    #[arg(long, default_value_t = 0.0)]
    pub utilization: f64,

    /// Number of open credit accounts.
    #[arg(long, default_value_t = 2)]
    pub open_accounts: u32,

    /// Residence category.
    #[arg(long, value_enum, default_value_t = ResidenceType::Rented)]
    pub residence: ResidenceType,

    /// Loan purpose.
    #[arg(long, value_enum, default_value_t = LoanPurpose::Personal)]
    pub purpose: LoanPurpose,

    /// Loan collateralization (informational).
    #[arg(long, value_enum, default_value_t = LoanType::Unsecured)]
    pub loan_type: LoanType,

    /// Model artifact JSON (overrides CREDIT_MODEL_PATH).
    #[arg(long)]
    pub artifact: Option<PathBuf>,
}

/// Options for synthetic portfolio runs.
#[derive(Debug, Parser, Clone)]
pub struct BatchArgs {
    /// Number of synthetic applications to generate.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub count: usize,

    /// Random seed for portfolio generation.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// As-of date for workflow timestamps (defaults to today, UTC).
    #[arg(long)]
    pub asof: Option<NaiveDate>,

    /// Model artifact JSON (overrides CREDIT_MODEL_PATH).
    #[arg(long)]
    pub artifact: Option<PathBuf>,

    /// Export the scored portfolio as records JSON.
    #[arg(long = "export-records")]
    pub export_records: Option<PathBuf>,

    /// Export per-application results to CSV.
    #[arg(long = "export-csv")]
    pub export_csv: Option<PathBuf>,
}

/// Options for aggregating stored records.
#[derive(Debug, Parser)]
pub struct AnalyticsArgs {
    /// Records JSON file (e.g. produced by `cscore batch --export-records`).
    #[arg(long, value_name = "JSON")]
    pub records: PathBuf,
}
