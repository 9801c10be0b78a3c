//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - exported to JSON/CSV
//! - reloaded later for aggregation or comparisons

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Applicant residence category.
///
/// `Other` covers everything outside the closed set the model was trained on;
/// it one-hot encodes to all zeros (see `features::vectorizer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ResidenceType {
    Owned,
    Rented,
    Other,
}

/// Declared purpose of the loan.
///
/// Same closed-set convention as [`ResidenceType`]: `Other` encodes to zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum LoanPurpose {
    Education,
    Home,
    Personal,
    Other,
}

/// Loan collateralization. Informational only: stored and reported, but never
/// fed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum LoanType {
    Secured,
    Unsecured,
}

impl LoanPurpose {
    pub const ALL: [LoanPurpose; 4] = [
        LoanPurpose::Education,
        LoanPurpose::Home,
        LoanPurpose::Personal,
        LoanPurpose::Other,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Home => "Home",
            LoanPurpose::Personal => "Personal",
            LoanPurpose::Other => "Other",
        }
    }
}

impl LoanType {
    pub const ALL: [LoanType; 2] = [LoanType::Secured, LoanType::Unsecured];

    pub fn display_name(self) -> &'static str {
        match self {
            LoanType::Secured => "Secured",
            LoanType::Unsecured => "Unsecured",
        }
    }
}

impl ResidenceType {
    pub fn display_name(self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Other => "Other",
        }
    }
}

/// Coarse risk tier derived from the credit score.
///
/// Tier boundaries are closed on the lower end:
/// `>= 750 -> A+`, `650..750 -> A`, `550..650 -> B`, `< 550 -> C`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
}

impl Rating {
    /// All tiers, best first. Used for stable iteration in analytics/reports.
    pub const ALL: [Rating; 4] = [Rating::APlus, Rating::A, Rating::B, Rating::C];

    pub fn display_name(self) -> &'static str {
        match self {
            Rating::APlus => "A+",
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
        }
    }
}

/// Review workflow state of a stored application.
///
/// The scoring core never sets this; it is assigned by the reviewing
/// authority (an external collaborator) and only read during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// Immutable application record as submitted by an applicant.
///
/// The transport collaborator validates ranges before this struct is built;
/// the core assumes well-typed values (the normalizer still clamps as
/// defense against out-of-training-distribution numerics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
    pub age: u32,
    pub income: f64,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    pub avg_dpd_per_delinquency: f64,
    /// Fraction of delinquent months, in [0, 1].
    pub delinquency_ratio: f64,
    /// Revolving credit utilization, in [0, 1].
    pub credit_utilization_ratio: f64,
    pub num_open_accounts: u32,
    pub residence_type: ResidenceType,
    pub loan_purpose: LoanPurpose,
    pub loan_type: LoanType,
}

impl ApplicationInput {
    /// Ratio of requested loan amount to annual income.
    ///
    /// Zero income maps to 0 rather than an error; this mirrors the derived
    /// feature fed to the classifier. The fallback estimator treats zero
    /// income separately (neutral probability path).
    pub fn loan_to_income(&self) -> f64 {
        if self.income > 0.0 {
            self.loan_amount / self.income
        } else {
            0.0
        }
    }
}

/// Output of a single scoring request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Estimated probability of default, in [0, 1].
    pub default_probability: f64,
    /// Bounded integer score in [300, 900]; higher means lower risk.
    pub credit_score: i32,
    pub rating: Rating,
    /// Improvement suggestions, highest priority first.
    pub suggestions: Vec<String>,
}

/// A persisted application row: input + scoring output + review workflow.
///
/// The schema mirrors what the storage collaborator keeps per application.
/// Workflow fields are optional because pending applications have no
/// disbursement yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRecord {
    pub id: String,
    #[serde(flatten)]
    pub input: ApplicationInput,
    #[serde(flatten)]
    pub result: ScoringResult,
    pub status: ApplicationStatus,
    pub disbursed_amount: Option<f64>,
    pub repaid_amount: Option<f64>,
    pub created_at: NaiveDate,
    pub decided_at: Option<NaiveDate>,
    pub rejection_reason: Option<String>,
}
