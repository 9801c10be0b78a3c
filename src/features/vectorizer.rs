//! Feature vector construction.
//!
//! The model artifact declares an ordered feature-name list; we resolve each
//! name against the raw input:
//!
//! - numeric fields are copied through by name
//! - `loan_to_income` is derived (`loan_amount / income`, 0 on zero income)
//! - categorical fields are expanded via exact-match one-hot indicators
//!
//! An `Other`/unmatched category yields 0 across its whole indicator group.
//! That is intentional information loss (the model was trained on a closed
//! category set), not an error. A feature name we cannot resolve at all is a
//! different situation entirely: it signals a stale or incompatible model
//! artifact and is a fatal configuration error.

use crate::domain::{ApplicationInput, LoanPurpose, ResidenceType};
use crate::error::AppError;

/// Canonical ordered feature list for the current artifact schema.
///
/// Versioned configuration: the artifact's own `features` list is
/// authoritative at runtime, but this is the order the bundled fallback
/// tooling (sample generation, tests, artifact templates) assumes.
pub const CANONICAL_FEATURES: [&str; 13] = [
    "age",
    "income",
    "loan_amount",
    "loan_tenure_months",
    "avg_dpd_per_delinquency",
    "delinquency_ratio",
    "credit_utilization_ratio",
    "num_open_accounts",
    "residence_type_Owned",
    "residence_type_Rented",
    "loan_purpose_Education",
    "loan_purpose_Home",
    "loan_purpose_Personal",
];

/// Build the ordered feature vector for `input` per `feature_order`.
///
/// Pure function. Fails only on unresolvable feature names (stale artifact).
pub fn vectorize(input: &ApplicationInput, feature_order: &[String]) -> Result<Vec<f64>, AppError> {
    let mut out = Vec::with_capacity(feature_order.len());
    for name in feature_order {
        let value = resolve_feature(input, name).ok_or_else(|| {
            AppError::config(format!(
                "Model artifact declares unknown feature '{name}'; artifact is stale or incompatible."
            ))
        })?;
        out.push(value);
    }
    Ok(out)
}

/// Resolve a single feature name to its numeric value, or `None` if the name
/// is not part of the schema this vectorizer understands.
fn resolve_feature(input: &ApplicationInput, name: &str) -> Option<f64> {
    let value = match name {
        "age" => f64::from(input.age),
        "income" => input.income,
        "loan_amount" => input.loan_amount,
        "loan_tenure_months" => f64::from(input.loan_tenure_months),
        "avg_dpd_per_delinquency" => input.avg_dpd_per_delinquency,
        "delinquency_ratio" => input.delinquency_ratio,
        "credit_utilization_ratio" => input.credit_utilization_ratio,
        "num_open_accounts" => f64::from(input.num_open_accounts),
        "loan_to_income" => input.loan_to_income(),
        "residence_type_Owned" => indicator(input.residence_type == ResidenceType::Owned),
        "residence_type_Rented" => indicator(input.residence_type == ResidenceType::Rented),
        "loan_purpose_Education" => indicator(input.loan_purpose == LoanPurpose::Education),
        "loan_purpose_Home" => indicator(input.loan_purpose == LoanPurpose::Home),
        "loan_purpose_Personal" => indicator(input.loan_purpose == LoanPurpose::Personal),
        _ => return None,
    };
    Some(value)
}

fn indicator(hit: bool) -> f64 {
    if hit { 1.0 } else { 0.0 }
}
