//! Seeded synthetic applicant portfolio generation.
//!
//! Stands in for the storage collaborator during local runs: produces a
//! plausible mix of applicant profiles, then decorates scored applications
//! with review outcomes (status, disbursement, repayment, dates) so the
//! analytics aggregator has something realistic to chew on.
//!
//! Everything is driven by a seeded `StdRng`, so a given (count, seed) pair
//! reproduces the same portfolio run after run.

use chrono::{Duration, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::app::pipeline::ScoredOutcome;
use crate::domain::{
    ApplicationInput, ApplicationStatus, LoanPurpose, LoanRecord, LoanType, ResidenceType,
};
use crate::error::AppError;

const TENURE_CHOICES: [u32; 6] = [12, 24, 36, 48, 60, 84];

const REJECTION_REASONS: [&str; 4] = [
    "Credit score below minimum threshold",
    "Insufficient income for requested loan amount",
    "High debt-to-income ratio",
    "Poor credit history with multiple delinquencies",
];

/// Generate `count` synthetic applicant inputs.
pub fn generate_inputs(count: usize, seed: u64) -> Result<Vec<ApplicationInput>, AppError> {
    if count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    // Log-income centered near 600k with moderate spread.
    let log_income = Normal::<f64>::new(13.2, 0.55)
        .map_err(|e| AppError::new(4, format!("Income distribution error: {e}")))?;

    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let income = log_income.sample(&mut rng).exp().clamp(100_000.0, 5_000_000.0);
        let loan_amount = income * rng.gen_range(0.3..=4.0);

        // Squaring a uniform draw skews delinquency metrics toward clean
        // profiles, matching how real books look.
        let u: f64 = rng.r#gen();
        let delinquency_ratio = (u * u * 0.8).clamp(0.0, 1.0);
        let v: f64 = rng.r#gen();
        let avg_dpd_per_delinquency = if delinquency_ratio > 0.0 {
            v * v * 40.0
        } else {
            0.0
        };

        let residence_roll: f64 = rng.r#gen();
        let residence_type = if residence_roll < 0.40 {
            ResidenceType::Owned
        } else if residence_roll < 0.80 {
            ResidenceType::Rented
        } else {
            ResidenceType::Other
        };

        out.push(ApplicationInput {
            age: rng.gen_range(21..=60),
            income,
            loan_amount,
            loan_tenure_months: *TENURE_CHOICES.choose(&mut rng).unwrap_or(&36),
            avg_dpd_per_delinquency,
            delinquency_ratio,
            credit_utilization_ratio: rng.gen_range(0.05..=0.95),
            num_open_accounts: rng.gen_range(1..=10),
            residence_type,
            loan_purpose: *[
                LoanPurpose::Education,
                LoanPurpose::Home,
                LoanPurpose::Personal,
                LoanPurpose::Other,
            ]
            .choose(&mut rng)
            .unwrap_or(&LoanPurpose::Personal),
            loan_type: if rng.r#gen::<f64>() < 0.55 {
                LoanType::Secured
            } else {
                LoanType::Unsecured
            },
        });
    }
    Ok(out)
}

/// Decorate scored applications with synthetic review outcomes.
///
/// Approval odds track the computed score the way a human review queue
/// would; approved loans get a disbursement and partial (sometimes full)
/// repayment. The scoring core itself never sets status; this is a
/// stand-in for the reviewing authority.
pub fn build_records(
    inputs: &[ApplicationInput],
    outcomes: &[ScoredOutcome],
    seed: u64,
    asof_date: NaiveDate,
) -> Vec<LoanRecord> {
    // XOR keeps the workflow stream independent of the applicant stream.
    let mut rng = StdRng::seed_from_u64(seed ^ 0x5EED_F00D);
    let mut records = Vec::with_capacity(inputs.len());

    for (i, (input, outcome)) in inputs.iter().zip(outcomes.iter()).enumerate() {
        let score = outcome.result.credit_score;
        let roll: f64 = rng.r#gen();
        let status = if score >= 650 {
            if roll < 0.70 {
                ApplicationStatus::Approved
            } else if roll < 0.90 {
                ApplicationStatus::Pending
            } else {
                ApplicationStatus::Rejected
            }
        } else if score >= 550 {
            if roll < 0.35 {
                ApplicationStatus::Approved
            } else if roll < 0.65 {
                ApplicationStatus::Pending
            } else {
                ApplicationStatus::Rejected
            }
        } else if roll < 0.10 {
            ApplicationStatus::Approved
        } else if roll < 0.35 {
            ApplicationStatus::Pending
        } else {
            ApplicationStatus::Rejected
        };

        let (disbursed_amount, repaid_amount, decided_at, rejection_reason, created_at) =
            match status {
                ApplicationStatus::Pending => {
                    let created = asof_date - Duration::days(rng.gen_range(1..=15));
                    (None, None, None, None, created)
                }
                ApplicationStatus::Approved => {
                    let decided = asof_date - Duration::days(rng.gen_range(5..=180));
                    let created = decided - Duration::days(rng.gen_range(1..=30));
                    let disbursed = input.loan_amount;
                    let repaid = if rng.r#gen::<f64>() < 0.2 {
                        disbursed
                    } else {
                        disbursed * rng.gen_range(0.0..=0.9)
                    };
                    (Some(disbursed), Some(repaid), Some(decided), None, created)
                }
                ApplicationStatus::Rejected => {
                    let decided = asof_date - Duration::days(rng.gen_range(2..=90));
                    let created = decided - Duration::days(rng.gen_range(1..=30));
                    let reason = REJECTION_REASONS
                        .choose(&mut rng)
                        .unwrap_or(&REJECTION_REASONS[0]);
                    (None, None, Some(decided), Some(reason.to_string()), created)
                }
            };

        records.push(LoanRecord {
            id: format!("APP-{:04}", i + 1),
            input: input.clone(),
            result: outcome.result.clone(),
            status,
            disbursed_amount,
            repaid_amount,
            created_at,
            decided_at,
            rejection_reason,
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::ScoringEngine;

    #[test]
    fn zero_count_is_rejected() {
        assert!(generate_inputs(0, 42).is_err());
    }

    #[test]
    fn same_seed_reproduces_the_portfolio() {
        let a = generate_inputs(50, 42).unwrap();
        let b = generate_inputs(50, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = generate_inputs(50, 42).unwrap();
        let b = generate_inputs(50, 43).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn generated_inputs_are_well_formed() {
        for input in generate_inputs(200, 7).unwrap() {
            assert!((21..=60).contains(&input.age));
            assert!(input.income > 0.0);
            assert!(input.loan_amount > 0.0);
            assert!(TENURE_CHOICES.contains(&input.loan_tenure_months));
            assert!((0.0..=1.0).contains(&input.delinquency_ratio));
            assert!((0.0..=1.0).contains(&input.credit_utilization_ratio));
            assert!(input.avg_dpd_per_delinquency >= 0.0);
        }
    }

    #[test]
    fn records_carry_workflow_fields_consistently() {
        let asof = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let inputs = generate_inputs(100, 11).unwrap();
        let engine = ScoringEngine::new(None).unwrap();
        let outcomes = engine.score_batch(&inputs).unwrap();
        let records = build_records(&inputs, &outcomes, 11, asof);

        assert_eq!(records.len(), 100);
        for record in &records {
            match record.status {
                ApplicationStatus::Pending => {
                    assert!(record.disbursed_amount.is_none());
                    assert!(record.decided_at.is_none());
                }
                ApplicationStatus::Approved => {
                    assert!(record.disbursed_amount.is_some());
                    assert!(record.repaid_amount.unwrap() <= record.disbursed_amount.unwrap());
                    assert!(record.decided_at.unwrap() < asof);
                    assert!(record.created_at < record.decided_at.unwrap());
                }
                ApplicationStatus::Rejected => {
                    assert!(record.rejection_reason.is_some());
                    assert!(record.decided_at.is_some());
                }
            }
        }
    }
}
