//! Rule-based fallback estimator.
//!
//! When the trained classifier signals `ModelUnavailable`, the service keeps
//! answering with this deterministic heuristic: additive risk points over the
//! raw inputs, mapped to a pseudo-probability, then through the same score
//! mapper as the real model. This is the guaranteed last-resort path and
//! never fails for a well-formed application.
//!
//! Risk-point bands (0-135 points total):
//!
//! | factor                        | bands                               |
//! |-------------------------------|-------------------------------------|
//! | age                           | <25: 15, <35: 10, <50: 5            |
//! | loan_to_income                | >5: 25, >3: 15, >2: 10              |
//! | delinquency_ratio             | >0.5: 30, >0.3: 20, >0.1: 10        |
//! | credit_utilization_ratio      | >0.8: 20, >0.5: 10, >0.3: 5         |
//! | avg_dpd_per_delinquency       | >30: 25, >15: 15, >5: 8             |
//! | num_open_accounts             | >3: 10, <2: 5                       |
//! | residence_type                | Rented: 10, Other: 5                |
//!
//! Points divide by 100 and cap at 0.99. Zero income makes loan-to-income
//! undefined; that substitutes the neutral mid-range probability instead.

use crate::domain::{ApplicationInput, ResidenceType, ScoringResult};
use crate::score::mapper::map_probability;
use crate::suggest::suggest;

/// Probability used when the heuristic cannot be computed (zero income).
pub const NEUTRAL_PROBABILITY: f64 = 0.5;

/// Cap so the heuristic never claims certain default.
const MAX_PROBABILITY: f64 = 0.99;

/// Heuristic default-risk proxy in [0, 0.99].
pub fn estimate_default_probability(input: &ApplicationInput) -> f64 {
    if input.income <= 0.0 {
        return NEUTRAL_PROBABILITY;
    }

    let mut risk: u32 = 0;

    risk += match input.age {
        0..=24 => 15,
        25..=34 => 10,
        35..=49 => 5,
        _ => 0,
    };

    let lti = input.loan_to_income();
    risk += if lti > 5.0 {
        25
    } else if lti > 3.0 {
        15
    } else if lti > 2.0 {
        10
    } else {
        0
    };

    risk += if input.delinquency_ratio > 0.5 {
        30
    } else if input.delinquency_ratio > 0.3 {
        20
    } else if input.delinquency_ratio > 0.1 {
        10
    } else {
        0
    };

    risk += if input.credit_utilization_ratio > 0.8 {
        20
    } else if input.credit_utilization_ratio > 0.5 {
        10
    } else if input.credit_utilization_ratio > 0.3 {
        5
    } else {
        0
    };

    risk += if input.avg_dpd_per_delinquency > 30.0 {
        25
    } else if input.avg_dpd_per_delinquency > 15.0 {
        15
    } else if input.avg_dpd_per_delinquency > 5.0 {
        8
    } else {
        0
    };

    risk += match input.num_open_accounts {
        0..=1 => 5,
        2..=3 => 0,
        _ => 10,
    };

    risk += match input.residence_type {
        ResidenceType::Owned => 0,
        ResidenceType::Rented => 10,
        ResidenceType::Other => 5,
    };

    (f64::from(risk) / 100.0).min(MAX_PROBABILITY)
}

/// Full degraded-mode scoring: heuristic probability through the shared
/// score mapper and suggestion engine.
pub fn estimate(input: &ApplicationInput) -> ScoringResult {
    let probability = estimate_default_probability(input);
    let (credit_score, rating) = map_probability(probability);
    let suggestions = suggest(input, rating);
    ScoringResult {
        default_probability: probability,
        credit_score,
        rating,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoanPurpose, LoanType, Rating};

    fn input(age: u32, income: f64) -> ApplicationInput {
        ApplicationInput {
            age,
            income,
            loan_amount: 100_000.0,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 0.0,
            delinquency_ratio: 0.0,
            credit_utilization_ratio: 0.0,
            num_open_accounts: 3,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Personal,
            loan_type: LoanType::Secured,
        }
    }

    #[test]
    fn zero_income_substitutes_neutral_probability() {
        let result = estimate(&input(40, 0.0));
        assert_eq!(result.default_probability, NEUTRAL_PROBABILITY);
        assert_eq!(result.credit_score, 600);
        assert_eq!(result.rating, Rating::B);
    }

    #[test]
    fn all_zero_ratios_never_panic() {
        let mut i = input(55, 500_000.0);
        i.loan_amount = 0.0;
        i.num_open_accounts = 0;
        let result = estimate(&i);
        assert!((0.0..=1.0).contains(&result.default_probability));
        assert!((300..=900).contains(&result.credit_score));
    }

    #[test]
    fn clean_profile_scores_high() {
        // 55y, low leverage, no delinquency, owned residence: no risk points.
        let result = estimate(&input(55, 500_000.0));
        assert_eq!(result.default_probability, 0.0);
        assert_eq!(result.credit_score, 900);
        assert_eq!(result.rating, Rating::APlus);
    }

    #[test]
    fn risky_profile_caps_below_certain_default() {
        let mut i = input(22, 10_000.0);
        i.loan_amount = 100_000.0; // lti = 10
        i.delinquency_ratio = 0.9;
        i.credit_utilization_ratio = 0.95;
        i.avg_dpd_per_delinquency = 45.0;
        i.num_open_accounts = 12;
        i.residence_type = ResidenceType::Rented;
        let p = estimate_default_probability(&i);
        assert_eq!(p, 0.99, "points past 100 cap at 0.99");
        assert_eq!(estimate(&i).rating, Rating::C);
    }

    #[test]
    fn delinquency_band_edges_are_exclusive() {
        let mut i = input(55, 500_000.0);
        i.loan_amount = 0.0;
        i.delinquency_ratio = 0.1;
        assert_eq!(estimate_default_probability(&i), 0.0);
        i.delinquency_ratio = 0.11;
        assert_eq!(estimate_default_probability(&i), 0.10);
    }

    #[test]
    fn heuristic_is_deterministic() {
        let i = input(28, 60_000.0);
        assert_eq!(
            estimate_default_probability(&i),
            estimate_default_probability(&i)
        );
    }
}
