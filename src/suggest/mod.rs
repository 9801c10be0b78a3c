//! Credit improvement suggestions.
//!
//! Expressed as an ordered table of (predicate, message) rules rather than
//! cascading conditionals, so the rule set is independently testable and can
//! grow without touching control flow. Each rule contributes at most one
//! suggestion; evaluation stops once the cap is reached. Pure, no I/O.

use crate::domain::{ApplicationInput, Rating};

/// Upper bound on emitted suggestions to avoid overwhelming output.
pub const MAX_SUGGESTIONS: usize = 4;

struct Rule {
    applies: fn(&ApplicationInput, Rating) -> bool,
    message: &'static str,
}

/// Priority-ordered rule table. Earlier rules win ties against the cap.
const RULES: [Rule; 7] = [
    Rule {
        applies: |i, _| i.credit_utilization_ratio > 0.5,
        message: "Reduce credit utilization below 30% of your available limits.",
    },
    Rule {
        applies: |i, _| i.delinquency_ratio > 0.2,
        message: "Improve payment history; recent delinquencies weigh heavily on the score.",
    },
    Rule {
        applies: |i, _| i.avg_dpd_per_delinquency > 15.0,
        message: "Clear overdue payments promptly to bring average days-past-due down.",
    },
    Rule {
        applies: |i, _| i.loan_to_income() > 3.0,
        message: "Lower the requested amount or extend savings; loan above 3x income raises risk.",
    },
    Rule {
        applies: |i, _| i.num_open_accounts > 6,
        message: "Consolidate or close unused credit accounts.",
    },
    Rule {
        applies: |i, _| i.num_open_accounts < 2,
        message: "Maintain a couple of active, well-serviced credit lines to build history.",
    },
    Rule {
        applies: |_, rating| rating == Rating::C,
        message: "Consider a co-applicant or collateral to offset a low credit score.",
    },
];

/// Derive improvement suggestions from raw inputs and the computed rating.
pub fn suggest(input: &ApplicationInput, rating: Rating) -> Vec<String> {
    let mut out = Vec::new();
    for rule in &RULES {
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
        if (rule.applies)(input, rating) {
            out.push(rule.message.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoanPurpose, LoanType, ResidenceType};

    fn clean_input() -> ApplicationInput {
        ApplicationInput {
            age: 40,
            income: 500_000.0,
            loan_amount: 400_000.0,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 0.0,
            delinquency_ratio: 0.0,
            credit_utilization_ratio: 0.2,
            num_open_accounts: 3,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Home,
            loan_type: LoanType::Secured,
        }
    }

    #[test]
    fn clean_profile_gets_no_suggestions() {
        assert!(suggest(&clean_input(), Rating::APlus).is_empty());
    }

    #[test]
    fn suggestions_are_capped_and_priority_ordered() {
        let mut input = clean_input();
        input.credit_utilization_ratio = 0.9;
        input.delinquency_ratio = 0.4;
        input.avg_dpd_per_delinquency = 30.0;
        input.loan_amount = input.income * 5.0;
        input.num_open_accounts = 10;

        let suggestions = suggest(&input, Rating::C);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(suggestions[0].contains("utilization"));
        assert!(suggestions[1].contains("payment history"));
        assert!(suggestions[2].contains("days-past-due"));
        assert!(suggestions[3].contains("3x income"));
    }

    #[test]
    fn single_matching_rule_emits_single_suggestion() {
        let mut input = clean_input();
        input.num_open_accounts = 1;
        let suggestions = suggest(&input, Rating::A);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("credit lines"));
    }

    #[test]
    fn low_rating_rule_fires_on_rating_alone() {
        let suggestions = suggest(&clean_input(), Rating::C);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("co-applicant"));
    }
}
