//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the scoring/aggregation code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The histogram rendering is intentionally "dumb" (fixed-width bars,
//! deterministic output) so it is useful for quick visual sanity checks and
//! stable under golden tests.

use crate::analytics::AnalyticsSnapshot;
use crate::app::pipeline::ScoredOutcome;
use crate::domain::ApplicationInput;

/// Maximum bar width (columns) for the score histogram.
const HISTOGRAM_WIDTH: usize = 40;

/// Format a single application's scoring report.
pub fn format_scoring_report(input: &ApplicationInput, outcome: &ScoredOutcome) -> String {
    let mut out = String::new();

    out.push_str("=== cscore - Credit Risk Assessment ===\n");
    out.push_str(&format!(
        "Applicant: age={} | income={:.0} | loan={:.0} over {}m ({} / {})\n",
        input.age,
        input.income,
        input.loan_amount,
        input.loan_tenure_months,
        input.loan_purpose.display_name(),
        input.loan_type.display_name(),
    ));
    out.push_str(&format!(
        "History: delinquency={:.2} | utilization={:.2} | avg_dpd={:.1} | open_accounts={}\n",
        input.delinquency_ratio,
        input.credit_utilization_ratio,
        input.avg_dpd_per_delinquency,
        input.num_open_accounts,
    ));

    out.push('\n');
    out.push_str(&format!(
        "Default probability: {:.2}%\n",
        outcome.result.default_probability * 100.0
    ));
    out.push_str(&format!(
        "Credit score       : {} ({})\n",
        outcome.result.credit_score,
        outcome.result.rating.display_name()
    ));
    if outcome.used_fallback {
        out.push_str("Mode               : heuristic fallback (trained model unavailable)\n");
    }

    if !outcome.result.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for s in &outcome.result.suggestions {
            out.push_str(&format!("- {s}\n"));
        }
    }

    out
}

/// Format the full analytics snapshot for dashboard-style terminal output.
pub fn format_snapshot(snapshot: &AnalyticsSnapshot) -> String {
    let mut out = String::new();

    out.push_str("=== Portfolio Analytics ===\n");
    out.push_str(&format!(
        "Applications: {} total | {} pending | {} approved | {} rejected\n",
        snapshot.total_applications,
        snapshot.status.pending,
        snapshot.status.approved,
        snapshot.status.rejected,
    ));
    out.push_str(&format!(
        "Approval rate: {:.1}%\n",
        snapshot.approval_rate * 100.0
    ));
    out.push_str(&format!(
        "Disbursed: {:.2} | Repaid: {:.2} | Outstanding: {:.2}\n",
        snapshot.total_disbursed, snapshot.total_repaid, snapshot.outstanding,
    ));
    out.push_str(&format!(
        "Loans: {} active | {} closed\n",
        snapshot.active_loans, snapshot.closed_loans,
    ));

    out.push_str("\nRating distribution:\n");
    out.push_str(&format!(
        "  A+: {:<6} A: {:<6} B: {:<6} C: {}\n",
        snapshot.ratings.a_plus, snapshot.ratings.a, snapshot.ratings.b, snapshot.ratings.c,
    ));

    out.push_str("\nAverage loan by purpose:\n");
    for c in &snapshot.avg_loan_by_purpose {
        out.push_str(&format!(
            "  {:<10} n={:<5} avg={:.0}\n",
            c.label, c.count, c.average_loan
        ));
    }
    out.push_str("Average loan by type:\n");
    for c in &snapshot.avg_loan_by_type {
        out.push_str(&format!(
            "  {:<10} n={:<5} avg={:.0}\n",
            c.label, c.count, c.average_loan
        ));
    }

    out.push_str("\nScore distribution:\n");
    out.push_str(&render_histogram(snapshot));

    if !snapshot.monthly_disbursed.is_empty() {
        out.push_str("\nMonthly disbursements:\n");
        for m in &snapshot.monthly_disbursed {
            out.push_str(&format!(
                "  {:04}-{:02}: n={:<5} amount={:.2}\n",
                m.year, m.month, m.count, m.amount
            ));
        }
    }

    out
}

/// Fixed-width bar chart of the score histogram.
fn render_histogram(snapshot: &AnalyticsSnapshot) -> String {
    let max = snapshot
        .score_histogram
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for bucket in &snapshot.score_histogram {
        let bar_len = if max > 0 {
            (bucket.count * HISTOGRAM_WIDTH).div_ceil(max).min(HISTOGRAM_WIDTH)
        } else {
            0
        };
        out.push_str(&format!(
            "  {}-{} | {:<width$} {}\n",
            bucket.lo,
            bucket.hi,
            "#".repeat(bar_len),
            bucket.count,
            width = HISTOGRAM_WIDTH,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::aggregate;
    use crate::app::pipeline::ScoringEngine;
    use crate::data::{build_records, generate_inputs};
    use crate::domain::{LoanPurpose, LoanType, ResidenceType};
    use chrono::NaiveDate;

    fn sample_input() -> ApplicationInput {
        ApplicationInput {
            age: 35,
            income: 75_000.0,
            loan_amount: 200_000.0,
            loan_tenure_months: 60,
            avg_dpd_per_delinquency: 2.0,
            delinquency_ratio: 0.05,
            credit_utilization_ratio: 0.3,
            num_open_accounts: 4,
            residence_type: ResidenceType::Owned,
            loan_purpose: LoanPurpose::Home,
            loan_type: LoanType::Secured,
        }
    }

    #[test]
    fn scoring_report_flags_fallback_mode() {
        let engine = ScoringEngine::new(None).unwrap();
        let outcome = engine.score(&sample_input()).unwrap();
        let report = format_scoring_report(&sample_input(), &outcome);
        assert!(report.contains("heuristic fallback"));
        assert!(report.contains("Credit score"));
    }

    #[test]
    fn empty_snapshot_formats_without_panicking() {
        let snapshot = aggregate(&[]);
        let text = format_snapshot(&snapshot);
        assert!(text.contains("Approval rate: 0.0%"));
        assert!(text.contains("300-400"));
        assert!(text.contains("800-900"));
    }

    #[test]
    fn populated_snapshot_is_deterministic() {
        let inputs = generate_inputs(50, 42).unwrap();
        let engine = ScoringEngine::new(None).unwrap();
        let outcomes = engine.score_batch(&inputs).unwrap();
        let records = build_records(
            &inputs,
            &outcomes,
            42,
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        );
        let a = format_snapshot(&aggregate(&records));
        let b = format_snapshot(&aggregate(&records));
        assert_eq!(a, b);
    }
}
