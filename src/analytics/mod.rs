//! Portfolio analytics over stored application records.
//!
//! The aggregator receives an already-materialized record sequence from the
//! storage collaborator and computes a fresh snapshot each call; it never
//! issues queries and never mutates its input. Snapshots are pure functions
//! of the record set at query time, so running concurrently with inserts
//! only costs staleness (a dashboard read, not a ledger).
//!
//! Bucket and category boundaries are shared with the score mapper and the
//! domain enums so dashboard figures stay consistent with individual scoring
//! results.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use crate::domain::{ApplicationStatus, LoanPurpose, LoanRecord, LoanType, Rating};

/// Score histogram edges; each bucket is `[lo, hi)` except the last, which
/// is closed on both ends so a score of 900 is counted.
pub const SCORE_BUCKET_EDGES: [i32; 7] = [300, 400, 500, 600, 700, 800, 900];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RatingCounts {
    pub a_plus: usize,
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl RatingCounts {
    pub fn get(&self, rating: Rating) -> usize {
        match rating {
            Rating::APlus => self.a_plus,
            Rating::A => self.a,
            Rating::B => self.b,
            Rating::C => self.c,
        }
    }

    fn bump(&mut self, rating: Rating) {
        match rating {
            Rating::APlus => self.a_plus += 1,
            Rating::A => self.a += 1,
            Rating::B => self.b += 1,
            Rating::C => self.c += 1,
        }
    }
}

/// One histogram bucket `[lo, hi)` (last bucket inclusive of `hi`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub lo: i32,
    pub hi: i32,
    pub count: usize,
}

/// Average requested loan amount within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub label: &'static str,
    pub count: usize,
    pub average_loan: f64,
}

/// Approved disbursements grouped by decision month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyDisbursement {
    pub year: i32,
    pub month: u32,
    pub count: usize,
    pub amount: f64,
}

/// Point-in-time aggregate over all stored applications. Never persisted;
/// always recomputed from the current record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSnapshot {
    pub total_applications: usize,
    pub status: StatusCounts,
    pub ratings: RatingCounts,
    /// Approved / (approved + rejected); 0 when nothing has been decided.
    pub approval_rate: f64,
    pub total_disbursed: f64,
    pub total_repaid: f64,
    pub outstanding: f64,
    /// Approved loans with a disbursement, split by repayment completion.
    pub active_loans: usize,
    pub closed_loans: usize,
    pub avg_loan_by_purpose: Vec<CategoryAverage>,
    pub avg_loan_by_type: Vec<CategoryAverage>,
    pub score_histogram: Vec<ScoreBucket>,
    pub monthly_disbursed: Vec<MonthlyDisbursement>,
}

/// Compute a snapshot over the given records.
///
/// Single pass; empty input yields all-zero counts and zero averages.
/// Missing optional amounts count as zero in sums and are excluded from
/// average denominators and the active/closed split.
pub fn aggregate(records: &[LoanRecord]) -> AnalyticsSnapshot {
    let mut status = StatusCounts::default();
    let mut ratings = RatingCounts::default();
    let mut total_disbursed = 0.0;
    let mut total_repaid = 0.0;
    let mut active_loans = 0;
    let mut closed_loans = 0;

    let mut purpose_sums = [(0usize, 0.0f64); LoanPurpose::ALL.len()];
    let mut type_sums = [(0usize, 0.0f64); LoanType::ALL.len()];
    let mut histogram = [0usize; SCORE_BUCKET_EDGES.len() - 1];
    let mut monthly: BTreeMap<(i32, u32), (usize, f64)> = BTreeMap::new();

    for record in records {
        match record.status {
            ApplicationStatus::Pending => status.pending += 1,
            ApplicationStatus::Approved => status.approved += 1,
            ApplicationStatus::Rejected => status.rejected += 1,
        }
        ratings.bump(record.result.rating);
        histogram[bucket_index(record.result.credit_score)] += 1;

        let purpose_idx = LoanPurpose::ALL
            .iter()
            .position(|&p| p == record.input.loan_purpose)
            .unwrap_or(LoanPurpose::ALL.len() - 1);
        purpose_sums[purpose_idx].0 += 1;
        purpose_sums[purpose_idx].1 += record.input.loan_amount;

        let type_idx = LoanType::ALL
            .iter()
            .position(|&t| t == record.input.loan_type)
            .unwrap_or(0);
        type_sums[type_idx].0 += 1;
        type_sums[type_idx].1 += record.input.loan_amount;

        if record.status == ApplicationStatus::Approved {
            let repaid = record.repaid_amount.unwrap_or(0.0);
            total_disbursed += record.disbursed_amount.unwrap_or(0.0);
            total_repaid += repaid;

            if let Some(disbursed) = record.disbursed_amount {
                if repaid >= disbursed {
                    closed_loans += 1;
                } else {
                    active_loans += 1;
                }
                if let Some(date) = record.decided_at {
                    let entry = monthly.entry((date.year(), date.month())).or_insert((0, 0.0));
                    entry.0 += 1;
                    entry.1 += disbursed;
                }
            }
        }
    }

    let decided = status.approved + status.rejected;
    let approval_rate = if decided > 0 {
        status.approved as f64 / decided as f64
    } else {
        0.0
    };

    AnalyticsSnapshot {
        total_applications: records.len(),
        status,
        ratings,
        approval_rate,
        total_disbursed,
        total_repaid,
        outstanding: total_disbursed - total_repaid,
        active_loans,
        closed_loans,
        avg_loan_by_purpose: LoanPurpose::ALL
            .iter()
            .zip(purpose_sums.iter())
            .map(|(p, &(count, sum))| CategoryAverage {
                label: p.display_name(),
                count,
                average_loan: average(sum, count),
            })
            .collect(),
        avg_loan_by_type: LoanType::ALL
            .iter()
            .zip(type_sums.iter())
            .map(|(t, &(count, sum))| CategoryAverage {
                label: t.display_name(),
                count,
                average_loan: average(sum, count),
            })
            .collect(),
        score_histogram: SCORE_BUCKET_EDGES
            .windows(2)
            .zip(histogram.iter())
            .map(|(edge, &count)| ScoreBucket {
                lo: edge[0],
                hi: edge[1],
                count,
            })
            .collect(),
        monthly_disbursed: monthly
            .into_iter()
            .map(|((year, month), (count, amount))| MonthlyDisbursement {
                year,
                month,
                count,
                amount,
            })
            .collect(),
    }
}

fn average(sum: f64, count: usize) -> f64 {
    if count > 0 { sum / count as f64 } else { 0.0 }
}

/// Histogram bucket index for a score; the final bucket takes its upper edge.
fn bucket_index(score: i32) -> usize {
    let clamped = score.clamp(SCORE_BUCKET_EDGES[0], SCORE_BUCKET_EDGES[SCORE_BUCKET_EDGES.len() - 1]);
    for (i, edge) in SCORE_BUCKET_EDGES.windows(2).enumerate() {
        if clamped < edge[1] {
            return i;
        }
    }
    SCORE_BUCKET_EDGES.len() - 2
}
