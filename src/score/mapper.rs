//! Default probability -> credit score -> rating tier.
//!
//! The linear map is intentionally simple and must be reproduced exactly for
//! score stability across reimplementations:
//!
//! `credit_score = round(300 + (1 - p) * 600)`, clamped to [300, 900]
//!
//! Note the direction: a *lower* default probability yields a *higher* score.
//! Tier boundaries are closed on the lower end and shared with the analytics
//! aggregator so dashboard buckets match individual results.

use crate::domain::Rating;

pub const SCORE_FLOOR: i32 = 300;
pub const SCORE_CEILING: i32 = 900;

/// Width of the score band above the floor.
const SCORE_SPAN: f64 = 600.0;

/// Map a default probability in [0, 1] to (credit score, rating).
pub fn map_probability(probability: f64) -> (i32, Rating) {
    let raw = f64::from(SCORE_FLOOR) + (1.0 - probability) * SCORE_SPAN;
    let score = (raw.round() as i32).clamp(SCORE_FLOOR, SCORE_CEILING);
    (score, rating_for_score(score))
}

/// Rating tier for a credit score (closed lower bounds).
pub fn rating_for_score(score: i32) -> Rating {
    if score >= 750 {
        Rating::APlus
    } else if score >= 650 {
        Rating::A
    } else if score >= 550 {
        Rating::B
    } else {
        Rating::C
    }
}
