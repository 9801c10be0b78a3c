//! Score derivation: probability -> score/rating, plus the rule-based
//! fallback estimator used when the trained classifier is unavailable.

pub mod fallback;
pub mod mapper;

pub use fallback::*;
pub use mapper::*;
