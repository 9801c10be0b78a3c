//! Feature engineering: raw applicant record -> model-ready vector.
//!
//! - `vectorizer`: ordered numeric vector + one-hot categorical expansion
//! - `normalizer`: min/max rescaling of the trained feature subset

pub mod normalizer;
pub mod vectorizer;

pub use normalizer::*;
pub use vectorizer::*;
