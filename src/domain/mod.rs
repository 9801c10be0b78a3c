//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - applicant input records and their categorical enums
//! - scoring outputs (`ScoringResult`, `Rating`)
//! - persisted application rows (`LoanRecord`, `ApplicationStatus`)

pub mod types;

pub use types::*;
