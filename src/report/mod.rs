//! Terminal reporting for scoring results and analytics snapshots.

pub mod format;

pub use format::*;
