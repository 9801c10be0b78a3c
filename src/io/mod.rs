//! Input/output helpers.
//!
//! - model artifact JSON loading (`artifact`)
//! - stored-records JSON read/write (`records`)
//! - per-application CSV exports (`export`)

pub mod artifact;
pub mod export;
pub mod records;

pub use artifact::*;
pub use export::*;
pub use records::*;
