//! Trained model artifact and classifier inference.
//!
//! The artifact is produced by an external training procedure and consumed
//! here as a static, read-only parameter bundle. Inference is a pure
//! function of (vector, weights, bias).

pub mod artifact;
pub mod classifier;

pub use artifact::*;
pub use classifier::*;
