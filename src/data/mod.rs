//! Synthetic data generation for local runs and dashboard demos.

pub mod sample;

pub use sample::*;
