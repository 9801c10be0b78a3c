//! The static model parameter bundle.
//!
//! Loaded once at process start and treated as immutable for the process
//! lifetime; every concurrent scoring request shares it by reference.
//! Validation here covers exactly the *configuration-error* class (stale
//! feature schema, malformed bound table). Weight/vector dimension mismatch
//! is deliberately left to the classifier, which reports it as
//! `ModelUnavailable` so the pipeline can fall back instead of refusing to
//! serve.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicationInput, LoanPurpose, LoanType, ResidenceType};
use crate::error::AppError;
use crate::features::vectorize;

/// Per-feature (min, max) pair observed during training.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBounds {
    pub min: f64,
    pub max: f64,
}

/// Classifier parameters + scaling metadata, as serialized by the trainer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Canonical ordered feature-name list the weights were trained against.
    pub features: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    /// Bound table for the features in `cols_to_scale`.
    #[serde(default)]
    pub scaler: HashMap<String, FeatureBounds>,
    /// Subset of `features` that was min/max scaled during training.
    #[serde(default)]
    pub cols_to_scale: Vec<String>,
    /// Free-form trainer metadata, reported but never used for inference.
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub trained_at: Option<String>,
}

impl ModelArtifact {
    /// Startup validation: surfaces configuration errors before serving.
    ///
    /// Checks (all fatal, exit code 2):
    /// - non-empty feature list
    /// - every declared feature resolvable by the vectorizer
    /// - `cols_to_scale` is a subset of `features`
    /// - every scaled feature has a finite bound entry with `min <= max`
    /// - finite weights and bias
    pub fn validate(&self) -> Result<(), AppError> {
        if self.features.is_empty() {
            return Err(AppError::config("Model artifact declares no features."));
        }

        // Resolvability probe: any unknown name fails here, once, at startup.
        vectorize(&probe_input(), &self.features)?;

        for name in &self.cols_to_scale {
            if !self.features.iter().any(|f| f == name) {
                return Err(AppError::config(format!(
                    "Malformed bound table: cols_to_scale entry '{name}' is not a declared feature."
                )));
            }
            let b = self.scaler.get(name).ok_or_else(|| {
                AppError::config(format!(
                    "Malformed bound table: scaled feature '{name}' has no (min, max) entry."
                ))
            })?;
            if !(b.min.is_finite() && b.max.is_finite() && b.min <= b.max) {
                return Err(AppError::config(format!(
                    "Malformed bound table: feature '{name}' has invalid bounds ({}, {}).",
                    b.min, b.max
                )));
            }
        }

        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(AppError::config(
                "Model artifact contains non-finite weights or bias.",
            ));
        }

        Ok(())
    }
}

/// Neutral well-formed input used only to probe feature resolvability.
fn probe_input() -> ApplicationInput {
    ApplicationInput {
        age: 30,
        income: 1.0,
        loan_amount: 1.0,
        loan_tenure_months: 12,
        avg_dpd_per_delinquency: 0.0,
        delinquency_ratio: 0.0,
        credit_utilization_ratio: 0.0,
        num_open_accounts: 1,
        residence_type: ResidenceType::Owned,
        loan_purpose: LoanPurpose::Personal,
        loan_type: LoanType::Unsecured,
    }
}
