//! Logistic classifier inference.
//!
//! `p = sigmoid(w . x + b)` over the normalized feature vector. The function
//! is deterministic and pure; the only failure mode is `ModelUnavailable`,
//! which the pipeline treats as "switch to the rule-based estimator", never
//! as a request-level error.

use nalgebra::DVector;

/// The trained classifier cannot produce a probability for this process.
///
/// Recoverable per-process (until an artifact reload); the caller always
/// branches into the fallback estimator on this variant.
#[derive(Clone, PartialEq, Eq)]
pub struct ModelUnavailable {
    reason: String,
}

impl ModelUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ModelUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "model unavailable: {}", self.reason)
    }
}

impl std::fmt::Debug for ModelUnavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelUnavailable")
            .field("reason", &self.reason)
            .finish()
    }
}

impl std::error::Error for ModelUnavailable {}

/// Predict the default probability for a normalized feature vector.
pub fn predict_default_probability(
    vector: &[f64],
    weights: &[f64],
    bias: f64,
) -> Result<f64, ModelUnavailable> {
    if weights.is_empty() {
        return Err(ModelUnavailable::new("no trained weights loaded"));
    }
    if weights.len() != vector.len() {
        return Err(ModelUnavailable::new(format!(
            "weight dimension {} does not match feature vector length {}",
            weights.len(),
            vector.len()
        )));
    }

    let x = DVector::from_column_slice(vector);
    let w = DVector::from_column_slice(weights);
    let z = w.dot(&x) + bias;
    if !z.is_finite() {
        return Err(ModelUnavailable::new("non-finite linear score"));
    }

    Ok(sigmoid(z))
}

/// Logistic link function, `1 / (1 + e^(-z))`.
fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_linear_score_is_even_odds() {
        let p = predict_default_probability(&[1.0, 2.0], &[0.0, 0.0], 0.0).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn probability_stays_in_unit_interval_for_extreme_scores() {
        let p_hi = predict_default_probability(&[1.0], &[1_000.0], 0.0).unwrap();
        let p_lo = predict_default_probability(&[1.0], &[-1_000.0], 0.0).unwrap();
        assert!(p_hi > 0.0 && p_hi <= 1.0);
        assert!(p_lo >= 0.0 && p_lo < 1.0);
    }

    #[test]
    fn higher_linear_score_means_higher_probability() {
        let p1 = predict_default_probability(&[0.2], &[1.0], 0.0).unwrap();
        let p2 = predict_default_probability(&[0.8], &[1.0], 0.0).unwrap();
        assert!(p2 > p1);
    }

    #[test]
    fn bias_only_model_reproduces_target_probability() {
        // With zero weights, p = sigmoid(bias); pick bias for p = 0.15.
        let bias = (0.15_f64 / 0.85).ln();
        let p = predict_default_probability(&[0.0; 13], &[0.0; 13], bias).unwrap();
        assert!((p - 0.15).abs() < 1e-12);
    }

    #[test]
    fn dimension_mismatch_is_unavailable_not_a_panic() {
        let err = predict_default_probability(&[1.0, 2.0, 3.0], &[1.0, 2.0], 0.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("dimension"), "unexpected message: {msg}");
    }

    #[test]
    fn empty_weights_are_unavailable() {
        assert!(predict_default_probability(&[], &[], 0.0).is_err());
    }
}
