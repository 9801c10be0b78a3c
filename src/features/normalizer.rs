//! Min/max normalization of the trained feature subset.
//!
//! The artifact carries, for each scaled feature, the (min, max) observed in
//! training. We rescale via `x' = (x - min) / (max - min)` and then clamp to
//! [0, 1]: a credit application with record-breaking income must not crash
//! the pipeline, so out-of-training-range inputs are absorbed, not rejected.
//!
//! Degenerate bounds (`max == min`) map every value for that feature to 0;
//! a defined result, never a division by zero.

use std::collections::HashMap;

use crate::error::AppError;
use crate::model::FeatureBounds;

/// Rescale the features named in `scaled_names` in place-order and pass the
/// rest through unchanged.
///
/// `feature_order` gives the name at each vector index. A scaled name with no
/// entry in `bounds` means the artifact's bound table is malformed, which is
/// fatal at startup rather than a per-request error.
pub fn normalize(
    vector: &[f64],
    feature_order: &[String],
    bounds: &HashMap<String, FeatureBounds>,
    scaled_names: &[String],
) -> Result<Vec<f64>, AppError> {
    let mut out = Vec::with_capacity(vector.len());
    for (name, &x) in feature_order.iter().zip(vector.iter()) {
        if !scaled_names.iter().any(|s| s == name) {
            out.push(x);
            continue;
        }
        let b = bounds.get(name).ok_or_else(|| {
            AppError::config(format!(
                "Malformed bound table: scaled feature '{name}' has no (min, max) entry."
            ))
        })?;
        out.push(rescale(x, b));
    }
    Ok(out)
}

fn rescale(x: f64, b: &FeatureBounds) -> f64 {
    let span = b.max - b.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((x - b.min) / span).clamp(0.0, 1.0)
}
