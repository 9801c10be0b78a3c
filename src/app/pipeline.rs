//! Shared scoring pipeline used by every front-end entry point.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! vectorize -> normalize -> classify (or fall back) -> map -> suggest
//!
//! The CLI handlers can then focus on presentation (printing vs exports).

use rayon::prelude::*;

use crate::domain::{ApplicationInput, ScoringResult};
use crate::error::AppError;
use crate::features::{normalize, vectorize};
use crate::model::{ModelArtifact, predict_default_probability};
use crate::score::{estimate, map_probability};
use crate::suggest::suggest;

/// One scoring request's outcome.
///
/// `used_fallback` is the out-of-band degraded-mode flag: the caller always
/// receives a result, and this tells it whether the result is
/// heuristic-derived rather than model-derived.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOutcome {
    pub result: ScoringResult,
    pub used_fallback: bool,
}

/// The scoring engine: the model artifact (if any) plus the pipeline.
///
/// Constructed once at startup and shared immutably across any number of
/// concurrent scoring calls; all methods take `&self` and hold no interior
/// state, so no locking is needed.
pub struct ScoringEngine {
    artifact: Option<ModelArtifact>,
}

impl ScoringEngine {
    /// Build an engine, validating the artifact's configuration up front.
    ///
    /// `None` means no artifact could be loaded; the engine still serves,
    /// answering every request via the fallback estimator.
    pub fn new(artifact: Option<ModelArtifact>) -> Result<Self, AppError> {
        if let Some(a) = &artifact {
            a.validate()?;
        }
        Ok(Self { artifact })
    }

    pub fn has_model(&self) -> bool {
        self.artifact.is_some()
    }

    /// Score a single application. Always produces a result; classifier
    /// unavailability degrades to the heuristic path instead of failing.
    ///
    /// The only error case is a configuration error (stale artifact schema),
    /// which `new` normally catches at startup.
    pub fn score(&self, input: &ApplicationInput) -> Result<ScoredOutcome, AppError> {
        let Some(artifact) = &self.artifact else {
            return Ok(fallback_outcome(input));
        };

        let vector = vectorize(input, &artifact.features)?;
        let normalized = normalize(
            &vector,
            &artifact.features,
            &artifact.scaler,
            &artifact.cols_to_scale,
        )?;

        match predict_default_probability(&normalized, &artifact.weights, artifact.bias) {
            Ok(probability) => {
                let (credit_score, rating) = map_probability(probability);
                let suggestions = suggest(input, rating);
                Ok(ScoredOutcome {
                    result: ScoringResult {
                        default_probability: probability,
                        credit_score,
                        rating,
                        suggestions,
                    },
                    used_fallback: false,
                })
            }
            Err(_) => Ok(fallback_outcome(input)),
        }
    }

    /// Score a batch in parallel. Order of outcomes matches input order.
    pub fn score_batch(&self, inputs: &[ApplicationInput]) -> Result<Vec<ScoredOutcome>, AppError> {
        inputs.par_iter().map(|input| self.score(input)).collect()
    }
}

fn fallback_outcome(input: &ApplicationInput) -> ScoredOutcome {
    ScoredOutcome {
        result: estimate(input),
        used_fallback: true,
    }
}
