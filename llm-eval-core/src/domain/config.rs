use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;

// ===== Evaluation Thresholds =====

pub const DEFAULT_QA_OVERLAP: f64 = 0.6;
pub const DEFAULT_SUMMARIZATION_OVERLAP: f64 = 0.5;
pub const DEFAULT_VERBOSITY_RATIO: usize = 2;
pub const DEFAULT_HEDGING_PHRASES: [&str; 3] = ["unknown", "not sure", "cannot determine"];

/// Decision constants shared by the task evaluators and the failure
/// classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct EvaluationThresholds {
    /// Minimum overlap for a QA answer to count as correct.
    #[validate(range(min = 0.0, max = 1.0))]
    pub qa_overlap: f64,
    /// Minimum set overlap for a summary to count as correct.
    #[validate(range(min = 0.0, max = 1.0))]
    pub summarization_overlap: f64,
    /// An output longer than `verbosity_ratio` times the reference (in
    /// whitespace tokens) is considered excessively long.
    #[validate(range(min = 1))]
    pub verbosity_ratio: usize,
    /// Lowercase phrases that mark a QA answer as hedged.
    #[validate(custom(function = "validate_hedging_phrases"))]
    pub hedging_phrases: Vec<String>,
}

impl Default for EvaluationThresholds {
    fn default() -> Self {
        Self {
            qa_overlap: DEFAULT_QA_OVERLAP,
            summarization_overlap: DEFAULT_SUMMARIZATION_OVERLAP,
            verbosity_ratio: DEFAULT_VERBOSITY_RATIO,
            hedging_phrases: DEFAULT_HEDGING_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EvaluationThresholds {
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn is_excessively_long(&self, output_tokens: usize, reference_tokens: usize) -> bool {
        output_tokens > reference_tokens.saturating_mul(self.verbosity_ratio)
    }
}

/// A blank phrase is a substring of every output.
fn validate_hedging_phrases(phrases: &[String]) -> std::result::Result<(), ValidationError> {
    if phrases.iter().any(|p| p.trim().is_empty()) {
        let mut err = ValidationError::new("hedging_phrases");
        err.message = Some("Hedging phrases must not be blank".into());
        return Err(err);
    }
    Ok(())
}
