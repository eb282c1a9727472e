use llm_eval_core::{CoreError, MetricCalculator, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;

use super::{MetricInput, MetricOutput};
use crate::normalize::{normalize, tokens};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverlapMode {
    /// Reference tokens (duplicates counted) found as substrings anywhere in
    /// the normalized output.
    Containment,
    /// Distinct reference tokens that are also distinct output tokens.
    Set,
}

fn degenerate() -> CoreError {
    CoreError::DegenerateInput("reference has no tokens after normalization".to_string())
}

/// Containment overlap, failing on an empty reference.
///
/// This is a substring test against the whole output string, so a short
/// reference token like "a" matches inside unrelated words.
pub fn try_containment_overlap(reference: &str, output: &str) -> Result<f64> {
    let reference = normalize(reference);
    let output = normalize(output);
    let ref_tokens = tokens(&reference);

    if ref_tokens.is_empty() {
        return Err(degenerate());
    }

    let matched = ref_tokens.iter().filter(|t| output.contains(**t)).count();
    Ok(matched as f64 / ref_tokens.len() as f64)
}

/// Set overlap over token sets, failing on an empty reference.
pub fn try_set_overlap(reference: &str, output: &str) -> Result<f64> {
    let reference = normalize(reference);
    let output = normalize(output);
    let ref_set: HashSet<&str> = reference.split_whitespace().collect();

    if ref_set.is_empty() {
        return Err(degenerate());
    }

    let out_set: HashSet<&str> = output.split_whitespace().collect();
    let intersection = ref_set.intersection(&out_set).count();
    Ok(intersection as f64 / ref_set.len() as f64)
}

/// Containment overlap; an empty reference scores 0.0.
pub fn containment_overlap(reference: &str, output: &str) -> f64 {
    try_containment_overlap(reference, output).unwrap_or(0.0)
}

/// Set overlap; an empty reference scores 0.0.
pub fn set_overlap(reference: &str, output: &str) -> f64 {
    try_set_overlap(reference, output).unwrap_or(0.0)
}

/// True when the reference normalizes to nothing, i.e. both overlap
/// metrics would hit the degenerate case.
pub fn is_degenerate_reference(reference: &str) -> bool {
    normalize(reference).is_empty()
}

#[derive(Debug, Clone)]
pub struct OverlapCalculator {
    pub mode: OverlapMode,
}

impl OverlapCalculator {
    pub fn new(mode: OverlapMode) -> Self {
        Self { mode }
    }

    pub fn containment() -> Self {
        Self::new(OverlapMode::Containment)
    }

    pub fn set() -> Self {
        Self::new(OverlapMode::Set)
    }
}

impl Default for OverlapCalculator {
    fn default() -> Self {
        Self::set()
    }
}

impl MetricCalculator for OverlapCalculator {
    type Input = MetricInput;
    type Output = MetricOutput;

    fn calculate(&self, input: Self::Input) -> Result<Self::Output> {
        let score = match self.mode {
            OverlapMode::Containment => try_containment_overlap(&input.reference, &input.output)?,
            OverlapMode::Set => try_set_overlap(&input.reference, &input.output)?,
        };

        Ok(MetricOutput {
            score,
            metadata: json!({
                "metric": "overlap",
                "mode": self.mode,
                "reference_tokens": tokens(&normalize(&input.reference)).len(),
            }),
        })
    }
}
