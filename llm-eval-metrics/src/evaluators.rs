//! Per-task correctness predicates.
//!
//! Every predicate takes `(reference, output)` and is total: malformed or
//! empty text evaluates to `false`, never to an error.

use llm_eval_core::EvaluationThresholds;

use crate::calculators::{extract_verdict, set_overlap};

/// QA answers must cover enough of the reference's distinct tokens.
pub fn evaluate_qa(reference: &str, output: &str, thresholds: &EvaluationThresholds) -> bool {
    set_overlap(reference, output) >= thresholds.qa_overlap
}

/// Same measure as QA with a lower bar, since summaries paraphrase more.
pub fn evaluate_summarization(
    reference: &str,
    output: &str,
    thresholds: &EvaluationThresholds,
) -> bool {
    set_overlap(reference, output) >= thresholds.summarization_overlap
}

/// Both sides must open with the same yes/no verdict.
pub fn evaluate_reasoning(reference: &str, output: &str, _thresholds: &EvaluationThresholds) -> bool {
    match (extract_verdict(output), extract_verdict(reference)) {
        (Some(out), Some(reference)) => out == reference,
        _ => false,
    }
}
