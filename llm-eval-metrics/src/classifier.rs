//! Failure taxonomy: ordered rules mapping an output to one diagnostic
//! label. The first rule whose guard holds wins, so the order of the
//! checks below is part of the contract.

use llm_eval_core::{EvaluationThresholds, FailureType};

use crate::calculators::{containment_overlap, extract_verdict, set_overlap};
use crate::normalize::whitespace_token_count;

pub fn classify_qa(reference: &str, output: &str, thresholds: &EvaluationThresholds) -> FailureType {
    let overlap = containment_overlap(reference, output);
    let too_long = thresholds.is_excessively_long(
        whitespace_token_count(output),
        whitespace_token_count(reference),
    );

    if overlap >= thresholds.qa_overlap {
        return if too_long {
            FailureType::OverVerboseCorrect
        } else {
            FailureType::Correct
        };
    }

    let output_lower = output.to_lowercase();
    if thresholds
        .hedging_phrases
        .iter()
        .any(|phrase| output_lower.contains(&phrase.to_lowercase()))
    {
        return FailureType::PartialAnswer;
    }

    if too_long {
        return FailureType::Hallucination;
    }

    // Single-word (or space-free) answers that the reference does not
    // contain. Multi-word wrong answers fall through to overconfident_wrong.
    let trimmed = output_lower.trim();
    if !trimmed.is_empty()
        && trimmed.chars().all(char::is_alphabetic)
        && !reference.to_lowercase().contains(trimmed)
    {
        return FailureType::WrongEntity;
    }

    FailureType::OverconfidentWrong
}

pub fn classify_reasoning(
    reference: &str,
    output: &str,
    _thresholds: &EvaluationThresholds,
) -> FailureType {
    match (extract_verdict(output), extract_verdict(reference)) {
        (Some(out), Some(reference)) if out != reference => FailureType::InvalidLogicalInference,
        (Some(_), Some(_)) => FailureType::Correct,
        _ => FailureType::UnverifiableReasoning,
    }
}

pub fn classify_summarization(
    reference: &str,
    output: &str,
    thresholds: &EvaluationThresholds,
) -> FailureType {
    if set_overlap(reference, output) >= thresholds.summarization_overlap {
        return FailureType::Correct;
    }

    if thresholds.is_excessively_long(
        whitespace_token_count(output),
        whitespace_token_count(reference),
    ) {
        return FailureType::HallucinatedDetail;
    }

    FailureType::MissingKeyInfo
}
