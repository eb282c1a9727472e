use llm_eval_core::{EvaluationResult, EvaluationThresholds, FailureType, Record, TaskKind};
use llm_eval_metrics::classifier::*;
use llm_eval_metrics::tasks::{classify, classify_result, evaluate_record};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn thresholds() -> EvaluationThresholds {
    EvaluationThresholds::default()
}

// ===== QA Taxonomy =====

#[rstest]
#[case::correct("Paris", "Paris.", FailureType::Correct)]
#[case::correct_within_ratio("Paris", "It's Paris", FailureType::Correct)]
#[case::over_verbose(
    "Paris",
    "Well, after thinking about it at length, Paris it is",
    FailureType::OverVerboseCorrect
)]
#[case::hedged("Paris", "I am not sure", FailureType::PartialAnswer)]
#[case::hedged_case_insensitive("Paris", "UNKNOWN", FailureType::PartialAnswer)]
#[case::cannot_determine("Paris", "I cannot determine that", FailureType::PartialAnswer)]
#[case::hallucination("Paris", "The capital is clearly Lyon", FailureType::Hallucination)]
#[case::wrong_entity("Paris", "Berlin", FailureType::WrongEntity)]
#[case::wrong_entity_padded("Paris", "  Berlin ", FailureType::WrongEntity)]
#[case::multi_word("Paris", "New York", FailureType::OverconfidentWrong)]
#[case::numeric("1776", "1812", FailureType::OverconfidentWrong)]
#[case::empty_output("Paris", "", FailureType::OverconfidentWrong)]
fn test_qa_taxonomy(#[case] reference: &str, #[case] output: &str, #[case] expected: FailureType) {
    assert_eq!(classify_qa(reference, output, &thresholds()), expected);
}

#[test]
fn test_qa_evaluator_correct_answer_can_still_read_as_verbose() {
    // Four output tokens against one reference token exceeds the ratio.
    assert_eq!(
        classify_qa("Paris", "The capital is Paris.", &thresholds()),
        FailureType::OverVerboseCorrect
    );
}

#[test]
fn test_qa_hedging_precedes_length() {
    // Long and hedged: rule 3 fires before rule 4
    let output = "It is unknown to me which city that could possibly be";
    assert_eq!(classify_qa("Paris", output, &thresholds()), FailureType::PartialAnswer);
}

#[test]
fn test_qa_wrong_entity_substring_of_reference() {
    // "par" is inside "paris", so rule 5 does not fire
    assert_eq!(classify_qa("Paris", "Par", &thresholds()), FailureType::OverconfidentWrong);
}

#[test]
fn test_qa_custom_hedging_phrases() {
    let t = EvaluationThresholds {
        hedging_phrases: vec!["no idea".to_string()],
        ..Default::default()
    };
    assert_eq!(classify_qa("Paris", "No idea", &t), FailureType::PartialAnswer);
    assert_eq!(classify_qa("Paris", "not sure", &t), FailureType::OverconfidentWrong);
}

#[test]
fn test_huge_verbosity_ratio_never_reads_as_long() {
    let t = EvaluationThresholds {
        verbosity_ratio: usize::MAX,
        ..Default::default()
    };
    let output = "The capital of France has always been Paris";
    assert_eq!(classify_qa("Paris", output, &t), FailureType::Correct);
    assert_eq!(
        classify_summarization("cats sleep", "dogs bark loudly at night", &t),
        FailureType::MissingKeyInfo
    );
}

#[test]
fn test_qa_empty_reference_scores_zero_overlap() {
    assert_eq!(classify_qa("", "Paris", &thresholds()), FailureType::Hallucination);
}

// ===== Reasoning Taxonomy =====

#[rstest]
#[case("Yes", "It depends on context", FailureType::UnverifiableReasoning)]
#[case("It depends", "Yes", FailureType::UnverifiableReasoning)]
#[case("Yes", "No, never.", FailureType::InvalidLogicalInference)]
#[case("No", "no", FailureType::Correct)]
fn test_reasoning_taxonomy(#[case] reference: &str, #[case] output: &str, #[case] expected: FailureType) {
    assert_eq!(classify_reasoning(reference, output, &thresholds()), expected);
}

// ===== Summarization Taxonomy =====

#[test]
fn test_summarization_missing_key_info() {
    let reference = "A long text about X and Y and Z";
    assert_eq!(
        classify_summarization(reference, "Something else", &thresholds()),
        FailureType::MissingKeyInfo
    );
}

#[test]
fn test_summarization_hallucinated_detail() {
    let reference = "Cats sleep";
    let output = "Dogs bark loudly at the mail carrier every single morning";
    assert_eq!(
        classify_summarization(reference, output, &thresholds()),
        FailureType::HallucinatedDetail
    );
}

#[test]
fn test_summarization_correct() {
    assert_eq!(
        classify_summarization("cats sleep a lot", "cats sleep", &thresholds()),
        FailureType::Correct
    );
}

// ===== Dispatch and Result Classification =====

#[test]
fn test_classify_dispatches_by_task() {
    let t = thresholds();
    assert_eq!(classify(TaskKind::Qa, "Paris", "Berlin", &t), FailureType::WrongEntity);
    assert_eq!(
        classify(TaskKind::Reasoning, "Yes", "Perhaps", &t),
        FailureType::UnverifiableReasoning
    );
    assert_eq!(
        classify(TaskKind::Summarization, "a b c d", "e", &t),
        FailureType::MissingKeyInfo
    );
}

#[test]
fn test_classify_result_skips_correct_records() {
    let record = Record::new("m", "qa", "1", "", "Paris", "Paris", 0.1);
    let result = evaluate_record(record, &thresholds()).unwrap();
    assert!(result.correct);
    assert_eq!(classify_result(&result, &thresholds()), None);
}

#[test]
fn test_classify_result_labels_incorrect_records() {
    let record = Record::new("m", "reasoning", "1", "", "Yes", "It depends on context", 0.1);
    let result = EvaluationResult::new(record, TaskKind::Reasoning, false);
    assert_eq!(
        classify_result(&result, &thresholds()),
        Some(FailureType::UnverifiableReasoning)
    );
}

#[test]
fn test_containment_and_set_disagree_on_substrings() {
    // Set overlap says wrong, containment overlap sees "cat" inside the word.
    let record = Record::new("m", "qa", "1", "", "cat", "concatenate", 0.1);
    let result = evaluate_record(record, &thresholds()).unwrap();
    assert!(!result.correct);
    assert_eq!(classify_result(&result, &thresholds()), Some(FailureType::Correct));
}
