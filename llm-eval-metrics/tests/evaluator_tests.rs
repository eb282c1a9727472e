use llm_eval_core::{CoreError, EvaluationThresholds, Record, TaskKind};
use llm_eval_metrics::calculators::{extract_verdict, Verdict};
use llm_eval_metrics::evaluators::*;
use llm_eval_metrics::tasks::{evaluate, evaluate_record};
use rstest::rstest;

fn thresholds() -> EvaluationThresholds {
    EvaluationThresholds::default()
}

// ===== QA =====

#[test]
fn test_qa_correct_when_reference_is_mentioned() {
    assert!(evaluate_qa("Paris", "The capital is Paris.", &thresholds()));
}

#[rstest]
#[case("Paris", "Berlin", false)]
#[case("George Washington", "Washington", false)] // 1/2 < 0.6
#[case("the United States", "united states", true)] // 2/3 >= 0.6
#[case("Mount Everest", "It is mount everest", true)]
#[case("", "anything", false)]
fn test_qa_threshold(#[case] reference: &str, #[case] output: &str, #[case] expected: bool) {
    assert_eq!(evaluate_qa(reference, output, &thresholds()), expected);
}

#[test]
fn test_qa_threshold_is_configurable() {
    let strict = EvaluationThresholds {
        qa_overlap: 1.0,
        ..Default::default()
    };
    assert!(!evaluate_qa("the United States", "united states", &strict));
}

// ===== Summarization =====

#[rstest]
#[case("cats sleep a lot", "cats sleep", true)] // 2/4 meets the lower bar
#[case("cats sleep a lot every day", "cats sleep", false)]
#[case("A long text about X and Y and Z", "Something else entirely", false)]
fn test_summarization_threshold(#[case] reference: &str, #[case] output: &str, #[case] expected: bool) {
    assert_eq!(evaluate_summarization(reference, output, &thresholds()), expected);
}

// ===== Reasoning =====

#[rstest]
#[case("Yes", "Yes, because 4 is divisible by 2.", true)]
#[case("No", "no.", true)]
#[case("Yes", "No, it is odd.", false)]
#[case("Yes", "It depends on context", false)]
#[case("Maybe", "Yes", false)]
#[case("Yes", "Therefore the answer is yes", false)]
#[case("", "", false)]
fn test_reasoning_verdicts(#[case] reference: &str, #[case] output: &str, #[case] expected: bool) {
    assert_eq!(evaluate_reasoning(reference, output, &thresholds()), expected);
}

#[rstest]
#[case("yes", Some(Verdict::Yes))]
#[case("  YES!", Some(Verdict::Yes))]
#[case("Nope", Some(Verdict::No))]
#[case("nothing follows", Some(Verdict::No))]
#[case("The answer is no", None)]
fn test_extract_verdict_is_a_prefix_test(#[case] text: &str, #[case] expected: Option<Verdict>) {
    assert_eq!(extract_verdict(text), expected);
}

// ===== Dispatch =====

#[test]
fn test_dispatch_matches_direct_predicates() {
    let t = thresholds();
    assert!(evaluate(TaskKind::Qa, "Paris", "Paris", &t));
    assert!(evaluate(TaskKind::Reasoning, "Yes", "yes", &t));
    assert!(!evaluate(TaskKind::Summarization, "a b c d", "e", &t));
}

#[test]
fn test_evaluate_record_marks_correctness() {
    let record = Record::new("m", "qa", "1", "Capital of France?", "Paris", "The capital is Paris.", 0.3);
    let result = evaluate_record(record, &thresholds()).unwrap();
    assert!(result.correct);
    assert_eq!(result.task, TaskKind::Qa);
}

#[test]
fn test_evaluate_record_rejects_unknown_task() {
    let record = Record::new("m", "translation", "1", "", "hola", "hello", 0.3);
    assert!(matches!(evaluate_record(record, &thresholds()), Err(CoreError::Schema(_))));
}
