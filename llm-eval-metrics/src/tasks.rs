//! Task-keyed dispatch table of `{evaluate, classify}` pairs.

use llm_eval_core::{
    EvaluationResult, EvaluationThresholds, FailureType, Record, Result, TaskKind,
};

use crate::classifier::{classify_qa, classify_reasoning, classify_summarization};
use crate::evaluators::{evaluate_qa, evaluate_reasoning, evaluate_summarization};

/// `(reference, output, thresholds) -> correct`
pub type EvaluateFn = fn(&str, &str, &EvaluationThresholds) -> bool;

/// `(reference, output, thresholds) -> label`
pub type ClassifyFn = fn(&str, &str, &EvaluationThresholds) -> FailureType;

#[derive(Clone, Copy)]
pub struct TaskHandlers {
    pub evaluate: EvaluateFn,
    pub classify: ClassifyFn,
}

static QA: TaskHandlers = TaskHandlers {
    evaluate: evaluate_qa,
    classify: classify_qa,
};

static REASONING: TaskHandlers = TaskHandlers {
    evaluate: evaluate_reasoning,
    classify: classify_reasoning,
};

static SUMMARIZATION: TaskHandlers = TaskHandlers {
    evaluate: evaluate_summarization,
    classify: classify_summarization,
};

pub fn handlers(task: TaskKind) -> &'static TaskHandlers {
    match task {
        TaskKind::Qa => &QA,
        TaskKind::Reasoning => &REASONING,
        TaskKind::Summarization => &SUMMARIZATION,
    }
}

pub fn evaluate(
    task: TaskKind,
    reference: &str,
    output: &str,
    thresholds: &EvaluationThresholds,
) -> bool {
    (handlers(task).evaluate)(reference, output, thresholds)
}

pub fn classify(
    task: TaskKind,
    reference: &str,
    output: &str,
    thresholds: &EvaluationThresholds,
) -> FailureType {
    (handlers(task).classify)(reference, output, thresholds)
}

/// Schema-check a record and evaluate it with its task's predicate.
pub fn evaluate_record(record: Record, thresholds: &EvaluationThresholds) -> Result<EvaluationResult> {
    let task = record.check_schema()?;
    let correct = evaluate(task, &record.reference, &record.output, thresholds);
    Ok(EvaluationResult::new(record, task, correct))
}

/// Label an evaluation result. Correct results are not classified.
pub fn classify_result(
    result: &EvaluationResult,
    thresholds: &EvaluationThresholds,
) -> Option<FailureType> {
    if result.correct {
        return None;
    }
    Some(classify(
        result.task,
        &result.record.reference,
        &result.record.output,
        thresholds,
    ))
}
