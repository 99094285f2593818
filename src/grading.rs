// src/grading.rs

use crate::models::{assessment::GradingResult, question::Question};

/// Normalizes an answer for comparison: surrounding whitespace trimmed,
/// lowercased.
fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Grades one submitted answer against a question's canonical answer.
///
/// Comparison is case- and whitespace-insensitive. A missing submission is
/// graded as the empty string, which is only correct when the canonical
/// answer is itself empty. Pure and infallible: malformed questions grade,
/// they do not error.
pub fn grade(question: &Question, submitted: Option<&str>) -> GradingResult {
    let submitted = submitted.unwrap_or("");
    let is_correct = normalize(submitted) == normalize(&question.correct_answer);

    GradingResult {
        id: question.id,
        question: question.question.clone(),
        your_answer: submitted.to_string(),
        correct_answer: question.correct_answer.clone(),
        is_correct,
        explanation: question.explanation.clone(),
    }
}
