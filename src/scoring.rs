// src/scoring.rs

use std::collections::HashMap;

use chrono::Utc;

use crate::{
    config::VERIFICATION_THRESHOLD,
    grading,
    models::{assessment::AssessmentOutcome, question::Question},
};

/// Scores a full question set against a map of submitted answers.
///
/// Answers are keyed by question id rendered as a string. Results come back
/// in question-set order. The percentage is truncated, not rounded (2 of 3
/// correct scores 66, not 67), to stay consistent with already-stored
/// scores. An empty set is a valid degenerate input and scores 0.
pub fn score(questions: &[Question], answers: &HashMap<String, String>) -> AssessmentOutcome {
    let mut correct = 0;
    let mut results = Vec::with_capacity(questions.len());

    for question in questions {
        let submitted = answers.get(&question.id.to_string()).map(String::as_str);
        let result = grading::grade(question, submitted);
        if result.is_correct {
            correct += 1;
        }
        results.push(result);
    }

    let total = questions.len();
    let score = if total > 0 {
        (correct as i64 * 100) / total as i64
    } else {
        0
    };

    AssessmentOutcome {
        score,
        correct,
        total,
        is_verified: score >= VERIFICATION_THRESHOLD,
        assessed_at: Utc::now(),
        results,
    }
}
