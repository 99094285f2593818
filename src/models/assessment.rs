// src/models/assessment.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::PublicQuestion;

/// What a question set assesses: a named skill, or an uploaded resume.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Subject {
    Skill {
        skill_id: String,
        skill_name: String,
        /// "technical" or "soft"; steers the external question generator.
        skill_type: String,
    },
    Resume {
        cv_id: Option<String>,
    },
}

impl Subject {
    /// Display name used in responses.
    pub fn name(&self) -> &str {
        match self {
            Subject::Skill { skill_name, .. } => skill_name,
            Subject::Resume { .. } => "resume",
        }
    }
}

/// Per-question grading record, returned to the client for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingResult {
    pub id: i64,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// Aggregate result of grading one question set.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentOutcome {
    /// Integer percentage, 0-100, truncated (2 of 3 correct scores 66).
    pub score: i64,

    pub correct: usize,
    pub total: usize,
    pub is_verified: bool,

    /// The timestamp the caller writes back to the subject's record.
    pub assessed_at: DateTime<Utc>,

    /// One entry per question, in question-set order.
    pub results: Vec<GradingResult>,
}

/// DTO for submitting answers against a previously started assessment.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    /// The session id received when the assessment was started.
    pub session_id: String,

    /// User's answers map.
    /// Key: question id rendered as a string (the shape clients send).
    /// Value: the submitted answer text.
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

/// DTO returned when an assessment is started: the answer-stripped question
/// view plus the opaque session handle for the later submit call.
#[derive(Debug, Serialize)]
pub struct AssessmentStarted {
    pub session_id: String,
    pub subject_name: String,
    pub questions: Vec<PublicQuestion>,
}
