// src/models/question.rs

use serde::{Deserialize, Serialize};

/// One generated assessment question.
///
/// Produced by the external question generator; immutable once generated.
/// Absent optional fields deserialize to empty values so a malformed
/// question still grades instead of failing the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within its question set.
    pub id: i64,

    /// Question type: "multiple_choice" or "true_false".
    #[serde(rename = "type")]
    pub question_type: String,

    /// The prompt text.
    #[serde(default)]
    pub question: String,

    /// Options for multiple-choice questions; absent for true/false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Canonical answer the submission is compared against.
    #[serde(default)]
    pub correct_answer: String,

    /// Shown to the candidate after grading.
    #[serde(default)]
    pub explanation: String,
}

/// DTO for sending a question to the client (excludes answer and explanation).
#[derive(Debug, Clone, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: String,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question_type: q.question_type.clone(),
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}
