// src/service.rs

use std::collections::HashMap;

use crate::{
    error::AppError,
    models::{
        assessment::{AssessmentOutcome, AssessmentStarted, Subject},
        question::{PublicQuestion, Question},
    },
    scoring,
    session::{AssessmentSession, SessionStore},
};

/// Orchestrates the two-call assessment flow: `begin` stashes a freshly
/// generated question set and hands the client an answer-stripped view;
/// `submit` consumes the session and grades the answers.
///
/// Question generation and the score writeback are external collaborators;
/// this service only owns the bridge between the two calls.
pub struct AssessmentService<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> AssessmentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stores the question set and returns the public view of it.
    /// The returned questions never include the canonical answer or the
    /// explanation.
    pub async fn begin(&self, subject: Subject, questions: Vec<Question>) -> AssessmentStarted {
        let public: Vec<PublicQuestion> = questions.iter().map(PublicQuestion::from).collect();
        let subject_name = subject.name().to_string();

        let session_id = self
            .store
            .create(AssessmentSession { subject, questions })
            .await;

        AssessmentStarted {
            session_id,
            subject_name,
            questions: public,
        }
    }

    /// Consumes the session and grades the submitted answers.
    ///
    /// The session is taken atomically, so a retry of the same id fails
    /// with `SessionNotFound` rather than re-grading. The subject comes
    /// back alongside the outcome so the caller can write score,
    /// is_verified and assessed_at to the subject's persisted record.
    pub async fn submit(
        &self,
        session_id: &str,
        answers: &HashMap<String, String>,
    ) -> Result<(Subject, AssessmentOutcome), AppError> {
        let session = self.store.take(session_id).await?;
        let outcome = scoring::score(&session.questions, answers);

        tracing::debug!(
            "Assessment for '{}' scored {} ({}/{} correct)",
            session.subject.name(),
            outcome.score,
            outcome.correct,
            outcome.total
        );

        Ok((session.subject, outcome))
    }
}
