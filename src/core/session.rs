// src/core/session.rs

use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use crate::error::AppError;
use crate::models::attempt::QuizAttempt;
use crate::models::question::{PublicQuestion, Question};
use crate::models::user::User;

/// Sentinel for a question slot with no option selected yet.
pub const UNANSWERED: i32 = -1;

/// Result of [`QuizSession::advance`].
#[derive(Debug)]
pub enum Progress {
    /// Moved to the question at this index.
    Moved(usize),
    /// Left the last question: the session is complete and this attempt is
    /// ready to be recorded.
    Completed(QuizAttempt),
}

/// One student's traversal of a question set.
///
/// The session owns a snapshot of the question set taken at start, so bank
/// edits made mid-quiz cannot shift the answer key under the student. All
/// transitions are rejected once the session has completed; a retake needs a
/// fresh session. The completed attempt stays available through
/// [`QuizSession::completed_attempt`] until the caller has durably recorded
/// it and vacates the session.
#[derive(Debug)]
pub struct QuizSession {
    student_id: String,
    student_name: String,
    questions: Vec<Question>,
    index: usize,
    answers: Vec<i32>,
    started_at: Instant,
    completed: Option<QuizAttempt>,
}

impl QuizSession {
    /// Starts a session over the given question set. An empty set is an
    /// unavailable condition, not a startable session.
    pub fn begin(user: &User, questions: Vec<Question>) -> Result<Self, AppError> {
        if questions.is_empty() {
            return Err(AppError::NotFound("No questions available".to_string()));
        }
        let answers = vec![UNANSWERED; questions.len()];
        Ok(Self {
            student_id: user.id.clone(),
            student_name: user.username.clone(),
            questions,
            index: 0,
            answers,
            started_at: Instant::now(),
            completed: None,
        })
    }

    /// Records the chosen option for the question currently in view.
    /// Overwrites any prior choice; does not advance.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), AppError> {
        self.ensure_in_progress()?;
        if option_index >= self.questions[self.index].options.len() {
            return Err(AppError::BadRequest(
                "Selected option is out of range".to_string(),
            ));
        }
        self.answers[self.index] = option_index as i32;
        Ok(())
    }

    /// Moves to the next question, or completes the session when leaving the
    /// last one. The current question must be answered first.
    pub fn advance(&mut self) -> Result<Progress, AppError> {
        self.ensure_in_progress()?;
        if self.answers[self.index] == UNANSWERED {
            return Err(AppError::BadRequest(
                "Answer the current question before moving on".to_string(),
            ));
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            return Ok(Progress::Moved(self.index));
        }

        let attempt = self.finish();
        self.completed = Some(attempt.clone());
        Ok(Progress::Completed(attempt))
    }

    /// Moves back one question. The answer left behind is kept.
    pub fn retreat(&mut self) -> Result<(), AppError> {
        self.ensure_in_progress()?;
        if self.index == 0 {
            return Err(AppError::BadRequest(
                "Already on the first question".to_string(),
            ));
        }
        self.index -= 1;
        Ok(())
    }

    /// Whole seconds since the session started.
    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// The student this session belongs to.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// The frozen attempt, once the session has completed. The snapshot was
    /// scored exactly once at submission; re-reading it never rescores.
    pub fn completed_attempt(&self) -> Option<&QuizAttempt> {
        self.completed.as_ref()
    }

    /// Live state for the presentation layer. The answer key stays hidden.
    pub fn view(&self) -> SessionView {
        SessionView {
            current_index: self.index,
            total_questions: self.questions.len(),
            question: PublicQuestion::from(&self.questions[self.index]),
            answers: self.answers.clone(),
            answered_count: self.answers.iter().filter(|a| **a != UNANSWERED).count(),
            elapsed_seconds: self.elapsed_seconds(),
        }
    }

    fn ensure_in_progress(&self) -> Result<(), AppError> {
        if self.completed.is_some() {
            return Err(AppError::BadRequest(
                "Session already completed".to_string(),
            ));
        }
        Ok(())
    }

    /// Scores the answers and freezes the immutable attempt snapshot.
    /// The score is computed exactly once, here.
    fn finish(&self) -> QuizAttempt {
        let correct = self
            .answers
            .iter()
            .zip(&self.questions)
            .filter(|(answer, question)| **answer == question.correct_answer as i32)
            .count();
        let score = 100.0 * correct as f64 / self.questions.len() as f64;

        QuizAttempt {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: self.student_id.clone(),
            student_name: self.student_name.clone(),
            questions: self.questions.clone(),
            answers: self.answers.clone(),
            score,
            total_questions: self.questions.len(),
            completed_at: Utc::now(),
            time_spent: self.elapsed_seconds(),
        }
    }
}

/// Snapshot of live session state sent to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub current_index: usize,
    pub total_questions: usize,
    pub question: PublicQuestion,
    pub answers: Vec<i32>,
    pub answered_count: usize,
    pub elapsed_seconds: u64,
}
