// src/core/ledger.rs

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::AppError;
use crate::models::attempt::{OverallStats, QuizAttempt, StudentStats};
use crate::store::{self, Store};

/// Attempt Ledger: append-only record of completed quizzes plus derived
/// statistics. Attempts are never updated or deleted.
pub struct AttemptLedger {
    store: Arc<dyn Store>,
}

impl AttemptLedger {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Appends one completed attempt to the collection.
    pub async fn record(&self, attempt: &QuizAttempt) -> Result<(), AppError> {
        let mut attempts = self.list_all().await?;
        attempts.push(attempt.clone());
        store::write_document(self.store.as_ref(), store::ATTEMPTS, &attempts).await
    }

    pub async fn list_all(&self) -> Result<Vec<QuizAttempt>, AppError> {
        store::read_collection(self.store.as_ref(), store::ATTEMPTS).await
    }

    /// Attempts by one student, in recording order. Empty for unknown ids.
    pub async fn list_for_student(&self, student_id: &str) -> Result<Vec<QuizAttempt>, AppError> {
        let attempts = self.list_all().await?;
        Ok(attempts
            .into_iter()
            .filter(|a| a.student_id == student_id)
            .collect())
    }

    /// Aggregates across every attempt, for the admin dashboard.
    pub async fn overall_stats(&self) -> Result<OverallStats, AppError> {
        let attempts = self.list_all().await?;
        Ok(OverallStats {
            total_attempts: attempts.len(),
            unique_students: unique_students(&attempts),
            average_score: average_score(&attempts),
        })
    }

    /// Aggregates over one student's attempts.
    pub async fn student_stats(&self, student_id: &str) -> Result<StudentStats, AppError> {
        let attempts = self.list_for_student(student_id).await?;
        Ok(StudentStats {
            total_attempts: attempts.len(),
            best_score: best_score(&attempts),
            average_score: average_score(&attempts),
            average_time_spent: average_time_spent(&attempts),
        })
    }
}

/// Count of distinct students across a set of attempts.
pub fn unique_students(attempts: &[QuizAttempt]) -> usize {
    attempts
        .iter()
        .map(|a| a.student_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Mean score, 0 for an empty input.
pub fn average_score(attempts: &[QuizAttempt]) -> f64 {
    if attempts.is_empty() {
        return 0.0;
    }
    attempts.iter().map(|a| a.score).sum::<f64>() / attempts.len() as f64
}

/// Maximum score, 0 for an empty input.
pub fn best_score(attempts: &[QuizAttempt]) -> f64 {
    attempts.iter().map(|a| a.score).fold(0.0, f64::max)
}

/// Mean time spent in whole seconds, 0 for an empty input.
pub fn average_time_spent(attempts: &[QuizAttempt]) -> u64 {
    if attempts.is_empty() {
        return 0;
    }
    attempts.iter().map(|a| a.time_spent).sum::<u64>() / attempts.len() as u64
}
