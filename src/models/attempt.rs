// src/models/attempt.rs

use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// Immutable record of one completed quiz.
///
/// `questions` is a snapshot copy of the set the student saw, so later edits
/// or deletions in the question bank never alter historical attempts.
/// `answers` is parallel to `questions`; `-1` marks a slot that was never
/// answered. `score` is the percentage computed once at submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub questions: Vec<Question>,
    pub answers: Vec<i32>,
    pub score: f64,
    pub total_questions: usize,
    pub completed_at: chrono::DateTime<chrono::Utc>,
    /// Seconds from session start to submission.
    pub time_spent: u64,
}

/// Aggregates across every recorded attempt, for the admin dashboard.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    pub total_attempts: usize,
    pub unique_students: usize,
    pub average_score: f64,
}

/// Aggregates over one student's attempts, for the score history view.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub total_attempts: usize,
    pub best_score: f64,
    pub average_score: f64,
    pub average_time_spent: u64,
}
