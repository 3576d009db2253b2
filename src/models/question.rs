// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Every question carries exactly this many options.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A quiz item in the questions collection.
///
/// `correct_answer` indexes into `options`; the bank's draft validation
/// guarantees it is in bounds at creation/update time. `created_at` is set
/// once and preserved across updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub category: String,
    pub difficulty: Difficulty,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for sending a question to a student mid-quiz (excludes the answer key).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub category: String,
    pub difficulty: Difficulty,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            question: q.question.clone(),
            options: q.options.clone(),
            category: q.category.clone(),
            difficulty: q.difficulty,
        }
    }
}

/// DTO for creating or updating a question.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    #[validate(length(min = 1, message = "Question text is required."))]
    pub question: String,
    #[validate(custom(function = validate_options))]
    pub options: Vec<String>,
    #[validate(range(max = 3, message = "correctAnswer must index one of the four options."))]
    pub correct_answer: usize,
    #[validate(length(min = 1, message = "Category is required."))]
    pub category: String,
    pub difficulty: Difficulty,
}

fn validate_options(options: &[String]) -> Result<(), ValidationError> {
    if options.len() != OPTION_COUNT {
        return Err(ValidationError::new("exactly_four_options_required"));
    }
    if options.iter().any(|opt| opt.is_empty()) {
        return Err(ValidationError::new("options_cannot_be_blank"));
    }
    Ok(())
}
