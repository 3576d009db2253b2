// src/core/bank.rs

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::error::AppError;
use crate::models::question::{Difficulty, Question, QuestionDraft};
use crate::store::{self, Store};

/// Question Bank: CRUD lifecycle of quiz questions. Every mutation persists
/// the whole collection; insertion order is preserved.
pub struct QuestionBank {
    store: Arc<dyn Store>,
}

impl QuestionBank {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Seeds the starter questions iff the questions collection is absent.
    pub async fn seed_defaults(&self) -> Result<(), AppError> {
        let existing: Option<Vec<Question>> =
            store::read_document(self.store.as_ref(), store::QUESTIONS).await?;
        if existing.is_some() {
            return Ok(());
        }

        let now = Utc::now();
        let defaults = vec![
            Question {
                id: "1".to_string(),
                question: "What is the capital of France?".to_string(),
                options: ["London", "Berlin", "Paris", "Madrid"]
                    .map(String::from)
                    .to_vec(),
                correct_answer: 2,
                category: "Geography".to_string(),
                difficulty: Difficulty::Easy,
                created_at: now,
            },
            Question {
                id: "2".to_string(),
                question: "Which programming language is known for its use in web development?"
                    .to_string(),
                options: ["Python", "JavaScript", "C++", "Java"]
                    .map(String::from)
                    .to_vec(),
                correct_answer: 1,
                category: "Technology".to_string(),
                difficulty: Difficulty::Medium,
                created_at: now,
            },
            Question {
                id: "3".to_string(),
                question: "What is 2 + 2?".to_string(),
                options: ["3", "4", "5", "6"].map(String::from).to_vec(),
                correct_answer: 1,
                category: "Mathematics".to_string(),
                difficulty: Difficulty::Easy,
                created_at: now,
            },
        ];

        tracing::info!("Seeding default questions");
        store::write_document(self.store.as_ref(), store::QUESTIONS, &defaults).await
    }

    /// All questions in insertion order.
    pub async fn list(&self) -> Result<Vec<Question>, AppError> {
        store::read_collection(self.store.as_ref(), store::QUESTIONS).await
    }

    /// Validates the draft and appends a new question with a fresh id and
    /// `created_at = now`. An invalid draft never mutates the collection.
    pub async fn create(&self, draft: QuestionDraft) -> Result<Question, AppError> {
        draft
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let question = Question {
            id: uuid::Uuid::new_v4().to_string(),
            question: draft.question,
            options: draft.options,
            correct_answer: draft.correct_answer,
            category: draft.category,
            difficulty: draft.difficulty,
            created_at: Utc::now(),
        };

        let mut questions = self.list().await?;
        questions.push(question.clone());
        store::write_document(self.store.as_ref(), store::QUESTIONS, &questions).await?;

        Ok(question)
    }

    /// Replaces the draft fields of an existing question, preserving its
    /// `id` and `created_at`. Unknown ids leave the collection untouched.
    pub async fn update(&self, id: &str, draft: QuestionDraft) -> Result<Question, AppError> {
        draft
            .validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut questions = self.list().await?;
        let slot = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| AppError::NotFound("Question not found".to_string()))?;

        slot.question = draft.question;
        slot.options = draft.options;
        slot.correct_answer = draft.correct_answer;
        slot.category = draft.category;
        slot.difficulty = draft.difficulty;
        let updated = slot.clone();

        store::write_document(self.store.as_ref(), store::QUESTIONS, &questions).await?;
        Ok(updated)
    }

    /// Removes one question. Historical attempts keep their own snapshot, so
    /// there is nothing to cascade.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut questions = self.list().await?;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(AppError::NotFound("Question not found".to_string()));
        }
        store::write_document(self.store.as_ref(), store::QUESTIONS, &questions).await
    }
}
