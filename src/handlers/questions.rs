// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    core::bank::QuestionBank,
    error::AppError,
    models::question::QuestionDraft,
    store::Store,
};

/// Lists all questions in insertion order.
///
/// Requires a login. The answer key is included; this is a single-client
/// app and the admin question manager edits against this list.
pub async fn list_questions(
    State(store): State<Arc<dyn Store>>,
) -> Result<impl IntoResponse, AppError> {
    let questions = QuestionBank::new(store).list().await?;
    Ok(Json(questions))
}

/// Creates a new quiz question.
/// Admin only. 400 on an invalid draft, with nothing written.
pub async fn create_question(
    State(store): State<Arc<dyn Store>>,
    Json(draft): Json<QuestionDraft>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionBank::new(store).create(draft).await?;
    tracing::info!("Created question {}", question.id);
    Ok((StatusCode::CREATED, Json(question)))
}

/// Updates a question by ID, preserving its id and creation time.
/// Admin only.
pub async fn update_question(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
    Json(draft): Json<QuestionDraft>,
) -> Result<impl IntoResponse, AppError> {
    let question = QuestionBank::new(store).update(&id, draft).await?;
    Ok(Json(question))
}

/// Deletes a question by ID. Historical attempts keep their snapshots.
/// Admin only.
pub async fn delete_question(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    QuestionBank::new(store).delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
