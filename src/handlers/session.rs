// src/handlers/session.rs

use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    core::{
        bank::QuestionBank,
        ledger::AttemptLedger,
        session::{Progress, QuizSession},
    },
    error::AppError,
    models::{attempt::QuizAttempt, user::User},
    state::AppState,
};

/// A session can only be driven by the student who started it. A second
/// login overwriting the login pointer does not inherit the quiz in flight.
fn ensure_owner(session: &QuizSession, user: &User) -> Result<(), AppError> {
    if session.student_id() != user.id {
        return Err(AppError::Forbidden(
            "Quiz in progress belongs to another student".to_string(),
        ));
    }
    Ok(())
}

/// Starts a quiz session over the current question set.
///
/// Student only. Snapshots the question set at this instant; an empty bank
/// is 404 and no session is created. Replaces any session already in flight.
pub async fn start(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let questions = QuestionBank::new(state.store.clone()).list().await?;
    let session = QuizSession::begin(&user, questions)?;
    let view = session.view();

    *state.active_session.lock().await = Some(session);
    tracing::info!("Student '{}' started a quiz", user.username);

    Ok((StatusCode::CREATED, Json(view)))
}

/// Live state of the session in progress: current question, chosen answers,
/// elapsed seconds.
pub async fn current(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let guard = state.active_session.lock().await;
    let session = guard
        .as_ref()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
    ensure_owner(session, &user)?;
    Ok(Json(session.view()))
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Index of the chosen option for the question currently in view.
    pub option: usize,
}

/// Records an answer for the current question. Does not advance.
pub async fn answer(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(req): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.active_session.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
    ensure_owner(session, &user)?;
    session.select_answer(req.option)?;
    Ok(Json(session.view()))
}

/// Advances to the next question, or submits the quiz when leaving the last
/// one. Submission scores the attempt, records it in the ledger, and only
/// then vacates the session slot: if the ledger write fails, the completed
/// session stays put and a retry resubmits the same frozen attempt.
pub async fn next(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Response, AppError> {
    let mut guard = state.active_session.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
    ensure_owner(session, &user)?;

    let attempt = match session.completed_attempt() {
        // A prior submission whose ledger write failed; record it as-is.
        Some(attempt) => attempt.clone(),
        None => match session.advance()? {
            Progress::Moved(_) => return Ok(Json(session.view()).into_response()),
            Progress::Completed(attempt) => attempt,
        },
    };

    AttemptLedger::new(state.store.clone()).record(&attempt).await?;
    *guard = None;
    drop(guard);

    tracing::info!(
        "Student '{}' completed a quiz: {:.1}% in {}s",
        attempt.student_name,
        attempt.score,
        attempt.time_spent
    );

    Ok(summary(&attempt).into_response())
}

/// Steps back one question. The answer left behind is kept.
pub async fn previous(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let mut guard = state.active_session.lock().await;
    let session = guard
        .as_mut()
        .ok_or_else(|| AppError::NotFound("No quiz in progress".to_string()))?;
    ensure_owner(session, &user)?;
    session.retreat()?;
    Ok(Json(session.view()))
}

fn summary(attempt: &QuizAttempt) -> Json<serde_json::Value> {
    let correct_count = (attempt.score * attempt.total_questions as f64 / 100.0).round() as usize;
    Json(serde_json::json!({
        "attemptId": attempt.id,
        "score": attempt.score,
        "correctCount": correct_count,
        "totalQuestions": attempt.total_questions,
        "timeSpent": attempt.time_spent,
    }))
}
