// src/handlers/attempts.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, response::IntoResponse};

use crate::{
    core::ledger::AttemptLedger,
    error::AppError,
    models::user::User,
    store::Store,
};

/// All recorded attempts, across every student.
/// Admin only.
pub async fn list_all_attempts(
    State(store): State<Arc<dyn Store>>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = AttemptLedger::new(store).list_all().await?;
    Ok(Json(attempts))
}

/// Aggregate statistics for the admin dashboard. Zeros when nothing has
/// been recorded yet.
pub async fn overall_stats(
    State(store): State<Arc<dyn Store>>,
) -> Result<impl IntoResponse, AppError> {
    let stats = AttemptLedger::new(store).overall_stats().await?;
    Ok(Json(stats))
}

/// The logged-in student's attempts, in recording order.
pub async fn my_attempts(
    State(store): State<Arc<dyn Store>>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let attempts = AttemptLedger::new(store).list_for_student(&user.id).await?;
    Ok(Json(attempts))
}

/// The logged-in student's best/average scores and average time.
pub async fn my_stats(
    State(store): State<Arc<dyn Store>>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let stats = AttemptLedger::new(store).student_stats(&user.id).await?;
    Ok(Json(stats))
}
