// src/handlers/auth.rs

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    core::directory::AccountDirectory,
    error::AppError,
    models::user::{LoginRequest, PublicUser, User},
    state::AppState,
};

/// Authenticates a user and starts the persisted login session.
///
/// Credential check is an exact match against the users collection; an
/// unknown pair is 401, never a fault. A successful login overwrites any
/// prior session pointer.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let directory = AccountDirectory::new(state.store.clone());

    let user = directory
        .authenticate(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| AppError::AuthError("Invalid username or password".to_string()))?;

    directory.start_session(&user).await?;
    tracing::info!("User '{}' logged in", user.username);

    Ok(Json(PublicUser::from(&user)))
}

/// Ends the login session. Idempotent.
pub async fn logout(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    AccountDirectory::new(state.store.clone()).end_session().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Returns the currently logged-in user.
pub async fn me(Extension(user): Extension<User>) -> Json<PublicUser> {
    Json(PublicUser::from(&user))
}
