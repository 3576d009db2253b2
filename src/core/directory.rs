// src/core/directory.rs

use std::sync::Arc;

use crate::error::AppError;
use crate::models::user::{Role, User};
use crate::store::{self, Store};

/// Account Directory: identity records, credential checks, and the persisted
/// login pointer.
pub struct AccountDirectory {
    store: Arc<dyn Store>,
}

impl AccountDirectory {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Seeds the two default accounts iff the users collection is absent.
    /// Never overwrites an existing collection.
    pub async fn initialize_defaults(&self) -> Result<(), AppError> {
        let existing: Option<Vec<User>> =
            store::read_document(self.store.as_ref(), store::USERS).await?;
        if existing.is_some() {
            return Ok(());
        }

        let defaults = vec![
            User {
                id: "1".to_string(),
                username: "admin".to_string(),
                password: "admin123".to_string(),
                role: Role::Admin,
            },
            User {
                id: "2".to_string(),
                username: "student".to_string(),
                password: "student123".to_string(),
                role: Role::Student,
            },
        ];

        tracing::info!("Seeding default accounts");
        store::write_document(self.store.as_ref(), store::USERS, &defaults).await
    }

    /// Linear scan for an exact, case-sensitive match on both fields.
    /// Returns the first match, or `None` for unknown credentials.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let users: Vec<User> = store::read_collection(self.store.as_ref(), store::USERS).await?;
        Ok(users
            .into_iter()
            .find(|u| u.username == username && u.password == password))
    }

    /// The persisted login pointer, if any. No expiry.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        store::read_document(self.store.as_ref(), store::CURRENT_USER).await
    }

    /// Overwrites any prior login pointer.
    pub async fn start_session(&self, user: &User) -> Result<(), AppError> {
        store::write_document(self.store.as_ref(), store::CURRENT_USER, user).await
    }

    /// Clears the login pointer. Idempotent.
    pub async fn end_session(&self) -> Result<(), AppError> {
        self.store.delete(store::CURRENT_USER).await
    }
}
