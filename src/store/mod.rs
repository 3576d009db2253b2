// src/store/mod.rs

pub mod file;
pub mod memory;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Document key for the users collection.
pub const USERS: &str = "quiz_users";
/// Document key for the questions collection.
pub const QUESTIONS: &str = "quiz_questions";
/// Document key for the attempts collection.
pub const ATTEMPTS: &str = "quiz_attempts";
/// Document key for the persisted login pointer.
pub const CURRENT_USER: &str = "quiz_current_user";

/// Whole-document key-value store.
///
/// Each collection is serialized and replaced as a single JSON document; a
/// missing key reads as `None`, never as an error. There are no partial
/// updates and no transactions across keys. Backends: [`MemoryStore`] for
/// tests, [`FileStore`] for a durable data directory.
#[async_trait]
pub trait Store: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn write(&self, key: &str, document: &str) -> Result<(), AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Reads and deserializes one document, preserving absent-vs-present.
pub async fn read_document<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Option<T>, AppError> {
    match store.read(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serializes and replaces one document.
pub async fn write_document<T: Serialize>(
    store: &dyn Store,
    key: &str,
    value: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(value)?;
    store.write(key, &raw).await
}

/// Reads a collection document, defaulting to empty when absent.
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn Store,
    key: &str,
) -> Result<Vec<T>, AppError> {
    Ok(read_document(store, key).await?.unwrap_or_default())
}
