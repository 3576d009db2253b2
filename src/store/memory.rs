// src/store/memory.rs

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::store::Store;

/// In-memory store backend. Used by the test suite; keeps the same
/// absent-vs-present semantics as the file backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.documents.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, document: &str) -> Result<(), AppError> {
        self.documents
            .lock()
            .await
            .insert(key.to_string(), document.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.documents.lock().await.remove(key);
        Ok(())
    }
}
