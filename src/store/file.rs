// src/store/file.rs

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::error::AppError;
use crate::store::Store;

/// Durable store backend: one JSON file per document key under a data
/// directory. Writes replace the whole file, matching the store contract's
/// whole-document semantics.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Opens (and creates if needed) the data directory.
    pub async fn open(base_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl Store for FileStore {
    async fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.document_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, document: &str) -> Result<(), AppError> {
        fs::write(self.document_path(key), document).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        match fs::remove_file(self.document_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
