// src/services/manual.rs
use std::path::PathBuf;

use crate::error::AppError;

/// Instruction manual seeded as the first turn of every conversation.
/// Re-read from disk on each start so edits apply without a restart.
#[derive(Debug, Clone)]
pub struct Manual {
    path: PathBuf,
}

impl Manual {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<String, AppError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| AppError::ResourceLoadFailure {
                path: self.path.clone(),
                source,
            })
    }
}
