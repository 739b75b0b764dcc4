//! File-backed state store
//!
//! The last observed status is a single token in a plain text file.
//! A missing file means no status was saved yet.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::model::StockStatus;
use crate::domain::ports::StateStore;
use crate::error::StateError;

pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load(&self) -> Result<Option<StockStatus>, StateError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    return Ok(None);
                }
                token
                    .parse()
                    .map(Some)
                    .map_err(|e: crate::error::ParseStatusError| StateError::Corrupt(e.0))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateError::Io(e)),
        }
    }

    async fn save(&self, status: StockStatus) -> Result<(), StateError> {
        tokio::fs::write(&self.path, format!("{}\n", status)).await?;
        Ok(())
    }
}
