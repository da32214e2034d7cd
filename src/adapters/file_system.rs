// File backed implementation of the persistence port.
//
// Purpose
// - Persist the collection as one JSON document on local disk.
//
// Responsibilities
// - Treat a missing file as a first run, not a failure.
// - Map I/O failures to Backend and serialization failures to Codec.

use crate::core::entry::model::TimeEntry;
use crate::core::ports::{PersistenceError, TrackingPersistence};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileSystemPersistence {
    path: PathBuf,
}

impl FileSystemPersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TrackingPersistence for FileSystemPersistence {
    async fn load(&self) -> Result<Vec<TimeEntry>, PersistenceError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(PersistenceError::Backend(error.to_string())),
        };
        serde_json::from_slice(&bytes).map_err(|error| PersistenceError::Codec(error.to_string()))
    }

    async fn save(&self, entries: &[TimeEntry]) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| PersistenceError::Backend(error.to_string()))?;
        }
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|error| PersistenceError::Codec(error.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|error| PersistenceError::Backend(error.to_string()))
    }
}
