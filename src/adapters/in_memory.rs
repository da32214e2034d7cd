// In memory implementations of the persistence and analytics ports.
//
// Purpose
// - Support store tests and local development without touching the file system.
//
// Responsibilities
// - Record every save so tests can assert on counts and on the last snapshot.
// - Fail on demand through an offline toggle.

use crate::core::collection::effects::TrackedChange;
use crate::core::entry::model::TimeEntry;
use crate::core::ports::{AnalyticsSink, PersistenceError, TrackingPersistence};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryPersistence {
    seeded: Mutex<Vec<TimeEntry>>,
    saves: Mutex<Vec<Vec<TimeEntry>>>,
    offline: bool,
}

impl InMemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    // Seeds what the next load returns.
    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self {
            seeded: Mutex::new(entries),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn save_count(&self) -> usize {
        self.saves.lock().await.len()
    }

    pub async fn last_saved(&self) -> Option<Vec<TimeEntry>> {
        self.saves.lock().await.last().cloned()
    }
}

#[async_trait]
impl TrackingPersistence for InMemoryPersistence {
    async fn load(&self) -> Result<Vec<TimeEntry>, PersistenceError> {
        if self.offline {
            return Err(PersistenceError::Backend("Persistence offline".into()));
        }
        Ok(self.seeded.lock().await.clone())
    }

    async fn save(&self, entries: &[TimeEntry]) -> Result<(), PersistenceError> {
        if self.offline {
            return Err(PersistenceError::Backend("Persistence offline".into()));
        }
        self.saves.lock().await.push(entries.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingAnalytics {
    changes: Mutex<Vec<TrackedChange>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn changes(&self) -> Vec<TrackedChange> {
        self.changes.lock().await.clone()
    }
}

#[async_trait]
impl AnalyticsSink for RecordingAnalytics {
    async fn track(&self, change: TrackedChange) {
        self.changes.lock().await.push(change);
    }
}
