// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe abstract capabilities as traits (clock, id generation, persistence,
//   analytics).
//
// Responsibilities
// - Keep the core independent of wall clocks, file systems, and telemetry by
//   coding against traits.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the
//   adapters layer.
//
// Testing guidance
// - Provide in memory implementations for tests and local development.

use crate::core::collection::effects::TrackedChange;
use crate::core::entry::model::TimeEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now(&self) -> i64;
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> i64 {
        (**self).now()
    }
}

pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

impl<T: IdSource + ?Sized> IdSource for Arc<T> {
    fn next_id(&self) -> Uuid {
        (**self).next_id()
    }
}

// Clone and PartialEq so load and save results can travel inside actions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("codec error: {0}")]
    Codec(String),
}

#[async_trait]
pub trait TrackingPersistence: Send + Sync {
    async fn load(&self) -> Result<Vec<TimeEntry>, PersistenceError>;
    async fn save(&self, entries: &[TimeEntry]) -> Result<(), PersistenceError>;
}

// Fire and forget: the engine never waits on analytics and never sees a failure.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn track(&self, change: TrackedChange);
}
