// Analytics sinks. The engine only ever emits; nothing here can fail upstream.

use crate::core::collection::effects::TrackedChange;
use crate::core::ports::AnalyticsSink;
use async_trait::async_trait;
use tracing::info;

// Writes tracked changes to the log stream.
pub struct LogAnalytics;

#[async_trait]
impl AnalyticsSink for LogAnalytics {
    async fn track(&self, change: TrackedChange) {
        info!(event = change.name, entry_id = %change.entry_id, "tracked change");
    }
}

pub struct NoAnalytics;

#[async_trait]
impl AnalyticsSink for NoAnalytics {
    async fn track(&self, _change: TrackedChange) {}
}
