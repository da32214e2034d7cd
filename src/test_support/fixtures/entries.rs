// Shared test fixture for time entries.
//
// The default entry is loaded from the JSON document next to this module so
// the wire shape stays pinned in one place.

use crate::core::entry::model::{Description, Status, TimeEntry};
use std::fs;
use uuid::Uuid;

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string("./src/test_support/fixtures/json/time_entry.json")
            .expect("fixture file missing");
        let inner: TimeEntry = serde_json::from_str(&json_str).expect("fixture file invalid");
        Self { inner }
    }

    pub fn id(mut self, v: Uuid) -> Self {
        self.inner.id = v;
        self
    }

    pub fn named(mut self, text: impl Into<String>) -> Self {
        self.inner.description = Description::Named { text: text.into() };
        self
    }

    pub fn unnamed(mut self) -> Self {
        self.inner.description = Description::Unnamed;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn running_since(mut self, started_at: i64) -> Self {
        self.inner.status = Status::Running;
        self.inner.accumulated_time.started_at = Some(started_at);
        self
    }

    pub fn banked(mut self, seconds: i64) -> Self {
        self.inner.accumulated_time.accumulated_session = seconds;
        self.inner.accumulated_time.total = seconds + self.inner.accumulated_time.current_session;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}
