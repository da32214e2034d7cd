// The collection of time entries and its display ordering.
//
// Purpose
// - Keep entries addressable by id while owning an explicit display order.
//
// Boundaries
// - No input or output. Sorting is recomputed from entry fields, never patched.

use crate::core::entry::model::TimeEntry;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    entries: HashMap<Uuid, TimeEntry>,
    order: Vec<Uuid>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    // Duplicate ids keep the first occurrence.
    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        let mut collection = Self::new();
        for entry in entries {
            if collection.contains(entry.id) {
                continue;
            }
            collection.insert(entry);
        }
        collection.sort();
        collection
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&TimeEntry> {
        self.entries.get(&id)
    }

    // Upsert. A new id is appended to the display order; callers re-sort when
    // the ordering keys may have changed.
    pub fn insert(&mut self, entry: TimeEntry) {
        let id = entry.id;
        if self.entries.insert(id, entry).is_none() {
            self.order.push(id);
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Option<TimeEntry> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            self.order.retain(|other| *other != id);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.order.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeEntry> {
        self.order.iter().map(|id| &self.entries[id])
    }

    pub fn snapshot(&self) -> Vec<TimeEntry> {
        self.iter().cloned().collect()
    }

    // Running entries first, then newest created first. The sort is stable, so
    // entries tying on both keys keep their relative order.
    pub fn sort(&mut self) {
        let entries = &self.entries;
        self.order.sort_by(|a, b| {
            let a = &entries[a];
            let b = &entries[b];
            b.is_running()
                .cmp(&a.is_running())
                .then(b.created_at.cmp(&a.created_at))
        });
    }
}
