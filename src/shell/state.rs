// Wires live adapters into the dependency bundle the store runs on.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use time_tracker::adapters::analytics::LogAnalytics;
use time_tracker::adapters::file_system::FileSystemPersistence;
use time_tracker::adapters::system::{SystemClock, UuidIds};
use time_tracker::runtime::store::StoreDeps;

pub fn live_deps() -> Result<StoreDeps> {
    let path = data_file_path()?;
    Ok(StoreDeps {
        clock: Arc::new(SystemClock),
        ids: Arc::new(UuidIds),
        persistence: Arc::new(FileSystemPersistence::new(path)),
        analytics: Arc::new(LogAnalytics),
    })
}

// TIME_TRACKER_FILE overrides the platform data directory.
pub fn data_file_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TIME_TRACKER_FILE") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::data_dir().context("no data directory on this platform")?;
    Ok(base.join("time-tracker").join("entries.json"))
}
