// Everything the outside world can ask the collection engine to do.
//
// Purpose
// - One action type to pattern match in the engine and the runtime driver.
//
// Notes
// - Load and save completions come back as actions so they serialize through
//   the same single writer as user input.

use crate::core::entry::model::{Status, TimeEntry};
use crate::core::entry::reduce::EntryAction;
use crate::core::ports::PersistenceError;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateNew {
        description: Option<String>,
        status: Status,
    },
    Remove {
        id: Uuid,
    },
    RemoveAll,
    StartDisplayTimer,
    StopDisplayTimer,
    RefreshAll,
    Entry {
        id: Uuid,
        action: EntryAction,
    },
    Load,
    LoadResult(Result<Vec<TimeEntry>, PersistenceError>),
    Save,
    SaveResult(Result<(), PersistenceError>),
}

impl Action {
    // The common case: a fresh entry with no name, not yet running.
    pub fn create_default() -> Self {
        Action::CreateNew {
            description: None,
            status: Status::Stopped,
        }
    }
}
