// Follow-up work the engine requests after folding an action.
//
// Purpose
// - Keep the engine pure: it returns these values and the runtime driver
//   executes them.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    // Persist the full collection now.
    Save,
    // Persist after a quiet period; rescheduling replaces the pending delay.
    DebounceSave,
    Load,
    StartDisplayTimer,
    StopDisplayTimer,
    Track(TrackedChange),
}

// A user-visible change worth reporting to the analytics sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedChange {
    pub name: &'static str,
    pub entry_id: Uuid,
}

impl TrackedChange {
    pub fn status_updated(entry_id: Uuid) -> Self {
        Self {
            name: "time_entry_status_updated",
            entry_id,
        }
    }

    pub fn description_updated(entry_id: Uuid) -> Self {
        Self {
            name: "time_entry_description_updated",
            entry_id,
        }
    }

    pub fn removed(entry_id: Uuid) -> Self {
        Self {
            name: "time_entry_removed",
            entry_id,
        }
    }
}
