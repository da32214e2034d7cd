// The collection engine: fold an action into the collection and describe the
// follow-up work as effects.
//
// Purpose
// - Own every collection level policy: creation, removal, ordering, the
//   per-action save policy, and degradation on load failure.
//
// Boundaries
// - No input or output. Time and ids come from injected generators; the
//   runtime driver executes the returned effects.

use crate::core::collection::actions::Action;
use crate::core::collection::effects::{Effect, TrackedChange};
use crate::core::collection::state::Collection;
use crate::core::entry::model::{Description, TimeEntry};
use crate::core::entry::reduce::{self, EntryAction};
use crate::core::ports::{Clock, IdSource, PersistenceError};
use uuid::Uuid;

pub struct CollectionEngine<TClock, TIds>
where
    TClock: Clock,
    TIds: IdSource,
{
    clock: TClock,
    ids: TIds,
}

impl<TClock, TIds> CollectionEngine<TClock, TIds>
where
    TClock: Clock,
    TIds: IdSource,
{
    pub fn new(clock: TClock, ids: TIds) -> Self {
        Self { clock, ids }
    }

    pub fn reduce(&self, state: &mut Collection, action: Action) -> Vec<Effect> {
        match action {
            Action::CreateNew {
                description,
                status,
            } => {
                let now = self.clock.now();
                let entry = TimeEntry::new(
                    self.ids.next_id(),
                    Description::from_opt(description),
                    status,
                    now,
                );
                state.insert(entry);
                state.sort();
                vec![Effect::Save]
            }
            Action::Remove { id } => remove(state, id),
            Action::RemoveAll => {
                state.clear();
                vec![Effect::Save]
            }
            Action::StartDisplayTimer => vec![Effect::StartDisplayTimer],
            Action::StopDisplayTimer => vec![Effect::StopDisplayTimer],
            Action::RefreshAll => {
                self.refresh_running(state);
                Vec::new()
            }
            Action::Entry { id, action } => self.dispatch(state, id, action),
            Action::Load => vec![Effect::Load],
            Action::LoadResult(result) => {
                self.apply_loaded(state, result);
                Vec::new()
            }
            Action::Save => vec![Effect::Save],
            Action::SaveResult(_) => Vec::new(),
        }
    }

    // Entry scoped actions. An id that no longer resolves is a stale reference
    // from the presentation layer and folds to nothing.
    fn dispatch(&self, state: &mut Collection, id: Uuid, action: EntryAction) -> Vec<Effect> {
        if action == EntryAction::Remove {
            return remove(state, id);
        }
        let Some(before) = state.get(id) else {
            return Vec::new();
        };
        let before = before.clone();
        let after = reduce::reduce(before.clone(), &action, self.clock.now());
        let changed = after != before;
        state.insert(after);

        match action {
            EntryAction::ToggleStatus | EntryAction::SetStatus(_) => {
                state.sort();
                let mut effects = vec![Effect::Save];
                if changed {
                    effects.push(Effect::Track(TrackedChange::status_updated(id)));
                }
                effects
            }
            EntryAction::SetDescription(_) => {
                let mut effects = vec![Effect::DebounceSave];
                if changed {
                    effects.push(Effect::Track(TrackedChange::description_updated(id)));
                }
                effects
            }
            _ => Vec::new(),
        }
    }

    fn refresh_running(&self, state: &mut Collection) {
        let now = self.clock.now();
        for id in state.ids() {
            let Some(entry) = state.get(id) else { continue };
            if !entry.is_running() {
                continue;
            }
            let refreshed = reduce::reduce(entry.clone(), &EntryAction::RefreshElapsed, now);
            state.insert(refreshed);
        }
    }

    // A failed load degrades to an empty collection; the driver logs the error.
    // Loaded entries get one refresh pass so running entries display a correct
    // elapsed value before the first timer tick.
    fn apply_loaded(
        &self,
        state: &mut Collection,
        result: Result<Vec<TimeEntry>, PersistenceError>,
    ) {
        let entries = result.unwrap_or_default();
        *state = Collection::with_entries(entries);
        self.refresh_running(state);
    }
}

fn remove(state: &mut Collection, id: Uuid) -> Vec<Effect> {
    match state.remove(id) {
        Some(_) => vec![Effect::Save, Effect::Track(TrackedChange::removed(id))],
        None => Vec::new(),
    }
}
