// Pure state transitions for a single time entry.
//
// Purpose
// - Combine the prior entry with an action to produce the next entry.
//
// Boundaries
// - No input or output. No side effects. Time arrives as an argument.
//
// Testing guidance
// - Given an entry and an action, assert the expected fields on the result.
// - Re-applying a no-op action must leave the entry untouched, including `updated_at`.

use crate::core::entry::model::{Description, Status, TimeEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    ToggleStatus,
    SetStatus(Status),
    SetDescription(Option<String>),
    RefreshElapsed,
    Remove,
}

pub fn reduce(entry: TimeEntry, action: &EntryAction, now: i64) -> TimeEntry {
    match action {
        EntryAction::ToggleStatus => {
            let next = entry.status.toggled();
            set_status(entry, next, now)
        }
        EntryAction::SetStatus(next) => set_status(entry, *next, now),
        EntryAction::SetDescription(text) => {
            set_description(entry, Description::from_opt(text.clone()), now)
        }
        EntryAction::RefreshElapsed => refresh_elapsed(entry, now),
        // Removal is a collection concern; the entry itself does not change.
        EntryAction::Remove => entry,
    }
}

// Seconds elapsed in the open session. Guards against a clock that moved
// backwards (or not at all) by falling back to the last known value.
pub fn compute_elapsed(entry: &TimeEntry, now: i64) -> i64 {
    match (entry.status, entry.accumulated_time.started_at) {
        (Status::Running, Some(started_at)) if started_at < now => now - started_at,
        _ => entry.accumulated_time.current_session,
    }
}

fn set_status(mut entry: TimeEntry, next: Status, now: i64) -> TimeEntry {
    if entry.status == next {
        return entry;
    }
    match next {
        Status::Running => {
            entry.accumulated_time.total = entry.accumulated_time.accumulated_session;
            entry.accumulated_time.current_session = 0;
            entry.accumulated_time.started_at = Some(now);
        }
        Status::Stopped => {
            let elapsed = compute_elapsed(&entry, now);
            entry.accumulated_time.accumulated_session += elapsed;
            entry.accumulated_time.total = entry.accumulated_time.accumulated_session;
            entry.accumulated_time.current_session = 0;
            entry.accumulated_time.started_at = None;
        }
    }
    entry.status = next;
    entry.updated_at = now;
    entry
}

fn set_description(mut entry: TimeEntry, next: Description, now: i64) -> TimeEntry {
    if entry.description == next {
        return entry;
    }
    entry.description = next;
    entry.updated_at = now;
    entry
}

fn refresh_elapsed(mut entry: TimeEntry, now: i64) -> TimeEntry {
    entry.accumulated_time.current_session = compute_elapsed(&entry, now);
    entry.accumulated_time.total =
        entry.accumulated_time.accumulated_session + entry.accumulated_time.current_session;
    entry
}

#[cfg(test)]
mod time_entry_reduce_tests {
    use super::*;
    use crate::core::entry::model::AccumulatedTime;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    const T0: i64 = 1_700_000_000;

    #[fixture]
    fn stopped_entry() -> TimeEntry {
        TimeEntry::new(Uuid::from_u128(1), Description::Unnamed, Status::Stopped, T0)
    }

    #[rstest]
    fn it_should_start_a_session_and_stamp_the_start_time(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0 + 5);

        assert_eq!(entry.status, Status::Running);
        assert_eq!(entry.accumulated_time.started_at, Some(T0 + 5));
        assert_eq!(entry.accumulated_time.current_session, 0);
        assert_eq!(entry.accumulated_time.total, 0);
        assert_eq!(entry.updated_at, T0 + 5);
    }

    #[rstest]
    fn it_should_report_elapsed_seconds_while_running(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(entry, &EntryAction::RefreshElapsed, T0 + 42);

        assert_eq!(entry.accumulated_time.current_session, 42);
        assert_eq!(entry.accumulated_time.total, 42);
        assert_eq!(
            entry.updated_at, T0,
            "a display refresh is not a user mutation"
        );
    }

    #[rstest]
    fn it_should_bank_the_session_when_stopped(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(entry, &EntryAction::SetStatus(Status::Stopped), T0 + 90);

        assert_eq!(entry.status, Status::Stopped);
        assert_eq!(entry.accumulated_time.total, 90);
        assert_eq!(entry.accumulated_time.accumulated_session, 90);
        assert_eq!(entry.accumulated_time.current_session, 0);
        assert_eq!(entry.accumulated_time.started_at, None);
        assert_eq!(entry.updated_at, T0 + 90);
    }

    #[rstest]
    fn it_should_accumulate_across_stop_and_resume(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(entry, &EntryAction::SetStatus(Status::Stopped), T0 + 60);
        let entry = reduce(entry, &EntryAction::SetStatus(Status::Running), T0 + 100);

        assert_eq!(entry.accumulated_time.total, 60);
        assert_eq!(entry.accumulated_time.current_session, 0);

        let entry = reduce(entry, &EntryAction::RefreshElapsed, T0 + 130);
        assert_eq!(entry.accumulated_time.total, 90);

        let entry = reduce(entry, &EntryAction::SetStatus(Status::Stopped), T0 + 160);
        assert_eq!(entry.accumulated_time.total, 120);
        assert_eq!(entry.accumulated_time.accumulated_session, 120);
    }

    #[rstest]
    fn it_should_toggle_between_running_and_stopped(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::ToggleStatus, T0 + 1);
        assert_eq!(entry.status, Status::Running);

        let entry = reduce(entry, &EntryAction::ToggleStatus, T0 + 2);
        assert_eq!(entry.status, Status::Stopped);
    }

    #[rstest]
    fn it_should_ignore_a_status_transition_to_the_current_status(stopped_entry: TimeEntry) {
        let before = stopped_entry.clone();
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Stopped), T0 + 30);

        assert_eq!(entry, before);
    }

    #[rstest]
    fn it_should_not_count_time_when_the_clock_moved_backwards(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(entry, &EntryAction::RefreshElapsed, T0 + 10);
        assert_eq!(entry.accumulated_time.current_session, 10);

        let entry = reduce(entry, &EntryAction::RefreshElapsed, T0 - 500);
        assert_eq!(
            entry.accumulated_time.current_session, 10,
            "a backwards clock must not rewind the session"
        );
        assert_eq!(entry.accumulated_time.total, 10);
    }

    #[rstest]
    fn it_should_keep_the_session_when_stopping_under_a_backwards_clock(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(entry, &EntryAction::RefreshElapsed, T0 + 10);
        let entry = reduce(entry, &EntryAction::SetStatus(Status::Stopped), T0 - 500);

        assert_eq!(entry.accumulated_time.total, 10);
        assert_eq!(entry.accumulated_time.started_at, None);
    }

    #[rstest]
    fn it_should_rename_an_entry_and_bump_updated_at(stopped_entry: TimeEntry) {
        let entry = reduce(
            stopped_entry,
            &EntryAction::SetDescription(Some("Deep work".to_string())),
            T0 + 3,
        );

        assert_eq!(
            entry.description,
            Description::Named {
                text: "Deep work".to_string()
            }
        );
        assert_eq!(entry.updated_at, T0 + 3);
    }

    #[rstest]
    #[case(EntryAction::SetDescription(None))]
    #[case(EntryAction::SetDescription(Some(String::new())))]
    fn it_should_treat_an_empty_rename_of_an_unnamed_entry_as_a_no_op(
        stopped_entry: TimeEntry,
        #[case] action: EntryAction,
    ) {
        let before = stopped_entry.clone();
        let entry = reduce(stopped_entry, &action, T0 + 3);

        assert_eq!(entry, before);
    }

    #[rstest]
    fn it_should_not_touch_accounting_on_a_rename(stopped_entry: TimeEntry) {
        let entry = reduce(stopped_entry, &EntryAction::SetStatus(Status::Running), T0);
        let entry = reduce(
            entry,
            &EntryAction::SetDescription(Some("Renamed".to_string())),
            T0 + 8,
        );

        assert_eq!(entry.status, Status::Running);
        assert_eq!(entry.accumulated_time.started_at, Some(T0));
    }

    #[rstest]
    fn it_should_leave_the_entry_alone_on_remove(stopped_entry: TimeEntry) {
        let before = stopped_entry.clone();
        let entry = reduce(stopped_entry, &EntryAction::Remove, T0 + 99);

        assert_eq!(entry, before);
    }

    #[rstest]
    fn it_should_return_the_current_session_when_not_running() {
        let entry = TimeEntry {
            id: Uuid::from_u128(2),
            description: Description::Unnamed,
            status: Status::Stopped,
            accumulated_time: AccumulatedTime {
                total: 55,
                accumulated_session: 55,
                current_session: 0,
                started_at: None,
            },
            created_at: T0,
            updated_at: T0,
        };

        assert_eq!(compute_elapsed(&entry, T0 + 1000), 0);
    }
}
