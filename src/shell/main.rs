// Composition root for the time tracker.
//
// Responsibilities
// - Install the tracing subscriber.
// - Wire live adapters into the store and spawn it.
// - Drive a minimal line oriented loop; rendering stays out of the core.

mod state;

use anyhow::Result;
use time_tracker::core::collection::actions::Action;
use time_tracker::core::entry::model::{Status, TimeEntry};
use time_tracker::core::entry::reduce::EntryAction;
use time_tracker::runtime::store::{Store, StoreConfig, StoreHandle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let deps = state::live_deps()?;
    info!(path = %state::data_file_path()?.display(), "starting");

    let (store, driver) = Store::spawn(deps, StoreConfig::default());
    store.dispatch(Action::Load);
    store.dispatch(Action::StartDisplayTimer);
    store.settle().await;

    println!("commands: ls | new [name] | start N | stop N | toggle N | name N <text> | rm N | clear | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !run_command(&store, line.trim()) {
            break;
        }
        // Applied before the next prompt so `ls` reflects the command above.
        store.settle().await;
    }

    store.shutdown().await;
    driver.await?;
    Ok(())
}

// Returns false when the loop should exit.
fn run_command(store: &StoreHandle, line: &str) -> bool {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "" => {}
        "quit" | "q" => return false,
        "ls" => render(&store.entries()),
        "new" => store.dispatch(Action::CreateNew {
            description: (!rest.is_empty()).then(|| rest.to_string()),
            status: Status::Stopped,
        }),
        "clear" => store.dispatch(Action::RemoveAll),
        "start" | "stop" | "toggle" | "rm" | "name" => {
            let (index, text) = match rest.split_once(' ') {
                Some((index, text)) => (index, text.trim()),
                None => (rest, ""),
            };
            let Some(id) = resolve(store, index) else {
                println!("no entry {index}");
                return true;
            };
            let action = match command {
                "start" => EntryAction::SetStatus(Status::Running),
                "stop" => EntryAction::SetStatus(Status::Stopped),
                "toggle" => EntryAction::ToggleStatus,
                "rm" => EntryAction::Remove,
                _ => EntryAction::SetDescription((!text.is_empty()).then(|| text.to_string())),
            };
            store.dispatch(Action::Entry { id, action });
        }
        other => println!("unknown command: {other}"),
    }
    true
}

// Commands address entries by their 1-based position in the displayed list.
fn resolve(store: &StoreHandle, index: &str) -> Option<Uuid> {
    let position: usize = index.parse().ok()?;
    let entries = store.entries();
    entries.get(position.checked_sub(1)?).map(|entry| entry.id)
}

fn render(entries: &[TimeEntry]) {
    if entries.is_empty() {
        println!("(no entries)");
        return;
    }
    for (position, entry) in entries.iter().enumerate() {
        let marker = if entry.is_running() { ">" } else { " " };
        let name = entry.description.text().unwrap_or("(unnamed)");
        println!(
            "{marker} {:>2}. {} {}",
            position + 1,
            format_duration(entry.accumulated_time.total),
            name
        );
    }
}

fn format_duration(total_seconds: i64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
