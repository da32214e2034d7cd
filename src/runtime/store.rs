// Single writer driver around the collection engine.
//
// Purpose
// - Own the collection on one task, apply actions in dispatch order, and
//   execute the effects the engine returns.
//
// Responsibilities
// - Run load and save off the writer task and feed completions back as actions.
// - Drive the display timer and the debounced autosave through generation
//   tagged messages so stale wakeups fold to nothing.
// - Publish a read-only snapshot after every applied message.
//
// Boundaries
// - Nothing outside this task mutates the collection. Readers get snapshots.

use crate::core::collection::actions::Action;
use crate::core::collection::effects::Effect;
use crate::core::collection::reduce::CollectionEngine;
use crate::core::collection::state::Collection;
use crate::core::entry::model::TimeEntry;
use crate::core::ports::{AnalyticsSink, Clock, IdSource, TrackingPersistence};
use crate::runtime::autosave::Autosave;
use crate::runtime::display_timer::DisplayTimer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct StoreDeps {
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdSource>,
    pub persistence: Arc<dyn TrackingPersistence>,
    pub analytics: Arc<dyn AnalyticsSink>,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub autosave_delay: Duration,
    pub display_tick: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            autosave_delay: Duration::from_secs(1),
            display_tick: Duration::from_secs(1),
        }
    }
}

pub(crate) enum Msg {
    Action(Action),
    TimerTick { generation: u64 },
    AutosaveFire { generation: u64 },
    Settle(oneshot::Sender<()>),
    Shutdown(oneshot::Sender<()>),
}

#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<Msg>,
    snapshot_rx: watch::Receiver<Vec<TimeEntry>>,
}

impl StoreHandle {
    pub fn dispatch(&self, action: Action) {
        if self.tx.send(Msg::Action(action)).is_err() {
            debug!("store is gone, dropping action");
        }
    }

    // Entries in display order, as of the last applied message.
    pub fn entries(&self) -> Vec<TimeEntry> {
        self.snapshot_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<TimeEntry>> {
        self.snapshot_rx.clone()
    }

    // Resolves once every message dispatched before this call has been applied.
    pub async fn settle(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Msg::Settle(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }

    // Stops the writer. A pending debounced save is flushed first so no edit
    // is lost on exit.
    pub async fn shutdown(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        if self.tx.send(Msg::Shutdown(done_tx)).is_err() {
            return;
        }
        let _ = done_rx.await;
    }
}

pub struct Store {
    deps: StoreDeps,
    config: StoreConfig,
    engine: CollectionEngine<Arc<dyn Clock>, Arc<dyn IdSource>>,
    state: Collection,
    timer: DisplayTimer,
    autosave: Autosave,
    tx: mpsc::UnboundedSender<Msg>,
    snapshot_tx: watch::Sender<Vec<TimeEntry>>,
    // Tail of the save chain. Saves are whole-collection snapshots, so they
    // must land in order; each new save runs after the one before it.
    last_save: Option<JoinHandle<()>>,
}

impl Store {
    pub fn spawn(deps: StoreDeps, config: StoreConfig) -> (StoreHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());
        let engine = CollectionEngine::new(deps.clock.clone(), deps.ids.clone());
        let store = Store {
            engine,
            state: Collection::new(),
            timer: DisplayTimer::new(tx.clone()),
            autosave: Autosave::new(tx.clone()),
            tx: tx.clone(),
            snapshot_tx,
            deps,
            config,
            last_save: None,
        };
        let driver = tokio::spawn(store.run(rx));
        (StoreHandle { tx, snapshot_rx }, driver)
    }

    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Msg>) {
        while let Some(msg) = rx.recv().await {
            match msg {
                Msg::Action(action) => self.apply(action),
                Msg::TimerTick { generation } => {
                    if self.timer.is_current(generation) {
                        self.apply(Action::RefreshAll);
                    }
                }
                Msg::AutosaveFire { generation } => {
                    if self.autosave.fire_if_current(generation) {
                        self.apply(Action::Save);
                    }
                }
                Msg::Settle(done) => {
                    let _ = done.send(());
                }
                Msg::Shutdown(done) => {
                    self.finish().await;
                    let _ = done.send(());
                    break;
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        let effects = self.engine.reduce(&mut self.state, action);
        for effect in effects {
            self.execute(effect);
        }
        let _ = self.snapshot_tx.send(self.state.snapshot());
    }

    fn execute(&mut self, effect: Effect) {
        match effect {
            Effect::Save => {
                // A full snapshot is about to be written; a pending debounced
                // save would only repeat it.
                self.autosave.cancel();
                self.spawn_save();
            }
            Effect::DebounceSave => self.autosave.schedule(self.config.autosave_delay),
            Effect::Load => self.spawn_load(),
            Effect::StartDisplayTimer => self.timer.start(self.config.display_tick),
            Effect::StopDisplayTimer => self.timer.stop(),
            Effect::Track(change) => {
                let analytics = self.deps.analytics.clone();
                tokio::spawn(async move {
                    analytics.track(change).await;
                });
            }
        }
    }

    fn spawn_save(&mut self) {
        let persistence = self.deps.persistence.clone();
        let entries = self.state.snapshot();
        let tx = self.tx.clone();
        let previous = self.last_save.take();
        self.last_save = Some(tokio::spawn(async move {
            if let Some(previous) = previous {
                let _ = previous.await;
            }
            let result = persistence.save(&entries).await;
            if let Err(error) = &result {
                warn!(%error, "save failed");
            }
            let _ = tx.send(Msg::Action(Action::SaveResult(result)));
        }));
    }

    fn spawn_load(&self) {
        let persistence = self.deps.persistence.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = persistence.load().await;
            if let Err(error) = &result {
                warn!(%error, "load failed, starting empty");
            }
            let _ = tx.send(Msg::Action(Action::LoadResult(result)));
        });
    }

    // Flushes a pending debounced edit and drains the save chain so nothing
    // is mid-write when the process exits.
    async fn finish(&mut self) {
        self.timer.stop();
        if self.autosave.cancel() {
            self.spawn_save();
        }
        if let Some(last) = self.last_save.take() {
            let _ = last.await;
        }
    }
}
