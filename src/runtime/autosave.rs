// Debounce for description driven saves.
//
// Purpose
// - Collapse a burst of edits into one save once the user pauses.
//
// Notes
// - Scheduling replaces the pending delay and bumps the generation, so a fire
//   from a superseded delay folds to nothing even if its message was already
//   queued. An immediate save cancels the pending delay outright.

use crate::runtime::store::Msg;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub(crate) struct Autosave {
    tx: mpsc::UnboundedSender<Msg>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Autosave {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            tx,
            generation: 0,
            task: None,
        }
    }

    pub(crate) fn schedule(&mut self, delay: Duration) {
        self.cancel();
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Msg::AutosaveFire { generation });
        }));
    }

    // Reports whether a delay was pending, so shutdown knows to flush.
    pub(crate) fn cancel(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn fire_if_current(&mut self, generation: u64) -> bool {
        if self.task.is_some() && generation == self.generation {
            self.task = None;
            return true;
        }
        false
    }
}
