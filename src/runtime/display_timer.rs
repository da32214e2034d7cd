// Periodic wakeup driving elapsed time refreshes while the UI is visible.
//
// Purpose
// - Send one tick message per period to the store task. Ticks are best effort:
//   missed periods coalesce instead of bursting.
//
// Notes
// - Starting replaces any running instance. Each activation carries a
//   generation; the store drops ticks from older activations, so a tick that
//   was already queued when the timer stopped folds to nothing.

use crate::runtime::store::Msg;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub(crate) struct DisplayTimer {
    tx: mpsc::UnboundedSender<Msg>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl DisplayTimer {
    pub(crate) fn new(tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self {
            tx,
            generation: 0,
            task: None,
        }
    }

    pub(crate) fn start(&mut self, period: Duration) {
        self.stop();
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; the state is already fresh.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Msg::TimerTick { generation }).is_err() {
                    break;
                }
            }
        }));
    }

    pub(crate) fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.task.is_some() && generation == self.generation
    }
}
