//! Debounce-coalesced autosave.
//!
//! Callers push every new scenario snapshot into the `Autosaver`; a
//! background task persists only the latest snapshot, no sooner than
//! one debounce interval after the most recent push. Rapid edit bursts
//! collapse into a single write.

use std::sync::Arc;
use std::time::Duration;

use priorscope_common::Scenario;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::ScenarioStore;

pub struct Autosaver {
    tx: watch::Sender<Option<Scenario>>,
    task: JoinHandle<()>,
}

impl Autosaver {
    /// Spawn the background persistence task.
    pub fn spawn(store: Arc<dyn ScenarioStore>, debounce: Duration) -> Self {
        let (tx, mut rx) = watch::channel(None::<Scenario>);

        let task = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                // Wait for the burst to go quiet: every further push
                // re-arms the timer, so the write lands one full
                // interval after the last change.
                loop {
                    tokio::select! {
                        _ = tokio::time::sleep(debounce) => break,
                        changed = rx.changed() => {
                            if changed.is_err() {
                                break;
                            }
                        }
                    }
                }
                let latest = rx.borrow_and_update().clone();
                if let Some(scenario) = latest {
                    match store.save(&scenario).await {
                        Ok(()) => debug!(scenario_id = %scenario.id, "autosaved scenario"),
                        Err(e) => warn!(scenario_id = %scenario.id, error = %e, "autosave failed"),
                    }
                }
            }
        });

        Self { tx, task }
    }

    /// Record a new snapshot as the autosave candidate. Cheap; safe to
    /// call on every state transition.
    pub fn update(&self, scenario: Scenario) {
        // Send only fails when the task is gone, which means we are
        // shutting down anyway.
        let _ = self.tx.send(Some(scenario));
    }
}

impl Drop for Autosaver {
    fn drop(&mut self) {
        self.task.abort();
    }
}
