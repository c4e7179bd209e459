//! Scoped scroll listener for the infinite list.
//!
//! A mounted list consumes viewport scroll events on its own task. The
//! returned [`ScrollSubscription`] owns that task: dropping it stops the
//! listener and detaches the list so in-flight results are discarded. The
//! result of every handled event is reported back through the subscription.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::catalog::Catalog;
use crate::error::StorefrontError;
use crate::infinite_list::{InfiniteList, LoadOutcome, ScrollMetrics};

/// Unread load results kept per subscription.
pub const OUTCOME_BUFFER: usize = 16;

/// Handle to a mounted scroll listener.
#[must_use = "dropping the subscription unmounts the list"]
pub struct ScrollSubscription {
    task: Option<JoinHandle<()>>,
    alive: Arc<AtomicBool>,
    outcomes: mpsc::Receiver<Result<LoadOutcome, StorefrontError>>,
}

impl ScrollSubscription {
    /// Stops listening and detaches the list.
    pub fn unmount(self) {
        drop(self);
    }

    /// Waits until the event source closes and every queued event is handled,
    /// then unmounts.
    /// Result of the next handled scroll event. `None` once the listener stopped.
    ///
    /// Reports that nobody collects are dropped once [`OUTCOME_BUFFER`] are queued.
    pub async fn next_outcome(&mut self) -> Option<Result<LoadOutcome, StorefrontError>> {
        self.outcomes.recv().await
    }

    pub async fn finished(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!("Scroll listener stopped abnormally: {}", e);
            }
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.alive.store(false, Ordering::Release);
    }
}

impl<C: Catalog + 'static> InfiniteList<C> {
    /// Starts listening to `events`.
    ///
    /// Events that pile up while a page is loading are collapsed into the
    /// most recent one. A failed load is logged and the listener keeps
    /// running, so the next scroll retries.
    pub fn mount(self: &Arc<Self>, mut events: mpsc::Receiver<ScrollMetrics>) -> ScrollSubscription {
        let list = Arc::clone(self);
        let (reports, outcomes) = mpsc::channel(OUTCOME_BUFFER);
        let task = tokio::spawn(async move {
            while let Some(mut metrics) = events.recv().await {
                while let Ok(newer) = events.try_recv() {
                    metrics = newer;
                }
                let result = list.on_scroll(metrics).await;
                match &result {
                    Ok(LoadOutcome::Appended { count }) => {
                        tracing::debug!("Scroll loaded {} more items", count);
                    }
                    Err(e) => {
                        tracing::warn!("Scroll-triggered load failed, waiting for next scroll: {}", e);
                    }
                    Ok(_) => {}
                }
                let detached = matches!(result, Ok(LoadOutcome::Detached));
                if reports.try_send(result).is_err() {
                    tracing::debug!("Load result not collected, dropping it");
                }
                if detached {
                    break;
                }
            }
        });
        ScrollSubscription {
            task: Some(task),
            alive: self.liveness(),
            outcomes,
        }
    }
}
