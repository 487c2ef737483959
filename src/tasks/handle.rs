//! Stop Handle
//!
//! Spawns periodic tasks and hands back a one-shot stop signal for each.

use std::future::Future;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{info, warn};

/// One-shot control for a running background task.
///
/// Calling [`StopHandle::stop`] consumes the handle, so a stopped task can't
/// be signaled again; start a new task to resume. Dropping the handle closes
/// the stop channel, which the task also treats as a stop signal.
#[must_use = "dropping a StopHandle stops its background task"]
#[derive(Debug)]
pub struct StopHandle {
    name: &'static str,
    stop_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl StopHandle {
    /// Signals the task to stop and waits until it has exited.
    ///
    /// A tick already in progress runs to completion; no further tick starts.
    pub async fn stop(self) {
        let StopHandle {
            name,
            stop_tx,
            task,
        } = self;

        // The task may already be gone if it panicked
        let _ = stop_tx.send(());

        if let Err(err) = task.await {
            warn!(task = name, error = %err, "background task ended abnormally");
        }
    }

    /// Returns true once the task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Name of the task, as used in log events.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Spawns a task that awaits `tick()` once per `period` until stopped.
///
/// The first tick fires one full period after the call. If a tick overruns,
/// the following ones are delayed rather than bunched up.
///
/// # Panics
/// Panics if `period` is zero, or if called outside a tokio runtime.
pub(crate) fn spawn_periodic<F, Fut>(
    name: &'static str,
    period: Duration,
    mut tick: F,
) -> StopHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    assert!(!period.is_zero(), "{name}: period must be non-zero");

    let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
    let first_tick = Instant::now() + period;

    let task = tokio::spawn(async move {
        info!(task = name, ?period, "starting background task");

        let mut ticker = interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;

                // Fires on an explicit stop and on a dropped handle
                _ = &mut stop_rx => break,
                _ = ticker.tick() => tick().await,
            }
        }

        drop(ticker);
        info!(task = name, "background task stopped");
    });

    StopHandle {
        name,
        stop_tx,
        task,
    }
}
