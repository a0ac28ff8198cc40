use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a single pending one-shot timer
///
/// Wraps the only two timer-subsystem operations the wrapper consumes:
/// schedule a callback to run after a delay, and cancel it before it fires.
/// Tokio guarantees the callback never runs earlier than `delay` after
/// scheduling.
pub(crate) struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Schedule `callback` to run once, at least `delay` from now.
    ///
    /// Must be called from within a Tokio runtime context.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });

        Self { task }
    }

    /// Cancel the timer if it has not fired yet.
    ///
    /// The callback runs without await points once the sleep completes, so a
    /// callback that has started always runs to completion.
    pub fn cancel(self) {
        self.task.abort();
    }
}
