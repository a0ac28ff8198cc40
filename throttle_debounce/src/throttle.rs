use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::timer::TimerHandle;

/// Pending-timer slots for one wrapped callable
///
/// `cooldown` is non-null exactly while the cooldown window is open.
/// `trailing` is non-null exactly while a trailing call is scheduled. Each
/// slot is cleared by its own timer when it fires.
struct Timers {
    cooldown: Option<TimerHandle>,
    trailing: Option<TimerHandle>,
}

/// Throttle-with-debounce wrapper around a callable
///
/// The first call in an idle period invokes the target synchronously and
/// opens a cooldown window of `delay`. Calls made while the window is open
/// do not invoke the target; instead they schedule a single trailing call
/// that fires `delay` after the most recent suppressed call, carrying that
/// call's payload. A burst of N > 1 calls inside the window therefore
/// produces exactly two target invocations: one immediate, one trailing.
///
/// This is the shape wanted for high-rate event sources (scroll offsets,
/// resize notifications, market ticks): react at once, cap the rate, and
/// still observe the final state after the burst settles.
///
/// The handle is `Clone`; clones share the same window and timer state.
/// [`call`](Self::call) spawns timer tasks and must run inside a Tokio
/// runtime context.
pub struct ThrottleDebounce<T> {
    /// Target callable, shared with the trailing timer task
    func: Arc<dyn Fn(T) + Send + Sync>,

    /// Cooldown window duration
    delay: Duration,

    /// The two nullable timer handles
    timers: Arc<Mutex<Timers>>,
}

impl<T: Send + 'static> ThrottleDebounce<T> {
    /// Wrap `func` with a cooldown window of `delay`.
    ///
    /// `delay` is not validated; `Duration::ZERO` yields a window that
    /// closes as soon as the timer subsystem gets to run.
    pub fn new<F>(func: F, delay: Duration) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self { func: Arc::new(func), delay, timers: Arc::new(Mutex::new(Timers { cooldown: None, trailing: None })) }
    }

    /// The configured cooldown window duration.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Invoke the wrapped callable with `args`.
    ///
    /// Returns `()` whether or not the target ran; the target's own return
    /// value (if it had one) is never propagated. A panic in the target on
    /// the immediate path unwinds into this caller; a panic on the trailing
    /// path stays inside the timer task.
    pub fn call(&self, args: T) {
        let mut timers = self.timers.lock();

        if timers.cooldown.is_some() {
            // Window open: replace any pending trailing call with one
            // carrying this call's payload. Last call wins.
            if let Some(pending) = timers.trailing.take() {
                pending.cancel();
                tracing::trace!("pending trailing call superseded");
            }

            let func = Arc::clone(&self.func);
            let slots = Arc::clone(&self.timers);
            timers.trailing = Some(TimerHandle::schedule(self.delay, move || {
                // One-shot: fires once and does not reopen the window.
                func(args);
                slots.lock().trailing = None;
            }));
            tracing::trace!(delay_ms = self.delay.as_millis() as u64, "trailing call scheduled");

            return;
        }

        drop(timers);

        // Immediate path. The target runs before the window opens, so if it
        // panics the window never opens.
        (self.func)(args);
        tracing::trace!("immediate call fired");

        let slots = Arc::clone(&self.timers);
        self.timers.lock().cooldown = Some(TimerHandle::schedule(self.delay, move || {
            // Closing the window invokes nothing; it only re-arms the
            // immediate path.
            slots.lock().cooldown = None;
        }));
    }
}

impl<T> Clone for ThrottleDebounce<T> {
    fn clone(&self) -> Self {
        Self { func: Arc::clone(&self.func), delay: self.delay, timers: Arc::clone(&self.timers) }
    }
}

/// Create a throttled version of `func` that executes at most once per
/// `delay`, and executes one additional (trailing) time after the calls stop
/// if any call was suppressed in between.
pub fn throttle_with_debounce<T, F>(func: F, delay: Duration) -> ThrottleDebounce<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    ThrottleDebounce::new(func, delay)
}
