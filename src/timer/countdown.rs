//! The countdown timer primitive.
//!
//! A `CountdownTimer` decrements a duration on a fixed wall-clock cadence on
//! its own worker thread, independent of the UI thread, and posts
//! [`TimerEvent`]s through a channel. Pausing parks the worker on a condition
//! variable; stopping wakes any wait and joins the worker before returning.
//!
//! All shared state sits behind a single mutex, so `stop()` cannot race a
//! concurrent `pause()` or `start()`.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::Sender;

use super::event::TimerEvent;

/// Floor applied to both the tick interval and any duration that is set.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

// ============================================================================
// Shared worker state
// ============================================================================

/// State shared between the UI thread and the countdown worker.
#[derive(Debug)]
struct TimerShared {
    /// Tick cadence. Changes take effect on the next scheduling cycle.
    interval: Duration,
    /// Remaining time. The only field the worker writes.
    remaining: Duration,
    /// Worker parks on the condvar while set.
    paused: bool,
    /// Termination signal for the worker.
    stopped: bool,
    /// True while a worker thread exists for this timer.
    worker_active: bool,
}

/// Mutex/condvar pair guarding [`TimerShared`].
#[derive(Debug)]
struct TimerInner {
    state: Mutex<TimerShared>,
    cond: Condvar,
}

impl TimerInner {
    /// Locks the shared state, tolerating poisoning from a panicked peer.
    fn lock(&self) -> MutexGuard<'_, TimerShared> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// CountdownTimer
// ============================================================================

/// A countdown that runs on its own background thread.
///
/// Created once at application start; `start()` spawns the worker,
/// `stop()` joins it. Tick and timeout notifications arrive on the channel
/// handed to [`CountdownTimer::new`].
pub struct CountdownTimer {
    inner: std::sync::Arc<TimerInner>,
    events: Sender<TimerEvent>,
    /// Join handle for the worker. Guarded separately from the timer state
    /// so joining never holds the state lock.
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl CountdownTimer {
    /// Creates a stopped timer that will post events into `events`.
    pub fn new(events: Sender<TimerEvent>) -> Self {
        Self {
            inner: std::sync::Arc::new(TimerInner {
                state: Mutex::new(TimerShared {
                    interval: MIN_INTERVAL,
                    remaining: Duration::ZERO,
                    paused: false,
                    stopped: false,
                    worker_active: false,
                }),
                cond: Condvar::new(),
            }),
            events,
            worker: Mutex::new(None),
        }
    }

    // ── Configuration ────────────────────────────────────────────────

    /// Sets the tick cadence, clamped up to one second.
    ///
    /// Takes effect on the worker's next scheduling cycle.
    pub fn set_interval(&self, interval: Duration) {
        let mut state = self.inner.lock();
        state.interval = interval.max(MIN_INTERVAL);
    }

    /// Sets the remaining time, clamped up to one second.
    ///
    /// May be called whether the timer is running or stopped; takes effect
    /// immediately.
    pub fn set_duration(&self, duration: Duration) {
        let mut state = self.inner.lock();
        state.remaining = duration.max(MIN_INTERVAL);
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Starts the countdown.
    ///
    /// If no worker is running, spawns one (optionally starting in the
    /// paused state). If the worker is already running and paused, this
    /// resumes it. Idempotent with respect to spawning.
    pub fn start(&self, start_paused: bool) {
        let mut state = self.inner.lock();
        if state.worker_active {
            if state.paused {
                tracing::debug!("resuming countdown");
                state.paused = false;
                self.inner.cond.notify_all();
            }
            return;
        }

        tracing::debug!(paused = start_paused, "spawning countdown worker");
        state.worker_active = true;
        state.stopped = false;
        state.paused = start_paused;
        drop(state);

        let inner = std::sync::Arc::clone(&self.inner);
        let events = self.events.clone();
        let handle = std::thread::spawn(move || run_worker(&inner, &events));
        *self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    /// Pauses the countdown. No-op if not running or already paused.
    pub fn pause(&self) {
        let mut state = self.inner.lock();
        if state.worker_active && !state.paused {
            tracing::debug!("pausing countdown");
            state.paused = true;
        }
    }

    /// Stops the countdown and joins the worker thread.
    ///
    /// Wakes a paused worker so stopping never deadlocks. Blocks the caller
    /// until the worker has observably exited (at most one interval plus
    /// scheduling slack); no tick or timeout is delivered after this
    /// returns. The remaining time is cleared so a later `start()` is a
    /// fresh run.
    pub fn stop(&self) {
        {
            let mut state = self.inner.lock();
            if !state.worker_active {
                return;
            }
            tracing::debug!("stopping countdown");
            state.stopped = true;
            self.inner.cond.notify_all();
        }

        let handle = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            let _ = handle.join();
        }

        let mut state = self.inner.lock();
        state.worker_active = false;
        state.paused = false;
        state.remaining = Duration::ZERO;
    }

    // ── Snapshots ────────────────────────────────────────────────────

    /// True while a worker exists and is actively counting down.
    pub fn is_running(&self) -> bool {
        let state = self.inner.lock();
        state.worker_active && !state.paused && !state.stopped
    }

    /// True while a worker exists but is parked on the pause wait.
    pub fn is_paused(&self) -> bool {
        let state = self.inner.lock();
        state.worker_active && state.paused
    }

    /// True when no worker is active.
    pub fn is_stopped(&self) -> bool {
        let state = self.inner.lock();
        !state.worker_active || state.stopped
    }

    /// Remaining time at this instant.
    pub fn remaining(&self) -> Duration {
        self.inner.lock().remaining
    }

    /// Current tick cadence.
    pub fn interval(&self) -> Duration {
        self.inner.lock().interval
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("CountdownTimer")
            .field("interval", &state.interval)
            .field("remaining", &state.remaining)
            .field("paused", &state.paused)
            .field("worker_active", &state.worker_active)
            .finish()
    }
}

// ============================================================================
// Worker loop
// ============================================================================

/// The countdown schedule. Runs until `stopped` is observed.
///
/// Each cycle: exit if stopped; park while paused; otherwise apply one tick
/// if time remains (posting `Timeout` exactly once when the remaining time
/// crosses zero), then sleep one interval. The sleep is a timed condvar wait
/// so `stop()` wakes it early. Events are posted while holding the state
/// lock, which is what guarantees nothing is delivered after `stop()` has
/// returned.
fn run_worker(inner: &TimerInner, events: &Sender<TimerEvent>) {
    let mut state = inner.lock();

    loop {
        if state.stopped {
            break;
        }

        if state.paused {
            state = inner
                .cond
                .wait_while(state, |s| s.paused && !s.stopped)
                .unwrap_or_else(PoisonError::into_inner);
            continue;
        }

        if state.remaining > Duration::ZERO {
            let next = state.remaining.saturating_sub(state.interval);
            state.remaining = next;
            let _ = events.send(TimerEvent::Tick { remaining: next });
            if next.is_zero() {
                tracing::debug!("countdown reached zero");
                let _ = events.send(TimerEvent::Timeout);
            }
        }

        // Sleep one interval, waking early only for a stop signal. While
        // the remaining time sits at zero this degenerates to an idle spin
        // at the tick cadence without re-firing the timeout.
        let interval = state.interval;
        let (guard, _) = inner
            .cond
            .wait_timeout_while(state, interval, |s| !s.stopped)
            .unwrap_or_else(PoisonError::into_inner);
        state = guard;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{unbounded, Receiver};

    fn create_timer() -> (CountdownTimer, Receiver<TimerEvent>) {
        let (tx, rx) = unbounded();
        (CountdownTimer::new(tx), rx)
    }

    // ------------------------------------------------------------------------
    // Configuration tests
    // ------------------------------------------------------------------------

    mod config_tests {
        use super::*;

        #[test]
        fn test_interval_clamped_to_one_second() {
            let (timer, _rx) = create_timer();
            timer.set_interval(Duration::from_millis(10));
            assert_eq!(timer.interval(), Duration::from_secs(1));
        }

        #[test]
        fn test_interval_above_floor_kept() {
            let (timer, _rx) = create_timer();
            timer.set_interval(Duration::from_secs(5));
            assert_eq!(timer.interval(), Duration::from_secs(5));
        }

        #[test]
        fn test_duration_clamped_to_one_second() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::ZERO);
            assert_eq!(timer.remaining(), Duration::from_secs(1));
        }

        #[test]
        fn test_duration_set_while_stopped() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::from_secs(90));
            assert_eq!(timer.remaining(), Duration::from_secs(90));
        }
    }

    // ------------------------------------------------------------------------
    // Snapshot tests
    // ------------------------------------------------------------------------

    mod snapshot_tests {
        use super::*;

        #[test]
        fn test_fresh_timer_is_stopped() {
            let (timer, _rx) = create_timer();
            assert!(timer.is_stopped());
            assert!(!timer.is_running());
            assert!(!timer.is_paused());
        }

        #[test]
        fn test_start_paused_reports_paused() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::from_secs(60));
            timer.start(true);

            assert!(timer.is_paused());
            assert!(!timer.is_running());
            assert!(!timer.is_stopped());

            timer.stop();
        }

        #[test]
        fn test_pause_then_start_resumes() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::from_secs(60));
            timer.start(true);
            assert!(timer.is_paused());

            // Start while paused is a resume, not a second spawn.
            timer.start(false);
            assert!(timer.is_running());
            assert!(!timer.is_paused());

            timer.stop();
        }

        #[test]
        fn test_pause_when_stopped_is_noop() {
            let (timer, _rx) = create_timer();
            timer.pause();
            assert!(!timer.is_paused());
            assert!(timer.is_stopped());
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle tests (real worker thread, bounded sleeps)
    // ------------------------------------------------------------------------

    mod lifecycle_tests {
        use super::*;

        #[test]
        fn test_stop_joins_and_clears_remaining() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::from_secs(600));
            timer.start(false);
            assert!(timer.is_running());

            timer.stop();
            assert!(timer.is_stopped());
            assert_eq!(timer.remaining(), Duration::ZERO);
        }

        #[test]
        fn test_stop_while_paused_does_not_deadlock() {
            let (timer, _rx) = create_timer();
            timer.set_duration(Duration::from_secs(600));
            timer.start(true);
            assert!(timer.is_paused());

            // Must wake the pause wait and return promptly.
            timer.stop();
            assert!(timer.is_stopped());
        }

        #[test]
        fn test_stop_when_never_started_is_noop() {
            let (timer, _rx) = create_timer();
            timer.stop();
            assert!(timer.is_stopped());
        }

        #[test]
        fn test_restart_after_stop_is_fresh_run() {
            let (timer, rx) = create_timer();
            timer.set_duration(Duration::from_secs(2));
            timer.start(false);
            std::thread::sleep(Duration::from_millis(1300));
            timer.stop();
            while rx.try_recv().is_ok() {}

            timer.set_duration(Duration::from_secs(2));
            timer.start(false);
            std::thread::sleep(Duration::from_millis(300));
            timer.stop();

            // The first tick of the new run starts from the fresh duration.
            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Tick {
                    remaining: Duration::from_secs(1)
                }
            );
        }

        #[test]
        fn test_no_events_after_stop_returns() {
            let (timer, rx) = create_timer();
            timer.set_duration(Duration::from_secs(60));
            timer.start(false);
            std::thread::sleep(Duration::from_millis(300));
            timer.stop();

            while rx.try_recv().is_ok() {}
            std::thread::sleep(Duration::from_millis(1300));
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_paused_worker_posts_no_ticks() {
            let (timer, rx) = create_timer();
            timer.set_duration(Duration::from_secs(60));
            timer.start(true);

            std::thread::sleep(Duration::from_millis(1500));
            assert!(rx.try_recv().is_err());

            timer.stop();
        }
    }

    // ------------------------------------------------------------------------
    // Ordering tests
    // ------------------------------------------------------------------------

    mod ordering_tests {
        use super::*;

        #[test]
        fn test_ticks_then_single_timeout() {
            let (timer, rx) = create_timer();
            timer.set_duration(Duration::from_secs(2));
            timer.start(false);

            // 2s duration, 1s interval: two ticks then one timeout, then
            // the worker idles at zero without re-firing.
            std::thread::sleep(Duration::from_millis(2600));
            timer.stop();

            let events: Vec<_> = rx.try_iter().collect();
            assert_eq!(
                events,
                vec![
                    TimerEvent::Tick {
                        remaining: Duration::from_secs(1)
                    },
                    TimerEvent::Tick {
                        remaining: Duration::ZERO
                    },
                    TimerEvent::Timeout,
                ]
            );
        }

        #[test]
        fn test_timeout_not_refired_while_idle_at_zero() {
            let (timer, rx) = create_timer();
            timer.set_duration(Duration::from_secs(1));
            timer.start(false);

            std::thread::sleep(Duration::from_millis(2600));
            timer.stop();

            let timeouts = rx.try_iter().filter(TimerEvent::is_timeout).count();
            assert_eq!(timeouts, 1);
        }
    }
}
