//! Periodic timer primitive

use crate::error::{Result, TimerError};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Callback invoked on every timer expiry
pub type TimerCallback = Arc<dyn Fn() + Send + Sync>;

/// A timer that repeatedly invokes one callback
///
/// `create` is a no-op while the timer is enabled and `delete` is a no-op
/// while it is not. Deleting a timer whose worker already went away succeeds.
/// A zero `period` makes a one-shot timer that disables itself after expiry.
pub trait PeriodicTimer: Send {
    /// Arm the timer: first expiry after `due`, then every `period`
    fn create(&mut self, due: Duration, period: Duration, callback: TimerCallback) -> Result<()>;

    /// Disarm the timer
    fn delete(&mut self) -> Result<()>;

    fn is_enabled(&self) -> bool;
}

struct Worker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl Worker {
    fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

/// Timer backed by a dedicated worker thread
///
/// Expiries that fall behind are coalesced: a slow callback delays the next
/// tick instead of queueing a burst of catch-up ticks.
#[derive(Default)]
pub struct PrecisionTimer {
    worker: Option<Worker>,
}

impl PrecisionTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PeriodicTimer for PrecisionTimer {
    fn create(&mut self, due: Duration, period: Duration, callback: TimerCallback) -> Result<()> {
        if self.is_enabled() {
            return Ok(());
        }
        if let Some(done) = self.worker.take() {
            if done.handle.join().is_err() {
                tracing::warn!("previous timer callback panicked");
            }
        }

        let (stop, stopped) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("veneer-timer".into())
            .spawn(move || {
                let mut deadline = Instant::now() + due;
                loop {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stopped.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => {
                            callback();
                            if period.is_zero() {
                                break;
                            }
                            let now = Instant::now();
                            deadline += period;
                            if deadline <= now {
                                deadline = now + period;
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::trace!("timer worker exiting");
            })
            .map_err(|e| TimerError::Create(e.to_string()))?;

        tracing::debug!(?due, ?period, "timer created");
        self.worker = Some(Worker { stop, handle });
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        // A failed send means the worker already returned.
        let _ = worker.stop.send(());

        if worker.handle.thread().id() == thread::current().id() {
            // Deleted from inside its own callback; the loop sees the stop
            // signal as soon as the callback returns.
            tracing::debug!("timer deleted from its own worker");
            return Ok(());
        }

        worker
            .handle
            .join()
            .map_err(|_| TimerError::Delete("timer callback panicked".into()))?;
        tracing::debug!("timer deleted");
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.worker.as_ref().is_some_and(Worker::is_running)
    }
}

impl Drop for PrecisionTimer {
    fn drop(&mut self) {
        if let Err(e) = self.delete() {
            tracing::warn!("{e}");
        }
    }
}

#[derive(Default)]
struct ManualState {
    callback: Option<TimerCallback>,
    period: Duration,
    creates: usize,
    deletes: usize,
    fail_next_create: Option<String>,
}

/// Timer that only expires when [`ManualTimer::fire`] is called
///
/// Clones share one timer, so a test or a host's own frame loop can keep a
/// handle while the dispatcher owns another.
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one expiry; returns `false` when the timer is not armed
    pub fn fire(&self) -> bool {
        let callback = self.lock().callback.clone();
        match callback {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Run `count` expiries, stopping early if the timer gets disarmed
    pub fn fire_n(&self, count: usize) -> usize {
        (0..count).take_while(|_| self.fire()).count()
    }

    /// Period passed to the last successful `create`
    pub fn period(&self) -> Duration {
        self.lock().period
    }

    pub fn create_count(&self) -> usize {
        self.lock().creates
    }

    pub fn delete_count(&self) -> usize {
        self.lock().deletes
    }

    /// Make the next `create` fail with `reason`
    pub fn fail_next_create(&self, reason: impl Into<String>) {
        self.lock().fail_next_create = Some(reason.into());
    }
}

impl PeriodicTimer for ManualTimer {
    fn create(&mut self, _due: Duration, period: Duration, callback: TimerCallback) -> Result<()> {
        let mut state = self.lock();
        if state.callback.is_some() {
            return Ok(());
        }
        if let Some(reason) = state.fail_next_create.take() {
            return Err(TimerError::Create(reason));
        }
        state.callback = Some(callback);
        state.period = period;
        state.creates += 1;
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let mut state = self.lock();
        if state.callback.take().is_some() {
            state.deletes += 1;
        }
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.lock().callback.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, TimerCallback) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = count.clone();
        (count, Arc::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        }))
    }

    #[test]
    fn precision_timer_ticks_until_deleted() {
        let (count, callback) = counter();
        let mut timer = PrecisionTimer::new();
        timer
            .create(Duration::ZERO, Duration::from_millis(1), callback)
            .unwrap();
        assert!(timer.is_enabled());

        let start = Instant::now();
        while count.load(Ordering::SeqCst) < 3 && start.elapsed() < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
        }
        timer.delete().unwrap();
        assert!(!timer.is_enabled());

        let seen = count.load(Ordering::SeqCst);
        assert!(seen >= 3);
        thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[test]
    fn create_while_enabled_and_delete_while_disabled_are_noops() {
        let (_, callback) = counter();
        let mut timer = PrecisionTimer::new();
        timer.delete().unwrap();

        timer
            .create(Duration::from_secs(60), Duration::from_secs(60), callback.clone())
            .unwrap();
        timer
            .create(Duration::ZERO, Duration::from_millis(1), callback)
            .unwrap();
        timer.delete().unwrap();
        timer.delete().unwrap();
    }

    #[test]
    fn one_shot_worker_that_already_exited_deletes_cleanly() {
        let (count, callback) = counter();
        let mut timer = PrecisionTimer::new();
        timer.create(Duration::ZERO, Duration::ZERO, callback).unwrap();

        let start = Instant::now();
        while count.load(Ordering::SeqCst) == 0 && start.elapsed() < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
        }
        thread::sleep(Duration::from_millis(5));
        assert!(timer.delete().is_ok());
    }

    #[test]
    fn one_shot_timer_disables_itself_and_can_be_rearmed() {
        let (count, callback) = counter();
        let mut timer = PrecisionTimer::new();
        timer
            .create(Duration::ZERO, Duration::ZERO, callback.clone())
            .unwrap();

        let start = Instant::now();
        while timer.is_enabled() && start.elapsed() < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
        }
        assert!(!timer.is_enabled());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        timer.create(Duration::ZERO, Duration::ZERO, callback).unwrap();
        let start = Instant::now();
        while count.load(Ordering::SeqCst) < 2 && start.elapsed() < Duration::from_secs(5) {
            thread::sleep(Duration::from_millis(1));
        }
        assert_eq!(count.load(Ordering::SeqCst), 2);
        timer.delete().unwrap();
    }

    #[test]
    fn manual_timer_fires_only_while_armed() {
        let (count, callback) = counter();
        let handle = ManualTimer::new();
        let mut timer = handle.clone();

        assert!(!handle.fire());
        timer
            .create(Duration::ZERO, Duration::from_millis(10), callback)
            .unwrap();
        assert_eq!(handle.fire_n(4), 4);
        assert_eq!(handle.period(), Duration::from_millis(10));

        timer.delete().unwrap();
        assert!(!handle.fire());
        assert_eq!(count.load(Ordering::SeqCst), 4);
        assert_eq!((handle.create_count(), handle.delete_count()), (1, 1));
    }

    #[test]
    fn manual_timer_can_refuse_creation() {
        let (_, callback) = counter();
        let mut timer = ManualTimer::new();
        timer.fail_next_create("no timer slots");
        let err = timer
            .create(Duration::ZERO, Duration::from_millis(10), callback)
            .unwrap_err();
        assert_eq!(err, TimerError::Create("no timer slots".into()));
        assert!(!timer.is_enabled());
    }
}
