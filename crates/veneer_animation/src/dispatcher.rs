//! Animation dispatcher
//!
//! Multiplexes every registered animation callback onto one shared
//! [`PeriodicTimer`]. The timer runs only while at least one callback is
//! registered.
//!
//! Callbacks run on the timer's thread with `invalidate` set on every
//! redraw-due tick. They must not touch UI-owned drawing state; set a flag
//! the UI thread reads instead.

use crate::cadence::{FrameCadence, TICK_RATE_MS};
use crate::error::Result;
use crate::timer::{PeriodicTimer, PrecisionTimer, TimerCallback};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

new_key_type! {
    pub struct CallbackId;
}

/// Callback receiving `true` on ticks where a redraw is due
pub type AnimationCallback = Arc<dyn Fn(bool) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn same_callback(a: &AnimationCallback, b: &AnimationCallback) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

struct Shared {
    registry: Mutex<SlotMap<CallbackId, AnimationCallback>>,
    cadence: Mutex<FrameCadence>,
}

impl Shared {
    fn tick(&self) -> bool {
        let invalidate = lock(&self.cadence).advance();

        let callbacks: SmallVec<[AnimationCallback; 8]> =
            lock(&self.registry).values().cloned().collect();

        tracing::trace!(invalidate, callbacks = callbacks.len(), "dispatcher tick");
        for callback in &callbacks {
            callback(invalidate);
        }
        invalidate
    }
}

/// Process-wide animation service
///
/// Construct one per process and share it as `Arc<AnimationDispatcher>`.
/// Lock order is timer, then registry; the registry lock is never held while
/// callbacks run. A callback must not register new callbacks while the last
/// one is being unregistered from another thread.
pub struct AnimationDispatcher {
    timer: Mutex<Box<dyn PeriodicTimer>>,
    shared: Arc<Shared>,
}

impl AnimationDispatcher {
    /// Dispatcher driven by a [`PrecisionTimer`]
    pub fn new() -> Self {
        Self::with_timer(PrecisionTimer::new())
    }

    /// Dispatcher driven by any timer implementation
    pub fn with_timer(timer: impl PeriodicTimer + 'static) -> Self {
        Self {
            timer: Mutex::new(Box::new(timer)),
            shared: Arc::new(Shared {
                registry: Mutex::new(SlotMap::with_key()),
                cadence: Mutex::new(FrameCadence::default()),
            }),
        }
    }

    /// Add `callback` unless it is already registered
    ///
    /// Returns `Ok(true)` when it was added. The first registration starts
    /// the shared timer; if that fails the registration is rolled back.
    pub fn register(&self, callback: AnimationCallback) -> Result<bool> {
        let mut timer = lock(&self.timer);

        let (id, first) = {
            let mut registry = lock(&self.shared.registry);
            if registry.values().any(|c| same_callback(c, &callback)) {
                return Ok(false);
            }
            let id = registry.insert(callback);
            (id, registry.len() == 1)
        };
        tracing::debug!(?id, "animation callback registered");

        if first {
            lock(&self.shared.cadence).reset();
            let shared = self.shared.clone();
            let tick: TimerCallback = Arc::new(move || {
                shared.tick();
            });
            let rate = Duration::from_millis(u64::from(TICK_RATE_MS));
            if let Err(e) = timer.create(rate, rate, tick) {
                lock(&self.shared.registry).remove(id);
                return Err(e);
            }
        }
        Ok(true)
    }

    /// Remove `callback` if present
    ///
    /// Returns `Ok(true)` when it was removed. Removing the last callback
    /// stops the shared timer.
    pub fn unregister(&self, callback: &AnimationCallback) -> Result<bool> {
        let mut timer = lock(&self.timer);

        let emptied = {
            let mut registry = lock(&self.shared.registry);
            let Some(id) = registry
                .iter()
                .find(|(_, c)| same_callback(c, callback))
                .map(|(id, _)| id)
            else {
                return Ok(false);
            };
            registry.remove(id);
            tracing::debug!(?id, "animation callback unregistered");
            registry.is_empty()
        };

        if emptied {
            timer.delete()?;
        }
        Ok(true)
    }

    /// Run one dispatcher tick on the calling thread
    ///
    /// Returns whether this tick was a redraw-due tick.
    pub fn tick(&self) -> bool {
        self.shared.tick()
    }

    pub fn len(&self) -> usize {
        lock(&self.shared.registry).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.shared.registry).is_empty()
    }

    /// Whether the shared timer is armed
    pub fn is_running(&self) -> bool {
        lock(&self.timer).is_enabled()
    }
}

impl Default for AnimationDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationDispatcher {
    fn drop(&mut self) {
        let timer = self.timer.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = timer.delete() {
            tracing::warn!("dispatcher shutdown: {e}");
        }
    }
}

impl std::fmt::Debug for AnimationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDispatcher")
            .field("callbacks", &self.len())
            .field("running", &self.is_running())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualTimer;

    fn noop() -> AnimationCallback {
        Arc::new(|_| {})
    }

    #[test]
    fn timer_runs_only_while_callbacks_are_registered() {
        let timer = ManualTimer::new();
        let dispatcher = AnimationDispatcher::with_timer(timer.clone());
        let a = noop();
        let b = noop();

        assert!(!dispatcher.is_running());
        assert!(dispatcher.register(a.clone()).unwrap());
        assert!(dispatcher.register(b.clone()).unwrap());
        assert!(dispatcher.is_running());
        assert_eq!(timer.period(), Duration::from_millis(10));

        assert!(dispatcher.unregister(&a).unwrap());
        assert!(dispatcher.is_running());
        assert!(dispatcher.unregister(&b).unwrap());
        assert!(!dispatcher.is_running());
        assert_eq!(timer.create_count(), 1);
        assert_eq!(timer.delete_count(), 1);
    }

    #[test]
    fn failed_timer_start_rolls_back_registration() {
        let timer = ManualTimer::new();
        timer.fail_next_create("exhausted");
        let dispatcher = AnimationDispatcher::with_timer(timer);

        assert!(dispatcher.register(noop()).is_err());
        assert!(dispatcher.is_empty());
        assert!(!dispatcher.is_running());
    }
}
