use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use veneer_animation::{AnimationCallback, AnimationDispatcher, ManualTimer};

fn recorder() -> (Arc<Mutex<Vec<bool>>>, AnimationCallback) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, Arc::new(move |invalidate| sink.lock().unwrap().push(invalidate)))
}

#[test]
fn invalidate_lands_on_every_fifth_tick() {
    let timer = ManualTimer::new();
    let dispatcher = AnimationDispatcher::with_timer(timer.clone());
    let (seen, callback) = recorder();
    dispatcher.register(callback).unwrap();

    assert_eq!(timer.fire_n(15), 15);

    let seen = seen.lock().unwrap();
    let due: Vec<usize> = seen
        .iter()
        .enumerate()
        .filter(|(_, invalidate)| **invalidate)
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(due, vec![5, 10, 15]);
    assert_eq!(seen.len(), 15);
}

#[test]
fn registering_twice_keeps_one_entry() {
    let dispatcher = AnimationDispatcher::with_timer(ManualTimer::new());
    let (_, callback) = recorder();

    assert!(dispatcher.register(callback.clone()).unwrap());
    assert!(!dispatcher.register(callback.clone()).unwrap());
    assert_eq!(dispatcher.len(), 1);

    assert!(dispatcher.unregister(&callback).unwrap());
    assert!(!dispatcher.unregister(&callback).unwrap());
    assert!(dispatcher.is_empty());
}

#[test]
fn every_registered_callback_sees_the_same_tick() {
    let timer = ManualTimer::new();
    let dispatcher = AnimationDispatcher::with_timer(timer.clone());
    let (a_seen, a) = recorder();
    let (b_seen, b) = recorder();
    dispatcher.register(a).unwrap();
    dispatcher.register(b).unwrap();

    timer.fire_n(5);
    assert_eq!(*a_seen.lock().unwrap(), *b_seen.lock().unwrap());
    assert_eq!(a_seen.lock().unwrap().last(), Some(&true));
}

#[test]
fn restarting_the_timer_restarts_the_cadence() {
    let timer = ManualTimer::new();
    let dispatcher = AnimationDispatcher::with_timer(timer.clone());
    let (_, first) = recorder();
    dispatcher.register(first.clone()).unwrap();
    timer.fire_n(3);
    dispatcher.unregister(&first).unwrap();

    let (seen, second) = recorder();
    dispatcher.register(second).unwrap();
    timer.fire_n(5);
    assert_eq!(*seen.lock().unwrap(), vec![false, false, false, false, true]);
}

#[test]
fn callbacks_may_unregister_themselves_during_a_tick() {
    let timer = ManualTimer::new();
    let dispatcher = Arc::new(AnimationDispatcher::with_timer(timer.clone()));
    let slot: Arc<Mutex<Option<AnimationCallback>>> = Arc::new(Mutex::new(None));

    let weak = Arc::downgrade(&dispatcher);
    let me = slot.clone();
    let callback: AnimationCallback = Arc::new(move |_| {
        let own = me.lock().unwrap().clone();
        if let (Some(dispatcher), Some(own)) = (weak.upgrade(), own) {
            dispatcher.unregister(&own).unwrap();
        }
    });
    *slot.lock().unwrap() = Some(callback.clone());

    dispatcher.register(callback).unwrap();
    assert!(timer.fire());
    assert!(dispatcher.is_empty());
    assert!(!dispatcher.is_running());
}

#[test]
fn precision_timer_drives_real_ticks() {
    let dispatcher = AnimationDispatcher::new();
    let ticks = Arc::new(AtomicUsize::new(0));
    let counter = ticks.clone();
    let callback: AnimationCallback = Arc::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    dispatcher.register(callback.clone()).unwrap();
    let start = Instant::now();
    while ticks.load(Ordering::SeqCst) < 2 && start.elapsed() < Duration::from_secs(5) {
        std::thread::sleep(Duration::from_millis(5));
    }
    dispatcher.unregister(&callback).unwrap();

    assert!(ticks.load(Ordering::SeqCst) >= 2);
    assert!(!dispatcher.is_running());
}
