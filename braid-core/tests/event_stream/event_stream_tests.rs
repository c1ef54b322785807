// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{EventStream, FnObserver, Observer, Subscriber};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[test]
fn test_cancelled_subscription_silences_a_stashed_subscriber() {
    // Arrange
    let stash: Arc<Mutex<Option<Subscriber<i32>>>> = Arc::default();
    let slot = stash.clone();
    let stream = EventStream::create(move |subscriber| *slot.lock() = Some(subscriber));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let subscription = stream.subscribe_fn(move |v| sink.lock().push(v));
    let emitter = stash.lock().clone().expect("subscribed");

    // Act
    emitter.next(1);
    subscription.cancel();
    emitter.next(2);
    emitter.complete();

    // Assert
    assert!(emitter.is_closed());
    assert_eq!(*seen.lock(), vec![1]);
}

#[test]
fn test_values_pushed_after_cancellation_are_dropped() {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let stream = EventStream::<i64>::create(move |subscriber| {
        let inner = subscriber.clone();
        EventStream::range(0, 1_000).subscribe(FnObserver::new(
            move |v| {
                if v == 3 {
                    inner.subscription().cancel();
                }
                inner.next(v);
            },
            |_| {},
            || {},
        ));
    });

    // Act
    let subscription = stream.subscribe_fn(move |v| sink.lock().push(v));

    // Assert
    assert_eq!(*seen.lock(), vec![0, 1, 2]);
    assert!(subscription.is_cancelled());
}

#[test]
fn test_custom_observer_receives_completion() {
    struct Flag(AtomicBool);

    impl Observer<&'static str> for Flag {
        fn on_next(&self, _value: &'static str) {}

        fn on_complete(&self) {
            self.0.store(true, Ordering::SeqCst);
        }
    }

    let flag = Arc::new(Flag(AtomicBool::new(false)));

    EventStream::just("only").subscribe(flag.clone());

    assert!(flag.0.load(Ordering::SeqCst));
}

#[test]
fn test_empty_and_never_sources() {
    let completed = Arc::new(AtomicBool::new(false));
    let done = completed.clone();

    EventStream::<u8>::empty().subscribe_with(
        |_| {},
        |_| {},
        move || done.store(true, Ordering::SeqCst),
    );
    let pending = EventStream::<u8>::never().subscribe_fn(|_| {});

    assert!(completed.load(Ordering::SeqCst));
    assert!(!pending.is_cancelled());
}
