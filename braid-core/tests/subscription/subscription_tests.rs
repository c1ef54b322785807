// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{EventStream, SerialSubscription, Subscriber, Subscription};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_cancel_cascades_through_nested_children_once() {
    // Arrange
    let root = Subscription::new();
    let middle = Subscription::new();
    let leaf = Subscription::new();
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    leaf.add_teardown(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    middle.add(leaf.clone());
    root.add(middle.clone());

    // Act
    root.cancel();
    root.cancel();
    leaf.cancel();

    // Assert
    assert!(middle.is_cancelled());
    assert!(leaf.is_cancelled());
    assert_eq!(runs.load(Ordering::SeqCst), 1);
}

#[test]
fn test_removed_child_survives_parent_cancellation() {
    let parent = Subscription::new();
    let child = Subscription::new();
    parent.add(child.clone());

    parent.remove(&child);
    parent.cancel();

    assert!(!child.is_cancelled());
}

#[test]
fn test_serial_subscription_cancels_replaced_child_and_follows_parent() {
    // Arrange
    let parent = Subscription::new();
    let serial = SerialSubscription::new();
    serial.attach_to(&parent);
    let first = Subscription::new();
    let second = Subscription::new();

    // Act
    serial.replace(first.clone());
    serial.replace(second.clone());

    // Assert
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());

    // Act
    parent.cancel();

    // Assert
    assert!(second.is_cancelled());
}

#[tokio::test]
async fn test_cancelled_future_wakes_on_cancel_from_another_task() -> anyhow::Result<()> {
    // Arrange
    let subscription = Subscription::new();
    let remote = subscription.clone();

    // Act
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        remote.cancel();
    });
    tokio::time::timeout(Duration::from_secs(5), subscription.cancelled()).await?;

    // Assert
    assert!(subscription.is_cancelled());
    Ok(())
}

#[test]
fn test_unsubscribing_stops_a_source_that_holds_its_subscriber() {
    // Arrange
    let held: Arc<Mutex<Option<Subscriber<i32>>>> = Arc::default();
    let slot = held.clone();
    let stream = EventStream::create(move |subscriber: Subscriber<i32>| {
        *slot.lock() = Some(subscriber);
    });
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    let subscription = stream.subscribe_fn(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let subscriber = held.lock().take().expect("subscribed");

    // Act
    subscriber.next(1);
    subscription.cancel();
    subscriber.next(2);

    // Assert
    assert_eq!(seen.load(Ordering::SeqCst), 1);
    assert!(subscriber.is_closed());
}
