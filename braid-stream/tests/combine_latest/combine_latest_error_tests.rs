// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, Notification};
use braid_stream::{combine_latest, combine_latest_all};
use braid_test_utils::{push, RecordingObserver, TestChannels};

#[test]
fn test_combine_latest_propagates_error_immediately() -> anyhow::Result<()> {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::new();
    combine_latest(left.stream, right.stream, |a, b| a - b).subscribe(recorder.clone());

    // Act
    push(5, &left.sender);
    push(1, &right.sender);
    left.sender.error(BraidError::stream_error("sensor offline"))?;
    push(2, &right.sender);

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(4),
            Notification::Error(BraidError::stream_error("sensor offline")),
        ]
    );
    assert_eq!(right.sender.active_subscriptions(), 0);
    Ok(())
}

#[test]
fn test_combine_latest_all_selector_panic_cancels_every_source() {
    // Arrange
    let (first, second, third) = TestChannels::three::<i32>();
    let recorder = RecordingObserver::<i32>::new();
    combine_latest_all(vec![first.stream, second.stream, third.stream], |_| {
        panic!("bad selector")
    })
    .subscribe(recorder.clone());

    // Act
    push(1, &first.sender);
    push(2, &second.sender);
    push(3, &third.sender);

    // Assert
    assert!(recorder.error().is_some_and(|e| e.is_selector_error()));
    assert_eq!(first.sender.active_subscriptions(), 0);
    assert_eq!(second.sender.active_subscriptions(), 0);
    assert_eq!(third.sender.active_subscriptions(), 0);
}
