// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, EventStream, Notification};
use braid_stream::group_join;
use braid_test_utils::{push, RecordingObserver, TestChannels};

#[test]
fn test_group_join_error_reaches_open_groups_then_output() -> anyhow::Result<()> {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let members = RecordingObserver::new();
    let sink = members.clone();
    let recorder = RecordingObserver::<()>::new();
    group_join(
        left.stream,
        right.stream,
        |_| EventStream::<()>::never(),
        |_| EventStream::<()>::never(),
        move |_, group: EventStream<i32>| {
            group.subscribe(sink.clone());
        },
    )
    .subscribe(recorder.clone());

    // Act
    push(1, &left.sender);
    push(5, &right.sender);
    right.sender.error(BraidError::stream_error("right failed"))?;

    // Assert
    assert_eq!(
        members.notifications(),
        vec![
            Notification::Next(5),
            Notification::Error(BraidError::stream_error("right failed")),
        ]
    );
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(()),
            Notification::Error(BraidError::stream_error("right failed")),
        ]
    );
    assert_eq!(left.sender.active_subscriptions(), 0);
    Ok(())
}

#[test]
fn test_group_join_selector_panic_fails_output() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::<i32>::new();
    group_join(
        left.stream,
        right.stream,
        |_| EventStream::<()>::never(),
        |_| EventStream::<()>::never(),
        |_: i32, _: EventStream<i32>| -> i32 { panic!("selector exploded") },
    )
    .subscribe(recorder.clone());

    // Act
    push(1, &left.sender);

    // Assert
    assert!(recorder.error().is_some_and(|e| e.is_selector_error()));
    assert_eq!(right.sender.active_subscriptions(), 0);
}
