// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{EventStream, Notification};
use braid_runtime::TokioTimer;
use braid_stream::{GroupJoinExt, JoinExt};
use braid_test_utils::{push, RecordingObserver, TestChannel};
use braid_time::{duration_window, interval};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_join_pairs_only_arrivals_inside_timed_window() {
    // Arrange
    let left = TestChannel::<&str>::new();
    let right = TestChannel::<&str>::new();
    let recorder = RecordingObserver::new();
    left.stream
        .clone()
        .join(
            right.stream.clone(),
            duration_window(TokioTimer, Duration::from_secs(2)),
            |_| EventStream::<()>::empty(),
            |a, b| format!("{a}+{b}"),
        )
        .subscribe(recorder.clone());

    // Act
    push("a@0s", &left.sender);
    sleep(Duration::from_secs(1)).await;
    push("b@1s", &right.sender);
    sleep(Duration::from_secs(2)).await;
    push("b@3s", &right.sender);

    // Assert
    assert_eq!(recorder.values(), vec!["a@0s+b@1s"]);
}

#[tokio::test(start_paused = true)]
async fn test_join_completes_when_last_timed_window_closes() {
    // Arrange
    let left = TestChannel::<i32>::new();
    let right = TestChannel::<i32>::new();
    let recorder = RecordingObserver::new();
    left.stream
        .clone()
        .join(
            right.stream.clone(),
            duration_window(TokioTimer, Duration::from_secs(2)),
            duration_window(TokioTimer, Duration::from_secs(2)),
            |a, b| a + b,
        )
        .subscribe(recorder.clone());

    // Act
    push(1, &left.sender);
    push(10, &right.sender);
    left.sender.complete();
    right.sender.complete();
    sleep(Duration::from_secs(1)).await;

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Next(11)]);

    // Act
    sleep(Duration::from_secs(2)).await;

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(11), Notification::Complete]
    );
}

#[tokio::test(start_paused = true)]
async fn test_group_join_collects_right_values_inside_timed_window() {
    // Arrange
    let left = TestChannel::<&str>::new();
    let right = TestChannel::<i32>::new();
    let members = RecordingObserver::new();
    let sink = members.clone();
    left.stream
        .clone()
        .group_join(
            right.stream.clone(),
            duration_window(TokioTimer, Duration::from_secs(2)),
            |_| EventStream::<()>::never(),
            move |_, group: EventStream<i32>| {
                group.subscribe(sink.clone());
            },
        )
        .subscribe(RecordingObserver::<()>::new());

    // Act
    push("a", &left.sender);
    sleep(Duration::from_millis(1000)).await;
    push(1, &right.sender);
    sleep(Duration::from_millis(500)).await;
    push(2, &right.sender);
    sleep(Duration::from_millis(1000)).await;
    push(3, &right.sender);

    // Assert
    assert_eq!(
        members.notifications(),
        vec![
            Notification::Next(1),
            Notification::Next(2),
            Notification::Complete
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_join_of_two_intervals_with_timed_windows() {
    // Arrange
    let fast = interval(TokioTimer, Duration::from_millis(300));
    let slow = interval(TokioTimer, Duration::from_millis(1000));
    let recorder = RecordingObserver::new();
    let subscription = fast
        .join(
            slow,
            duration_window(TokioTimer, Duration::from_millis(50)),
            duration_window(TokioTimer, Duration::from_millis(450)),
            |f, s| (f, s),
        )
        .subscribe(recorder.clone());

    // Act
    sleep(Duration::from_millis(2_120)).await;
    subscription.cancel();

    // Assert
    assert_eq!(recorder.values(), vec![(3, 0), (6, 1)]);
}
