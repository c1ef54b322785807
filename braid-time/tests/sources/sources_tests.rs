// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{Notification, StreamItem};
use braid_runtime::TokioTimer;
use braid_test_utils::{unwrap_stream, IntoStreamExt, RecordingObserver};
use braid_time::{interval, timer};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_timer_emits_once_after_due_time() {
    // Arrange
    let recorder = RecordingObserver::new();
    timer(TokioTimer, Duration::from_secs(1)).subscribe(recorder.clone());

    // Act
    sleep(Duration::from_millis(999)).await;

    // Assert
    assert!(recorder.notifications().is_empty());

    // Act
    sleep(Duration::from_millis(2)).await;

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(0), Notification::Complete]
    );
}

#[tokio::test(start_paused = true)]
async fn test_interval_ticks_until_cancelled() {
    // Arrange
    let recorder = RecordingObserver::new();
    let subscription = interval(TokioTimer, Duration::from_millis(100)).subscribe(recorder.clone());

    // Act
    sleep(Duration::from_millis(350)).await;
    subscription.cancel();
    sleep(Duration::from_secs(1)).await;

    // Assert
    assert_eq!(recorder.values(), vec![0, 1, 2]);
    assert!(!recorder.is_terminated());
}

#[tokio::test(start_paused = true)]
async fn test_interval_pulled_as_stream() {
    // Arrange
    let mut ticks = interval(TokioTimer, Duration::from_secs(1)).into_stream();

    // Act & Assert
    assert_eq!(unwrap_stream(&mut ticks, 1_500).await, StreamItem::Value(0));
    assert_eq!(unwrap_stream(&mut ticks, 1_500).await, StreamItem::Value(1));
}

#[tokio::test(start_paused = true)]
async fn test_dropping_pulled_interval_stops_its_task() {
    // Arrange
    let ticks = interval(TokioTimer, Duration::from_secs(1)).into_stream();
    let subscription = ticks.subscription().clone();

    // Act
    drop(ticks);

    // Assert
    assert!(subscription.is_cancelled());
}
