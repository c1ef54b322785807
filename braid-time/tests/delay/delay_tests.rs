// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, Notification};
use braid_runtime::TokioTimer;
use braid_test_utils::{push, RecordingObserver, TestChannel};
use braid_time::{delay, DelayExt};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test(start_paused = true)]
async fn test_delay_shifts_values_and_completion_in_order() {
    // Arrange
    let source = TestChannel::<&str>::new();
    let recorder = RecordingObserver::new();
    source
        .stream
        .clone()
        .delay(TokioTimer, Duration::from_secs(1))
        .subscribe(recorder.clone());

    // Act
    push("first", &source.sender);
    sleep(Duration::from_millis(500)).await;
    push("second", &source.sender);
    source.sender.complete();
    sleep(Duration::from_millis(600)).await;

    // Assert
    assert_eq!(recorder.values(), vec!["first"]);

    // Act
    sleep(Duration::from_millis(500)).await;

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next("first"),
            Notification::Next("second"),
            Notification::Complete,
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_delay_forwards_errors_immediately() -> anyhow::Result<()> {
    // Arrange
    let source = TestChannel::<i32>::new();
    let recorder = RecordingObserver::new();
    delay(source.stream.clone(), TokioTimer, Duration::from_secs(1)).subscribe(recorder.clone());

    // Act
    push(1, &source.sender);
    source.sender.error(BraidError::stream_error("upstream failed"))?;
    sleep(Duration::from_secs(2)).await;

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Error(BraidError::stream_error("upstream failed"))]
    );
    Ok(())
}
