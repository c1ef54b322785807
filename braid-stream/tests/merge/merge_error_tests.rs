// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, Notification};
use braid_stream::merge;
use braid_test_utils::{push, RecordingObserver, TestChannels};

#[test]
fn test_merge_first_error_terminates_and_cancels_the_rest() -> anyhow::Result<()> {
    // Arrange
    let (first, second, third) = TestChannels::three::<i32>();
    let recorder = RecordingObserver::new();
    merge(vec![first.stream, second.stream, third.stream]).subscribe(recorder.clone());

    // Act
    push(1, &first.sender);
    second.sender.error(BraidError::stream_error("second failed"))?;
    push(3, &third.sender);

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(1),
            Notification::Error(BraidError::stream_error("second failed")),
        ]
    );
    assert_eq!(first.sender.active_subscriptions(), 0);
    assert_eq!(third.sender.active_subscriptions(), 0);
    Ok(())
}
