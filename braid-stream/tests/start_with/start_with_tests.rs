// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{EventStream, Notification};
use braid_stream::{start_with, StartWithExt};
use braid_test_utils::{
    push,
    test_data::{reading_east, reading_north, Reading},
    RecordingObserver, TestChannel,
};

#[test]
fn test_start_with_values_precedes_live_values() {
    // Arrange
    let main = TestChannel::<Reading>::new();
    let recorder = RecordingObserver::new();
    main.stream
        .start_with_values(vec![reading_north()])
        .subscribe(recorder.clone());

    // Act
    push(reading_east(), &main.sender);

    // Assert
    assert_eq!(recorder.values(), vec![reading_north(), reading_east()]);
}

#[test]
fn test_start_with_subscribes_main_after_prefix_completes() {
    // Arrange
    let prefix = TestChannel::<i32>::new();
    let main = TestChannel::<i32>::new();
    let recorder = RecordingObserver::new();
    start_with(main.stream, prefix.stream).subscribe(recorder.clone());

    // Act
    push(0, &prefix.sender);

    // Assert
    assert_eq!(main.sender.subscription_count(), 0);

    // Act
    prefix.sender.complete();
    push(1, &main.sender);
    main.sender.complete();

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(0),
            Notification::Next(1),
            Notification::Complete
        ]
    );
}

#[test]
fn test_start_with_empty_prefix_plays_main_only() {
    let recorder = RecordingObserver::new();

    EventStream::from_values(vec![5, 6])
        .start_with(EventStream::empty())
        .subscribe(recorder.clone());

    assert_eq!(recorder.values(), vec![5, 6]);
}
