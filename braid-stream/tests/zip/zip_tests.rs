// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{Notification, StreamItem};
use braid_stream::{zip, ZipExt};
use braid_test_utils::{
    assert_stream_ended, push, test_channel,
    test_data::{letter_stream, number_stream},
    unwrap_stream, IntoStreamExt, RecordingObserver, TestChannels,
};

#[test]
fn test_zip_pairs_by_index_and_drops_unpaired_tail() {
    // Arrange
    let recorder = RecordingObserver::new();

    // Act
    zip(letter_stream(), number_stream(), |a, b| format!("{a}_{b}")).subscribe(recorder.clone());

    // Assert
    assert_eq!(recorder.values(), vec!["A_1", "B_2", "C_3", "d_4"]);
    assert!(recorder.is_completed());
}

#[test]
fn test_zip_pairs_by_index_not_arrival_time() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::new();
    left.stream
        .zip_with(right.stream, |a, b| (a, b))
        .subscribe(recorder.clone());

    // Act
    push(1, &left.sender);
    push(2, &left.sender);
    push(3, &left.sender);
    push(10, &right.sender);
    push(20, &right.sender);

    // Assert
    assert_eq!(recorder.values(), vec![(1, 10), (2, 20)]);
    assert!(!recorder.is_terminated());

    // Act
    push(30, &right.sender);

    // Assert
    assert_eq!(recorder.values(), vec![(1, 10), (2, 20), (3, 30)]);
}

#[test]
fn test_zip_waits_for_buffered_values_before_completing() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::new();
    zip(left.stream, right.stream, |a, b| a + b).subscribe(recorder.clone());

    // Act
    push(1, &left.sender);
    push(2, &left.sender);
    left.sender.complete();

    // Assert
    assert!(!recorder.is_terminated());

    // Act
    push(10, &right.sender);
    push(20, &right.sender);

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![
            Notification::Next(11),
            Notification::Next(22),
            Notification::Complete
        ]
    );
}

#[test]
fn test_zip_completes_when_exhausted_side_completes_and_cancels_other() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::new();
    zip(left.stream, right.stream, |a, b| a * b).subscribe(recorder.clone());

    // Act
    push(2, &left.sender);
    push(3, &left.sender);
    push(5, &right.sender);
    right.sender.complete();

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(10), Notification::Complete]
    );
    assert_eq!(left.sender.active_subscriptions(), 0);
}

#[tokio::test]
async fn test_zip_pulled_as_stream() -> anyhow::Result<()> {
    // Arrange
    let (letters, letters_in) = test_channel::<&str>();
    let (numbers, numbers_in) = test_channel::<i32>();
    let mut result = letters_in
        .zip_with(numbers_in, |a, b| format!("{a}{b}"))
        .into_stream();

    // Act
    letters.send("x")?;
    numbers.send(7)?;

    // Assert
    assert_eq!(
        unwrap_stream(&mut result, 500).await,
        StreamItem::Value("x7".to_string())
    );

    // Act
    numbers.complete();

    // Assert
    assert_stream_ended(&mut result, 500).await;
    Ok(())
}
