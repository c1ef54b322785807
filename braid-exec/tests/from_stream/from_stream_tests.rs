// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, StreamItem};
use braid_exec::{from_stream, IntoStreamExt};
use braid_test_utils::{assert_stream_ended, unwrap_error, unwrap_stream, unwrap_value};
use futures::channel::mpsc;
use futures::stream;

#[tokio::test]
async fn test_pull_stream_items_are_pushed_in_order() {
    // Arrange
    let source = stream::iter(vec![StreamItem::Value(1), StreamItem::Value(2)]);

    // Act
    let mut pulled = from_stream(source).into_stream();

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut pulled, 500).await)), 1);
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut pulled, 500).await)), 2);
    assert_stream_ended(&mut pulled, 500).await;
}

#[tokio::test]
async fn test_error_item_terminates_the_push_stream() {
    // Arrange
    let source = stream::iter(vec![
        StreamItem::Value("a"),
        StreamItem::Error(BraidError::stream_error("torn")),
        StreamItem::Value("never"),
    ]);

    // Act
    let mut pulled = from_stream(source).into_stream();

    // Assert
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut pulled, 500).await)), "a");
    let error = unwrap_error(&mut pulled, 500).await;
    assert_eq!(error.to_string(), "Stream processing error: torn");
    assert_stream_ended(&mut pulled, 500).await;
}

#[tokio::test]
async fn test_second_subscription_fails_because_pull_stream_is_single_use() {
    // Arrange
    let pushed = from_stream(stream::iter(vec![StreamItem::Value(7)]));
    let mut first = pushed.into_stream();

    // Act
    let mut second = pushed.into_stream();

    // Assert
    let error = unwrap_error(&mut second, 500).await;
    assert_eq!(
        error.to_string(),
        "Stream processing error: pull stream already consumed"
    );
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut first, 500).await)), 7);
}

#[tokio::test]
async fn test_cancelling_drops_the_pull_stream() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = mpsc::unbounded::<StreamItem<i32>>();
    let mut pulled = from_stream(rx).into_stream();
    tx.unbounded_send(StreamItem::Value(1))?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut pulled, 500).await)), 1);

    // Act
    pulled.subscription().cancel();
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    // Assert
    assert!(tx.is_closed());
    Ok(())
}
