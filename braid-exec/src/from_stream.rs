// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, EventStream, StreamItem};
use braid_runtime::BraidTask;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;

/// Pushes the items of a `futures::Stream` into an [`EventStream`].
///
/// The pull stream is driven by a task spawned at subscribe time and dropped
/// when the subscription is cancelled. An item `StreamItem::Error` terminates
/// the push stream with that error; the end of the pull stream completes it.
///
/// A pull stream can only be consumed once: subscribing a second time fails
/// the new subscription with a stream error.
pub fn from_stream<T, S>(stream: S) -> EventStream<T>
where
    T: Send + 'static,
    S: Stream<Item = StreamItem<T>> + Send + 'static,
{
    let slot = Arc::new(Mutex::new(Some(stream)));

    EventStream::create(move |subscriber| {
        let Some(stream) = slot.lock().take() else {
            subscriber.error(BraidError::stream_error("pull stream already consumed"));
            return;
        };

        let subscription = subscriber.subscription().clone();
        BraidTask::spawn(&subscription, move |_| async move {
            let mut stream = core::pin::pin!(stream);
            while let Some(item) = stream.next().await {
                match item {
                    StreamItem::Value(value) => subscriber.next(value),
                    StreamItem::Error(error) => {
                        subscriber.error(error);
                        return;
                    }
                }
            }
            subscriber.complete();
        });
    })
}
