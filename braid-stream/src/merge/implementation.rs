// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, EventStream, Observer, Subscriber};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct MergeObserver<T: Send + 'static> {
    downstream: Subscriber<T>,
    remaining: Arc<AtomicUsize>,
}

impl<T: Send + 'static> Observer<T> for MergeObserver<T> {
    fn on_next(&self, value: T) {
        self.downstream.next(value);
    }

    fn on_error(&self, error: BraidError) {
        self.downstream.error(error);
    }

    fn on_complete(&self) {
        if self.remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            debug!("merge completed");
            self.downstream.complete();
        }
    }
}

/// Subscribes to every stream and forwards their values as they arrive.
pub fn merge<T>(streams: Vec<EventStream<T>>) -> EventStream<T>
where
    T: Send + 'static,
{
    EventStream::create(move |subscriber: Subscriber<T>| {
        if streams.is_empty() {
            subscriber.complete();
            return;
        }

        let parent = subscriber.subscription().clone();
        let remaining = Arc::new(AtomicUsize::new(streams.len()));

        for stream in &streams {
            if parent.is_cancelled() {
                return;
            }
            parent.add(stream.subscribe(MergeObserver {
                downstream: subscriber.clone(),
                remaining: remaining.clone(),
            }));
        }
    })
}

/// Extension trait providing [`merge`] as a method.
pub trait MergeExt<T: Send + 'static> {
    /// Interleaves this stream with `other`.
    fn merge_with(self, other: EventStream<T>) -> EventStream<T>;
}

impl<T: Send + 'static> MergeExt<T> for EventStream<T> {
    fn merge_with(self, other: EventStream<T>) -> EventStream<T> {
        merge(vec![self, other])
    }
}
