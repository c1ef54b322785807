// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::concat::concat;
use braid_core::EventStream;

/// Plays `prefix`, then `main`.
pub fn start_with<T>(main: EventStream<T>, prefix: EventStream<T>) -> EventStream<T>
where
    T: Send + 'static,
{
    concat(vec![prefix, main])
}

/// Emits `values`, then plays `main`.
pub fn start_with_values<T>(main: EventStream<T>, values: Vec<T>) -> EventStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    start_with(main, EventStream::from_values(values))
}

/// Extension trait providing [`start_with`] and [`start_with_values`] as methods.
pub trait StartWithExt<T: Send + 'static> {
    fn start_with(self, prefix: EventStream<T>) -> EventStream<T>;

    fn start_with_values(self, values: Vec<T>) -> EventStream<T>
    where
        T: Clone + Sync;
}

impl<T: Send + 'static> StartWithExt<T> for EventStream<T> {
    fn start_with(self, prefix: EventStream<T>) -> EventStream<T> {
        start_with(self, prefix)
    }

    fn start_with_values(self, values: Vec<T>) -> EventStream<T>
    where
        T: Clone + Sync,
    {
        start_with_values(self, values)
    }
}
