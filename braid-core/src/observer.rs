// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::BraidError;
use std::sync::Arc;

/// Consumer of a push sequence.
///
/// Methods take `&self` because signals may originate on any thread; the
/// [`Subscriber`](crate::Subscriber) in front of an observer guarantees the
/// calls never overlap and that at most one terminal call is made.
pub trait Observer<T>: Send + Sync + 'static {
    /// Called for every value.
    fn on_next(&self, value: T);

    /// Called once if the sequence fails.
    fn on_error(&self, error: BraidError) {
        warn!("unhandled stream error: {}", error);
    }

    /// Called once if the sequence completes.
    fn on_complete(&self) {}
}

impl<T, O> Observer<T> for Arc<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: BraidError) {
        (**self).on_error(error);
    }

    fn on_complete(&self) {
        (**self).on_complete();
    }
}

/// [`Observer`] built from three closures.
pub struct FnObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_complete: C,
}

impl<N, E, C> FnObserver<N, E, C> {
    pub fn new(on_next: N, on_error: E, on_complete: C) -> Self {
        Self {
            on_next,
            on_error,
            on_complete,
        }
    }
}

impl<T, N, E, C> Observer<T> for FnObserver<N, E, C>
where
    N: Fn(T) + Send + Sync + 'static,
    E: Fn(BraidError) + Send + Sync + 'static,
    C: Fn() + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&self, error: BraidError) {
        (self.on_error)(error);
    }

    fn on_complete(&self) {
        (self.on_complete)();
    }
}
