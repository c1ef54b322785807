// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;
use std::sync::Arc;

use crate::error::BraidError;
use crate::observer::{FnObserver, Observer};
use crate::subscriber::Subscriber;
use crate::subscription::Subscription;

type OnSubscribe<T> = dyn Fn(Subscriber<T>) + Send + Sync;

/// A cold, push-based sequence of values.
///
/// An `EventStream` is a recipe: nothing happens until [`subscribe`](Self::subscribe)
/// is called, and every subscription runs the recipe again with its own
/// [`Subscriber`]. Cloning the handle is cheap and shares the recipe.
///
/// # Example
///
/// ```
/// use braid_core::EventStream;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
///
/// EventStream::range(1, 3).subscribe_fn(move |v| sink.lock().unwrap().push(v));
///
/// assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
/// ```
pub struct EventStream<T: Send + 'static> {
    on_subscribe: Arc<OnSubscribe<T>>,
}

impl<T: Send + 'static> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            on_subscribe: self.on_subscribe.clone(),
        }
    }
}

impl<T: Send + 'static> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> EventStream<T> {
    /// Builds a stream from its subscribe function.
    ///
    /// The function receives the emitter for one subscription. It may emit
    /// synchronously, hand the emitter to another thread or task, and should
    /// attach whatever it needs released on cancellation to
    /// `subscriber.subscription()`.
    pub fn create<F>(on_subscribe: F) -> Self
    where
        F: Fn(Subscriber<T>) + Send + Sync + 'static,
    {
        Self {
            on_subscribe: Arc::new(on_subscribe),
        }
    }

    /// Starts one execution delivering to `observer`.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T>,
    {
        let subscription = Subscription::new();
        let subscriber = Subscriber::new(Arc::new(observer), subscription.clone());
        (self.on_subscribe)(subscriber);
        subscription
    }

    /// Subscribes with a value callback; errors are logged, completion ignored.
    pub fn subscribe_fn<N>(&self, on_next: N) -> Subscription
    where
        N: Fn(T) + Send + Sync + 'static,
    {
        self.subscribe(FnObserver::new(
            on_next,
            |error: BraidError| warn!("unhandled stream error: {}", error),
            || {},
        ))
    }

    /// Subscribes with one callback per signal.
    pub fn subscribe_with<N, E, C>(&self, on_next: N, on_error: E, on_complete: C) -> Subscription
    where
        N: Fn(T) + Send + Sync + 'static,
        E: Fn(BraidError) + Send + Sync + 'static,
        C: Fn() + Send + Sync + 'static,
    {
        self.subscribe(FnObserver::new(on_next, on_error, on_complete))
    }
}

// In-memory sources

impl<T: Send + 'static> EventStream<T> {
    /// Emits `value` then completes.
    pub fn just(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::create(move |subscriber| {
            subscriber.next(value.clone());
            subscriber.complete();
        })
    }

    /// Emits every value in order then completes.
    ///
    /// Emission stops early once the subscriber is cancelled.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone + Sync,
    {
        let values: Arc<[T]> = values.into_iter().collect();
        Self::create(move |subscriber| {
            for value in values.iter() {
                if subscriber.is_closed() {
                    return;
                }
                subscriber.next(value.clone());
            }
            subscriber.complete();
        })
    }

    /// Completes immediately.
    pub fn empty() -> Self {
        Self::create(|subscriber| subscriber.complete())
    }

    /// Never emits and never terminates.
    pub fn never() -> Self {
        Self::create(|_| {})
    }

    /// Fails immediately with `error`.
    pub fn error(error: BraidError) -> Self {
        Self::create(move |subscriber| subscriber.error(error.clone()))
    }
}

impl EventStream<i64> {
    /// Emits `count` consecutive integers starting at `start`.
    ///
    /// The sequence stops at `i64::MAX` even if `count` reaches past it.
    pub fn range(start: i64, count: usize) -> Self {
        Self::create(move |subscriber| {
            let values = (0..count).map_while(|offset| {
                i64::try_from(offset)
                    .ok()
                    .and_then(|offset| start.checked_add(offset))
            });
            for value in values {
                if subscriber.is_closed() {
                    return;
                }
                subscriber.next(value);
            }
            subscriber.complete();
        })
    }
}

impl<T> FromIterator<T> for EventStream<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}
