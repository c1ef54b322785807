// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use super::combined_state::CombinedState;
use braid_core::{invoke_selector, Actor, EventStream, Mailbox, Notification, Subscriber};
use std::sync::Arc;

enum PairMessage<A, B> {
    Left(Notification<A>),
    Right(Notification<B>),
}

struct PairState<A, B, R, F>
where
    R: Send + 'static,
{
    left: Option<A>,
    right: Option<B>,
    left_done: bool,
    right_done: bool,
    combiner: Arc<F>,
    downstream: Subscriber<R>,
}

impl<A, B, R, F> PairState<A, B, R, F>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    fn emit(&self) {
        let (Some(a), Some(b)) = (&self.left, &self.right) else {
            return;
        };
        let (a, b) = (a.clone(), b.clone());
        match invoke_selector("combine_latest", || (self.combiner)(a, b)) {
            Ok(value) => self.downstream.next(value),
            Err(error) => self.downstream.error(error),
        }
    }

    fn on_source_complete(&self, emitted: bool) {
        if !emitted || (self.left_done && self.right_done) {
            debug!("combine_latest completed");
            self.downstream.complete();
        }
    }
}

impl<A, B, R, F> Actor for PairState<A, B, R, F>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    type Message = PairMessage<A, B>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match message {
            PairMessage::Left(Notification::Next(a)) => {
                self.left = Some(a);
                self.emit();
            }
            PairMessage::Right(Notification::Next(b)) => {
                self.right = Some(b);
                self.emit();
            }
            PairMessage::Left(Notification::Error(error))
            | PairMessage::Right(Notification::Error(error)) => self.downstream.error(error),
            PairMessage::Left(Notification::Complete) => {
                self.left_done = true;
                self.on_source_complete(self.left.is_some());
            }
            PairMessage::Right(Notification::Complete) => {
                self.right_done = true;
                self.on_source_complete(self.right.is_some());
            }
        }
    }
}

/// Combines the latest values of `left` and `right` on every arrival.
pub fn combine_latest<A, B, R, F>(
    left: EventStream<A>,
    right: EventStream<B>,
    combiner: F,
) -> EventStream<R>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    let combiner = Arc::new(combiner);

    EventStream::create(move |subscriber: Subscriber<R>| {
        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new(PairState {
            left: None,
            right: None,
            left_done: false,
            right_done: false,
            combiner: combiner.clone(),
            downstream: subscriber,
        });

        parent.add(left.subscribe(mailbox.observer(PairMessage::Left)));
        if !parent.is_cancelled() {
            parent.add(right.subscribe(mailbox.observer(PairMessage::Right)));
        }
    })
}

struct LatestState<T, R, F>
where
    R: Send + 'static,
{
    slots: Vec<Option<T>>,
    completed: Vec<bool>,
    combiner: Arc<F>,
    downstream: Subscriber<R>,
}

impl<T, R, F> Actor for LatestState<T, R, F>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(&CombinedState<T>) -> R + Send + Sync + 'static,
{
    type Message = (usize, Notification<T>);

    fn handle(&mut self, (index, notification): Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match notification {
            Notification::Next(value) => {
                self.slots[index] = Some(value);
                // All slots filled: snapshot them
                let Some(values) = self.slots.iter().cloned().collect::<Option<Vec<T>>>() else {
                    return;
                };
                let state = CombinedState::new(values, index);
                match invoke_selector("combine_latest", || (self.combiner)(&state)) {
                    Ok(value) => self.downstream.next(value),
                    Err(error) => self.downstream.error(error),
                }
            }
            Notification::Error(error) => self.downstream.error(error),
            Notification::Complete => {
                self.completed[index] = true;
                if self.slots[index].is_none() || self.completed.iter().all(|done| *done) {
                    debug!("combine_latest completed");
                    self.downstream.complete();
                }
            }
        }
    }
}

/// Combines the latest values of any number of same-typed streams.
///
/// The combiner sees a [`CombinedState`] with the values in source order.
pub fn combine_latest_all<T, R, F>(streams: Vec<EventStream<T>>, combiner: F) -> EventStream<R>
where
    T: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(&CombinedState<T>) -> R + Send + Sync + 'static,
{
    let combiner = Arc::new(combiner);

    EventStream::create(move |subscriber: Subscriber<R>| {
        if streams.is_empty() {
            subscriber.complete();
            return;
        }

        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new(LatestState {
            slots: vec![None; streams.len()],
            completed: vec![false; streams.len()],
            combiner: combiner.clone(),
            downstream: subscriber,
        });

        for (index, stream) in streams.iter().enumerate() {
            if parent.is_cancelled() {
                return;
            }
            parent.add(stream.subscribe(mailbox.observer(move |n| (index, n))));
        }
    })
}

/// Extension trait providing [`combine_latest`] as a method.
pub trait CombineLatestExt<A: Clone + Send + 'static> {
    /// Combines the latest values of this stream and `other`.
    fn combine_latest<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static;
}

impl<A: Clone + Send + 'static> CombineLatestExt<A> for EventStream<A> {
    fn combine_latest<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        combine_latest(self, other, combiner)
    }
}
