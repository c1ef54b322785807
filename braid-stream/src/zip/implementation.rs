// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{invoke_selector, Actor, EventStream, Mailbox, Notification, Subscriber};
use std::collections::VecDeque;
use std::sync::Arc;

enum ZipMessage<A, B> {
    Left(Notification<A>),
    Right(Notification<B>),
}

struct ZipState<A, B, R, F>
where
    R: Send + 'static,
{
    left: VecDeque<A>,
    right: VecDeque<B>,
    left_done: bool,
    right_done: bool,
    combiner: Arc<F>,
    downstream: Subscriber<R>,
}

impl<A, B, R, F> ZipState<A, B, R, F>
where
    A: Send + 'static,
    B: Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    fn emit_pairs(&mut self) {
        while !self.left.is_empty() && !self.right.is_empty() {
            let (Some(a), Some(b)) = (self.left.pop_front(), self.right.pop_front()) else {
                return;
            };
            let combiner = &self.combiner;
            match invoke_selector("zip", || combiner(a, b)) {
                Ok(value) => self.downstream.next(value),
                Err(error) => {
                    self.downstream.error(error);
                    return;
                }
            }
        }
        self.complete_if_exhausted();
    }

    fn complete_if_exhausted(&mut self) {
        let left_exhausted = self.left_done && self.left.is_empty();
        let right_exhausted = self.right_done && self.right.is_empty();
        if left_exhausted || right_exhausted {
            debug!(
                "zip completed, discarding {} unpaired values",
                self.left.len() + self.right.len()
            );
            self.left.clear();
            self.right.clear();
            self.downstream.complete();
        }
    }
}

impl<A, B, R, F> Actor for ZipState<A, B, R, F>
where
    A: Send + 'static,
    B: Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    type Message = ZipMessage<A, B>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match message {
            ZipMessage::Left(Notification::Next(a)) => {
                self.left.push_back(a);
                self.emit_pairs();
            }
            ZipMessage::Right(Notification::Next(b)) => {
                self.right.push_back(b);
                self.emit_pairs();
            }
            ZipMessage::Left(Notification::Error(error))
            | ZipMessage::Right(Notification::Error(error)) => self.downstream.error(error),
            ZipMessage::Left(Notification::Complete) => {
                self.left_done = true;
                self.complete_if_exhausted();
            }
            ZipMessage::Right(Notification::Complete) => {
                self.right_done = true;
                self.complete_if_exhausted();
            }
        }
    }
}

/// Pairs the i-th value of `left` with the i-th value of `right`.
///
/// See the [module documentation](crate::zip) for the completion rules.
pub fn zip<A, B, R, F>(left: EventStream<A>, right: EventStream<B>, combiner: F) -> EventStream<R>
where
    A: Send + 'static,
    B: Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    let combiner = Arc::new(combiner);

    EventStream::create(move |subscriber: Subscriber<R>| {
        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new(ZipState {
            left: VecDeque::new(),
            right: VecDeque::new(),
            left_done: false,
            right_done: false,
            combiner: combiner.clone(),
            downstream: subscriber,
        });

        parent.add(left.subscribe(mailbox.observer(ZipMessage::Left)));
        if !parent.is_cancelled() {
            parent.add(right.subscribe(mailbox.observer(ZipMessage::Right)));
        }
    })
}

/// Extension trait providing [`zip`] as a method.
pub trait ZipExt<A: Send + 'static> {
    /// Pairs this stream with `other` by arrival index.
    fn zip_with<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static;
}

impl<A: Send + 'static> ZipExt<A> for EventStream<A> {
    fn zip_with<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        zip(self, other, combiner)
    }
}
