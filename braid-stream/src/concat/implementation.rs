// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{
    Actor, EventStream, Mailbox, Notification, SerialSubscription, Subscriber, WeakMailbox,
};
use std::sync::Arc;

enum ConcatMessage<T> {
    Advance,
    Source(Notification<T>),
}

struct ConcatState<T: Send + 'static> {
    sources: Arc<[EventStream<T>]>,
    next: usize,
    current: SerialSubscription,
    mailbox: WeakMailbox<ConcatState<T>>,
    downstream: Subscriber<T>,
}

impl<T: Send + 'static> ConcatState<T> {
    fn subscribe_next(&mut self) {
        let Some(source) = self.sources.get(self.next) else {
            debug!("concat completed after {} sources", self.next);
            self.downstream.complete();
            return;
        };
        self.next += 1;

        let Some(mailbox) = self.mailbox.upgrade() else {
            return;
        };
        // A synchronous completion is queued behind this call
        let subscription = source.subscribe(mailbox.observer(ConcatMessage::Source));
        self.current.replace(subscription);
    }
}

impl<T: Send + 'static> Actor for ConcatState<T> {
    type Message = ConcatMessage<T>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match message {
            ConcatMessage::Advance | ConcatMessage::Source(Notification::Complete) => {
                self.subscribe_next();
            }
            ConcatMessage::Source(Notification::Next(value)) => self.downstream.next(value),
            ConcatMessage::Source(Notification::Error(error)) => self.downstream.error(error),
        }
    }
}

/// Subscribes to each stream in turn, after the previous one completed.
pub fn concat<T>(streams: Vec<EventStream<T>>) -> EventStream<T>
where
    T: Send + 'static,
{
    let sources: Arc<[EventStream<T>]> = streams.into();

    EventStream::create(move |subscriber: Subscriber<T>| {
        let current = SerialSubscription::new();
        current.attach_to(subscriber.subscription());

        let mailbox = Mailbox::new_cyclic(|weak| ConcatState {
            sources: sources.clone(),
            next: 0,
            current,
            mailbox: weak,
            downstream: subscriber,
        });
        mailbox.send(ConcatMessage::Advance);
    })
}

/// Extension trait providing [`concat`] as a method.
pub trait ConcatExt<T: Send + 'static> {
    /// Plays `other` after this stream completes.
    fn concat_with(self, other: EventStream<T>) -> EventStream<T>;
}

impl<T: Send + 'static> ConcatExt<T> for EventStream<T> {
    fn concat_with(self, other: EventStream<T>) -> EventStream<T> {
        concat(vec![self, other])
    }
}
