// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{
    Actor, EventStream, Mailbox, Notification, SerialSubscription, Subscriber, WeakMailbox,
};

enum SwitchMessage<T: Send + 'static> {
    Outer(Notification<EventStream<T>>),
    Inner(u64, Notification<T>),
}

struct SwitchState<T: Send + 'static> {
    generation: u64,
    inner_active: bool,
    outer_done: bool,
    inner: SerialSubscription,
    mailbox: WeakMailbox<SwitchState<T>>,
    downstream: Subscriber<T>,
}

impl<T: Send + 'static> SwitchState<T> {
    fn switch_to(&mut self, stream: EventStream<T>) {
        self.generation += 1;
        self.inner.cancel_current();
        self.inner_active = true;

        let Some(mailbox) = self.mailbox.upgrade() else {
            return;
        };
        let generation = self.generation;
        let subscription =
            stream.subscribe(mailbox.observer(move |n| SwitchMessage::Inner(generation, n)));
        self.inner.replace(subscription);
    }

    fn complete_if_idle(&self) {
        if self.outer_done && !self.inner_active {
            debug!("switch_on_next completed");
            self.downstream.complete();
        }
    }
}

impl<T: Send + 'static> Actor for SwitchState<T> {
    type Message = SwitchMessage<T>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match message {
            SwitchMessage::Inner(generation, _) if generation != self.generation => {
                trace!("switch_on_next discarded a signal from superseded inner {}", generation);
            }
            SwitchMessage::Outer(Notification::Next(stream)) => self.switch_to(stream),
            SwitchMessage::Outer(Notification::Complete) => {
                self.outer_done = true;
                self.complete_if_idle();
            }
            SwitchMessage::Inner(_, Notification::Next(value)) => self.downstream.next(value),
            SwitchMessage::Inner(_, Notification::Complete) => {
                self.inner_active = false;
                self.complete_if_idle();
            }
            SwitchMessage::Outer(Notification::Error(error))
            | SwitchMessage::Inner(_, Notification::Error(error)) => self.downstream.error(error),
        }
    }
}

/// Mirrors the most recent inner stream of `sources`.
pub fn switch_on_next<T>(sources: EventStream<EventStream<T>>) -> EventStream<T>
where
    T: Send + 'static,
{
    EventStream::create(move |subscriber: Subscriber<T>| {
        let parent = subscriber.subscription().clone();
        let inner = SerialSubscription::new();
        inner.attach_to(&parent);

        let mailbox = Mailbox::new_cyclic(|weak| SwitchState {
            generation: 0,
            inner_active: false,
            outer_done: false,
            inner,
            mailbox: weak,
            downstream: subscriber,
        });

        parent.add(sources.subscribe(mailbox.observer(SwitchMessage::Outer)));
    })
}

/// Extension trait providing [`switch_on_next`] on streams of streams.
pub trait SwitchOnNextExt<T: Send + 'static> {
    fn switch_on_next(self) -> EventStream<T>;
}

impl<T: Send + 'static> SwitchOnNextExt<T> for EventStream<EventStream<T>> {
    fn switch_on_next(self) -> EventStream<T> {
        switch_on_next(self)
    }
}
