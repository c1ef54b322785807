// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{invoke_selector, Actor, EventStream, Mailbox, Notification, Subscriber};
use std::marker::PhantomData;
use std::sync::Arc;

enum SampleMessage<A, B> {
    Main(Notification<A>),
    Other(Notification<B>),
}

struct SampleState<A, B, R, F>
where
    R: Send + 'static,
{
    latest: Option<B>,
    _main: PhantomData<fn(A)>,
    combiner: Arc<F>,
    downstream: Subscriber<R>,
}

impl<A, B, R, F> Actor for SampleState<A, B, R, F>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    type Message = SampleMessage<A, B>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        match message {
            SampleMessage::Main(Notification::Next(a)) => {
                let Some(b) = self.latest.clone() else {
                    trace!("with_latest_from dropped a value: other has not emitted");
                    return;
                };
                match invoke_selector("with_latest_from", || (self.combiner)(a, b)) {
                    Ok(value) => self.downstream.next(value),
                    Err(error) => self.downstream.error(error),
                }
            }
            SampleMessage::Other(Notification::Next(b)) => self.latest = Some(b),
            SampleMessage::Main(Notification::Error(error))
            | SampleMessage::Other(Notification::Error(error)) => self.downstream.error(error),
            SampleMessage::Main(Notification::Complete) => {
                debug!("with_latest_from completed");
                self.downstream.complete();
            }
            SampleMessage::Other(Notification::Complete) => {}
        }
    }
}

/// Combines every `main` value with the latest value of `other`.
pub fn with_latest_from<A, B, R, F>(
    main: EventStream<A>,
    other: EventStream<B>,
    combiner: F,
) -> EventStream<R>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    R: Send + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    let combiner = Arc::new(combiner);

    EventStream::create(move |subscriber: Subscriber<R>| {
        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new(SampleState {
            latest: None,
            _main: PhantomData,
            combiner: combiner.clone(),
            downstream: subscriber,
        });

        parent.add(other.subscribe(mailbox.observer(SampleMessage::Other)));
        if !parent.is_cancelled() {
            parent.add(main.subscribe(mailbox.observer(SampleMessage::Main)));
        }
    })
}

/// Extension trait providing [`with_latest_from`] as a method.
pub trait WithLatestFromExt<A: Send + 'static> {
    /// Samples `other` on every value of this stream.
    fn with_latest_from<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static;
}

impl<A: Send + 'static> WithLatestFromExt<A> for EventStream<A> {
    fn with_latest_from<B, R, F>(self, other: EventStream<B>, combiner: F) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        R: Send + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        with_latest_from(self, other, combiner)
    }
}
