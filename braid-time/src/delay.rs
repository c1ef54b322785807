// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-shifting of a push stream.
//!
//! Values and completion are re-emitted `duration` after they arrived, in
//! arrival order. Errors are forwarded at once and drop whatever is still
//! waiting.

use braid_core::{BraidError, EventStream, Notification, Observer, Subscriber};
use braid_runtime::{BraidTask, Timer};
use core::time::Duration;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use futures::StreamExt;

use crate::clock::sleep_until;

struct DelayObserver<T: Send + 'static, TM: Timer> {
    pending: UnboundedSender<(TM::Instant, Notification<T>)>,
    timer: TM,
    duration: Duration,
    downstream: Subscriber<T>,
}

impl<T: Send + 'static, TM: Timer> DelayObserver<T, TM> {
    fn schedule(&self, notification: Notification<T>) {
        let due = self.timer.now() + self.duration;
        if self.pending.unbounded_send((due, notification)).is_err() {
            trace!("delay dropped a signal after its task stopped");
        }
    }
}

impl<T: Send + 'static, TM: Timer> Observer<T> for DelayObserver<T, TM> {
    fn on_next(&self, value: T) {
        self.schedule(Notification::Next(value));
    }

    fn on_error(&self, error: BraidError) {
        self.downstream.error(error);
    }

    fn on_complete(&self) {
        self.schedule(Notification::Complete);
    }
}

/// Re-emits every value and the completion of `source` after `duration`.
pub fn delay<T, TM>(source: EventStream<T>, timer: TM, duration: Duration) -> EventStream<T>
where
    T: Send + 'static,
    TM: Timer,
{
    EventStream::create(move |subscriber: Subscriber<T>| {
        let parent = subscriber.subscription().clone();
        let (pending, mut scheduled) = unbounded::<(TM::Instant, Notification<T>)>();

        let clock = timer.clone();
        let downstream = subscriber.clone();
        BraidTask::spawn(&parent, move |_| async move {
            while let Some((deadline, notification)) = scheduled.next().await {
                sleep_until(&clock, deadline).await;
                downstream.notify(notification);
            }
        });

        parent.add(source.subscribe(DelayObserver {
            pending,
            timer: timer.clone(),
            duration,
            downstream: subscriber,
        }));
    })
}

/// Extension trait providing [`delay`] as a method.
pub trait DelayExt<T: Send + 'static> {
    /// Shifts this stream later in time by `duration`.
    fn delay<TM: Timer>(self, timer: TM, duration: Duration) -> EventStream<T>;
}

impl<T: Send + 'static> DelayExt<T> for EventStream<T> {
    fn delay<TM: Timer>(self, timer: TM, duration: Duration) -> EventStream<T> {
        delay(self, timer, duration)
    }
}
