// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::BraidError;
use crate::mailbox::{Actor, Mailbox};
use crate::notification::Notification;
use crate::observer::Observer;
use crate::subscription::Subscription;

struct Delivery<T> {
    observer: Arc<dyn Observer<T>>,
    subscription: Subscription,
    terminated: bool,
}

impl<T: Send + 'static> Actor for Delivery<T> {
    type Message = Notification<T>;

    fn handle(&mut self, notification: Notification<T>) {
        if self.terminated || self.subscription.is_cancelled() {
            trace!("dropping signal after termination");
            return;
        }

        let terminal = notification.is_terminal();
        self.terminated = terminal;
        let unwinding = CancelOnUnwind(&self.subscription);
        notification.deliver(&*self.observer);
        core::mem::forget(unwinding);

        if terminal {
            self.subscription.cancel();
        }
    }
}

// An observer that panics is treated as gone: its subscription is cancelled
// so producers and subjects stop delivering to it.
struct CancelOnUnwind<'a>(&'a Subscription);

impl Drop for CancelOnUnwind<'_> {
    fn drop(&mut self) {
        warn!("observer panicked, cancelling its subscription");
        self.0.cancel();
    }
}

/// Producer-side handle used to emit signals to one observer.
///
/// A `Subscriber` enforces the sequence contract on behalf of every source and
/// operator: signals from concurrent producers are serialized, nothing is
/// delivered after the first terminal signal or after the subscription is
/// cancelled, and delivering a terminal signal cancels the subscription so
/// that everything upstream of it is released.
///
/// Cloning yields another handle to the same emitter.
pub struct Subscriber<T: Send + 'static> {
    mailbox: Mailbox<Delivery<T>>,
    subscription: Subscription,
    done: Arc<AtomicBool>,
}

impl<T> Clone for Subscriber<T>
where
    T: Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            mailbox: self.mailbox.clone(),
            subscription: self.subscription.clone(),
            done: self.done.clone(),
        }
    }
}

impl<T: Send + 'static> Subscriber<T> {
    pub(crate) fn new(observer: Arc<dyn Observer<T>>, subscription: Subscription) -> Self {
        Self {
            mailbox: Mailbox::new(Delivery {
                observer,
                subscription: subscription.clone(),
                terminated: false,
            }),
            subscription,
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Emits a value.
    pub fn next(&self, value: T) {
        if self.is_closed() {
            return;
        }
        self.mailbox.send(Notification::Next(value));
    }

    /// Emits a terminal error; later signals are ignored.
    pub fn error(&self, error: BraidError) {
        if self.done.swap(true, Ordering::AcqRel) {
            return;
        }
        self.mailbox.send(Notification::Error(error));
    }

    /// Emits completion; later signals are ignored.
    pub fn complete(&self) {
        if self.done.swap(true, Ordering::AcqRel) {
            return;
        }
        self.mailbox.send(Notification::Complete);
    }

    /// Emits any signal.
    pub fn notify(&self, notification: Notification<T>) {
        match notification {
            Notification::Next(value) => self.next(value),
            Notification::Error(error) => self.error(error),
            Notification::Complete => self.complete(),
        }
    }

    /// Returns `true` once a terminal signal was emitted or the consumer cancelled.
    ///
    /// Synchronous producers check this between values to stop early.
    pub fn is_closed(&self) -> bool {
        self.done.load(Ordering::Acquire) || self.subscription.is_cancelled()
    }

    /// The subscription shared with the consumer.
    ///
    /// Operators attach their upstream subscriptions to it as children.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

/// Forwards every signal, so a `Subscriber` can observe an upstream directly.
impl<T: Send + 'static> Observer<T> for Subscriber<T> {
    fn on_next(&self, value: T) {
        self.next(value);
    }

    fn on_error(&self, error: BraidError) {
        self.error(error);
    }

    fn on_complete(&self) {
        self.complete();
    }
}
