// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cancellation handles linking producers and consumers.
//!
//! A [`Subscription`] is shared by the producer (through its
//! [`Subscriber`](crate::Subscriber)) and the consumer that received it from
//! `subscribe`. Operators attach the subscriptions they create upstream as
//! children, so one `cancel()` at the bottom of a pipeline tears down every
//! source, inner stream and window that feeds it.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::sync::Arc;

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a [`Subscription`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

enum Teardown {
    Child(Subscription),
    Action(Box<dyn FnOnce() + Send>),
}

impl Teardown {
    fn run(self) {
        match self {
            Teardown::Child(child) => child.cancel(),
            Teardown::Action(action) => action(),
        }
    }
}

struct Inner {
    id: SubscriptionId,
    cancelled: AtomicBool,
    event: Event,
    teardowns: Mutex<Vec<Teardown>>,
}

/// Live link between one push sequence and its consumer.
///
/// Cloning yields another handle to the same subscription. `cancel()` is
/// idempotent; once it returns, no new signal is delivered to the consumer
/// and every child subscription and teardown action has been run.
///
/// # Example
///
/// ```
/// use braid_core::Subscription;
///
/// let parent = Subscription::new();
/// let child = Subscription::new();
/// parent.add(child.clone());
///
/// parent.cancel();
/// assert!(child.is_cancelled());
/// ```
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    /// Creates a new, active subscription.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                id: SubscriptionId(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed)),
                cancelled: AtomicBool::new(false),
                event: Event::new(),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Returns this subscription's identifier.
    pub fn id(&self) -> SubscriptionId {
        self.inner.id
    }

    /// Cancels the subscription, its children and its teardown actions.
    pub fn cancel(&self) {
        if self.inner.cancelled.swap(true, Ordering::AcqRel) {
            return;
        }

        trace!("subscription {:?} cancelled", self.inner.id);
        self.inner.event.notify(usize::MAX);

        // Run outside the lock: children may cascade into arbitrary code
        let teardowns = core::mem::take(&mut *self.inner.teardowns.lock());
        for teardown in teardowns {
            teardown.run();
        }
    }

    /// Checks whether the subscription has been cancelled (non-blocking).
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::Acquire)
    }

    /// Attaches `child`, cancelling it together with this subscription.
    ///
    /// A child added after cancellation is cancelled immediately.
    pub fn add(&self, child: Subscription) {
        self.push(Teardown::Child(child));
    }

    /// Registers an action to run once when this subscription is cancelled.
    pub fn add_teardown<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.push(Teardown::Action(Box::new(action)));
    }

    /// Detaches a previously added child without cancelling it.
    pub fn remove(&self, child: &Subscription) {
        let id = child.id();
        self.inner
            .teardowns
            .lock()
            .retain(|teardown| !matches!(teardown, Teardown::Child(c) if c.id() == id));
    }

    /// Waits asynchronously until the subscription is cancelled.
    ///
    /// Timed producers race their sleeps against this future.
    pub fn cancelled(&self) -> Cancelled<'_> {
        Cancelled {
            subscription: self,
            listener: None,
        }
    }

    fn push(&self, teardown: Teardown) {
        {
            let mut teardowns = self.inner.teardowns.lock();
            // cancel() sets the flag before draining, so checking under the lock
            // guarantees the teardown is either drained or run right here
            if !self.is_cancelled() {
                teardowns.push(teardown);
                return;
            }
        }
        teardown.run();
    }

    #[cfg(test)]
    fn teardown_count(&self) -> usize {
        self.inner.teardowns.lock().len()
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.inner.id)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Future returned by [`Subscription::cancelled()`].
pub struct Cancelled<'a> {
    subscription: &'a Subscription,
    listener: Option<EventListener>,
}

impl Future for Cancelled<'_> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        loop {
            if self.subscription.is_cancelled() {
                return Poll::Ready(());
            }

            match self.listener.as_mut() {
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    self.listener = None;
                }
                // Re-check after registering: cancel() may have run in between
                None => self.listener = Some(self.subscription.inner.event.listen()),
            }
        }
    }
}

/// Holds at most one child subscription; replacing it cancels the previous one.
///
/// Used by operators that hop between upstreams, such as `switch_on_next`.
#[derive(Clone, Default)]
pub struct SerialSubscription {
    state: Arc<Mutex<SerialState>>,
}

#[derive(Default)]
struct SerialState {
    current: Option<Subscription>,
    cancelled: bool,
}

impl SerialSubscription {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `next`, cancelling whatever was stored before.
    ///
    /// If the slot itself was cancelled, `next` is cancelled instead.
    pub fn replace(&self, next: Subscription) {
        let previous = {
            let mut state = self.state.lock();
            if state.cancelled {
                None
            } else {
                Some(state.current.replace(next.clone()))
            }
        };

        match previous {
            Some(Some(previous)) => previous.cancel(),
            Some(None) => {}
            None => next.cancel(),
        }
    }

    /// Cancels the stored subscription, leaving the slot empty but usable.
    pub fn cancel_current(&self) {
        let current = self.state.lock().current.take();
        if let Some(current) = current {
            current.cancel();
        }
    }

    /// Cancels the stored subscription and every later replacement.
    pub fn cancel(&self) {
        let current = {
            let mut state = self.state.lock();
            state.cancelled = true;
            state.current.take()
        };
        if let Some(current) = current {
            current.cancel();
        }
    }

    /// Attaches the slot to `parent` so that cancelling `parent` cancels it.
    pub fn attach_to(&self, parent: &Subscription) {
        let slot = self.clone();
        parent.add_teardown(move || slot.cancel());
    }
}
