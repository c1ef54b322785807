// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Serialized, non-blocking message processing for operator state.
//!
//! Every stateful operator keeps its state inside an [`Actor`] owned by a
//! [`Mailbox`]. Upstream callbacks never touch the state directly: they
//! [`send`](Mailbox::send) a message. Whichever caller finds the mailbox idle
//! becomes the drainer and handles queued messages, including the ones other
//! threads enqueue meanwhile, until the queue is empty.
//!
//! This gives each operator the two guarantees it relies on:
//!
//! - messages are handled one at a time, in enqueue order;
//! - a handler that synchronously triggers another `send` on the same mailbox
//!   (for example by subscribing to a source that emits immediately) does not
//!   deadlock; the new message is handled after the current one returns.
//!
//! No lock is held while a handler runs.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use crate::error::BraidError;
use crate::notification::Notification;
use crate::observer::Observer;

/// State machine driven by a [`Mailbox`].
pub trait Actor: Send + 'static {
    /// Input accepted by the actor.
    type Message: Send + 'static;

    /// Processes one message.
    fn handle(&mut self, message: Self::Message);
}

struct MailboxState<A: Actor> {
    queue: VecDeque<A::Message>,
    // Taken out by the draining caller
    actor: Option<A>,
    draining: bool,
}

/// Queue-and-drain front for an [`Actor`].
pub struct Mailbox<A: Actor> {
    state: Arc<Mutex<MailboxState<A>>>,
}

impl<A: Actor> Clone for Mailbox<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<A: Actor> Mailbox<A> {
    pub fn new(actor: A) -> Self {
        Self {
            state: Arc::new(Mutex::new(MailboxState {
                queue: VecDeque::new(),
                actor: Some(actor),
                draining: false,
            })),
        }
    }

    /// Creates a mailbox whose actor holds a weak handle to it.
    ///
    /// Actors that subscribe new upstreams while handling a message (inner
    /// streams, window selectors) use the handle to route those signals back
    /// into themselves without keeping the mailbox alive.
    pub fn new_cyclic<F>(build: F) -> Self
    where
        F: FnOnce(WeakMailbox<A>) -> A,
    {
        Self {
            state: Arc::new_cyclic(|weak| {
                let actor = build(WeakMailbox {
                    state: weak.clone(),
                });
                Mutex::new(MailboxState {
                    queue: VecDeque::new(),
                    actor: Some(actor),
                    draining: false,
                })
            }),
        }
    }

    pub fn downgrade(&self) -> WeakMailbox<A> {
        WeakMailbox {
            state: Arc::downgrade(&self.state),
        }
    }

    /// Enqueues `message` and drains the queue if nobody else is.
    ///
    /// A panicking handler unwinds through the caller that was draining; the
    /// actor is put back first, so later sends keep being handled.
    pub fn send(&self, message: A::Message) {
        let actor = {
            let mut state = self.state.lock();
            state.queue.push_back(message);
            if state.draining {
                return;
            }
            let Some(actor) = state.actor.take() else {
                state.queue.clear();
                return;
            };
            state.draining = true;
            actor
        };

        let mut drain = Drain {
            state: &self.state,
            actor: Some(actor),
        };
        loop {
            let next = {
                let mut state = self.state.lock();
                match state.queue.pop_front() {
                    Some(message) => message,
                    None => {
                        // Released under the same lock that saw the queue empty
                        state.actor = drain.actor.take();
                        state.draining = false;
                        return;
                    }
                }
            };
            if let Some(actor) = drain.actor.as_mut() {
                actor.handle(next);
            }
        }
    }

    /// Wraps the mailbox in an [`Observer`] that maps every signal to a message.
    pub fn observer<T, F>(&self, map: F) -> MailboxObserver<A, F>
    where
        F: Fn(Notification<T>) -> A::Message + Send + Sync + 'static,
    {
        MailboxObserver {
            mailbox: self.clone(),
            map,
        }
    }
}

// Hands the actor back if a handler unwinds mid-drain.
struct Drain<'a, A: Actor> {
    state: &'a Mutex<MailboxState<A>>,
    actor: Option<A>,
}

impl<A: Actor> Drop for Drain<'_, A> {
    fn drop(&mut self) {
        if let Some(actor) = self.actor.take() {
            warn!("mailbox handler panicked, resuming with the next message");
            let mut state = self.state.lock();
            state.actor = Some(actor);
            state.draining = false;
        }
    }
}

/// Non-owning handle to a [`Mailbox`].
pub struct WeakMailbox<A: Actor> {
    state: Weak<Mutex<MailboxState<A>>>,
}

impl<A: Actor> Clone for WeakMailbox<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<A: Actor> WeakMailbox<A> {
    /// Returns the mailbox if it is still alive.
    pub fn upgrade(&self) -> Option<Mailbox<A>> {
        self.state.upgrade().map(|state| Mailbox { state })
    }
}

/// Observer that forwards signals into a [`Mailbox`].
///
/// Operators subscribe to their sources with one of these, tagging each
/// signal with the source it came from.
pub struct MailboxObserver<A: Actor, F> {
    mailbox: Mailbox<A>,
    map: F,
}

impl<T, A, F> Observer<T> for MailboxObserver<A, F>
where
    A: Actor,
    F: Fn(Notification<T>) -> A::Message + Send + Sync + 'static,
{
    fn on_next(&self, value: T) {
        self.mailbox.send((self.map)(Notification::Next(value)));
    }

    fn on_error(&self, error: BraidError) {
        self.mailbox.send((self.map)(Notification::Error(error)));
    }

    fn on_complete(&self) {
        self.mailbox.send((self.map)(Notification::Complete));
    }
}
