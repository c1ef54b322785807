// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber entry points into a push pipeline.
//!
//! A [`Subject`] is both a producer handle (`next`, `error`, `complete`) and a
//! source ([`as_stream`](Subject::as_stream)). Every signal is broadcast to the
//! observers subscribed at that moment.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers only see what is pushed after they subscribed,
//!   unless the subject was built with [`Subject::replay`].
//! - **Terminal**: after `error` or `complete`, pushes return
//!   [`SubjectError::Closed`] and new subscribers receive the terminal signal
//!   right away (after the replayed history for a replay subject).
//! - **Reentrant**: an observer may push into the subject it observes; the
//!   signal is queued and delivered after the current one.
//! - **Lazy pruning**: cancelled subscribers are dropped on the next push.
//!
//! ## Example
//!
//! ```
//! use braid_core::Subject;
//! use std::sync::{Arc, Mutex};
//!
//! let subject = Subject::<i32>::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! subject.as_stream().subscribe_fn(move |v| sink.lock().unwrap().push(v));
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//! subject.complete();
//!
//! assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
//! assert!(subject.next(3).is_err());
//! ```

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::BraidError;
use crate::event_stream::EventStream;
use crate::mailbox::{Actor, Mailbox};
use crate::notification::Notification;
use crate::subject_error::SubjectError;
use crate::subscriber::Subscriber;

enum SubjectMessage<T: Send + 'static> {
    Signal(Notification<T>),
    Subscribe(Subscriber<T>),
}

struct SubjectState<T: Send + 'static> {
    subscribers: Vec<Subscriber<T>>,
    history: Option<Vec<T>>,
    terminal: Option<Notification<T>>,
    subscriber_count: Arc<AtomicUsize>,
}

impl<T: Clone + Send + 'static> Actor for SubjectState<T> {
    type Message = SubjectMessage<T>;

    fn handle(&mut self, message: SubjectMessage<T>) {
        match message {
            SubjectMessage::Subscribe(subscriber) => {
                if let Some(history) = &self.history {
                    for value in history {
                        subscriber.next(value.clone());
                    }
                }
                match &self.terminal {
                    Some(terminal) => subscriber.notify(terminal.clone()),
                    None => self.subscribers.push(subscriber),
                }
            }
            SubjectMessage::Signal(_) if self.terminal.is_some() => {
                trace!("subject dropped a signal after termination");
            }
            SubjectMessage::Signal(Notification::Next(value)) => {
                self.subscribers.retain(|s| !s.is_closed());
                if let Some(history) = &mut self.history {
                    history.push(value.clone());
                }
                for subscriber in &self.subscribers {
                    subscriber.next(value.clone());
                }
            }
            SubjectMessage::Signal(terminal) => {
                for subscriber in self.subscribers.drain(..) {
                    subscriber.notify(terminal.clone());
                }
                self.terminal = Some(terminal);
            }
        }

        self.subscriber_count
            .store(self.subscribers.len(), Ordering::Release);
    }
}

/// A hot (optionally replaying) broadcaster of push signals.
///
/// Cheap to clone; all clones share the same state.
pub struct Subject<T: Clone + Send + 'static> {
    mailbox: Mailbox<SubjectState<T>>,
    closed: Arc<AtomicBool>,
    subscriber_count: Arc<AtomicUsize>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a hot subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history(None)
    }

    /// Creates a subject that replays every value it has received to each
    /// new subscriber before forwarding live signals.
    #[must_use]
    pub fn replay() -> Self {
        Self::with_history(Some(Vec::new()))
    }

    fn with_history(history: Option<Vec<T>>) -> Self {
        let subscriber_count = Arc::new(AtomicUsize::new(0));
        Self {
            mailbox: Mailbox::new(SubjectState {
                subscribers: Vec::new(),
                history,
                terminal: None,
                subscriber_count: subscriber_count.clone(),
            }),
            closed: Arc::new(AtomicBool::new(false)),
            subscriber_count,
        }
    }

    /// Returns a stream subscribing to this subject.
    pub fn as_stream(&self) -> EventStream<T> {
        let mailbox = self.mailbox.clone();
        EventStream::create(move |subscriber| mailbox.send(SubjectMessage::Subscribe(subscriber)))
    }

    /// Broadcasts a value.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has terminated.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        if self.is_closed() {
            return Err(SubjectError::Closed);
        }
        self.mailbox
            .send(SubjectMessage::Signal(Notification::Next(value)));
        Ok(())
    }

    /// Broadcasts an error and terminates the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has already terminated.
    pub fn error(&self, error: BraidError) -> Result<(), SubjectError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Err(SubjectError::Closed);
        }
        self.mailbox
            .send(SubjectMessage::Signal(Notification::Error(error)));
        Ok(())
    }

    /// Completes every subscriber and terminates the subject.
    ///
    /// Idempotent.
    pub fn complete(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.mailbox
            .send(SubjectMessage::Signal(Notification::Complete));
    }

    /// Returns `true` once `error` or `complete` has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Number of live subscribers, as of the last processed signal.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscriber_count.load(Ordering::Acquire)
    }
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            mailbox: self.mailbox.clone(),
            closed: self.closed.clone(),
            subscriber_count: self.subscriber_count.clone(),
        }
    }
}
