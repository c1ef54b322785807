// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, EventStream, Subject, SubjectError, Subscriber};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Producer half of a [`TestChannel`].
///
/// Besides pushing signals, it reports how often the paired stream was
/// subscribed and how many of those subscriptions have been torn down, which
/// lets tests observe subscription order and cancellation propagation.
pub struct TestSender<T: Clone + Send + 'static> {
    subject: Subject<T>,
    subscriptions: Arc<AtomicUsize>,
    cancellations: Arc<AtomicUsize>,
}

impl<T: Clone + Send + 'static> TestSender<T> {
    /// Pushes a value to the current subscribers.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` after `error` or `complete`.
    pub fn send(&self, value: T) -> Result<(), SubjectError> {
        self.subject.next(value)
    }

    /// Fails every current and future subscription.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the channel already terminated.
    pub fn error(&self, error: BraidError) -> Result<(), SubjectError> {
        self.subject.error(error)
    }

    /// Completes every current and future subscription.
    pub fn complete(&self) {
        self.subject.complete();
    }

    /// Number of times the paired stream has been subscribed.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.load(Ordering::SeqCst)
    }

    /// Number of subscriptions torn down, by cancellation or termination.
    pub fn cancellation_count(&self) -> usize {
        self.cancellations.load(Ordering::SeqCst)
    }

    /// Subscriptions currently alive.
    pub fn active_subscriptions(&self) -> usize {
        self.subscription_count() - self.cancellation_count()
    }
}

impl<T: Clone + Send + 'static> Clone for TestSender<T> {
    fn clone(&self) -> Self {
        Self {
            subject: self.subject.clone(),
            subscriptions: self.subscriptions.clone(),
            cancellations: self.cancellations.clone(),
        }
    }
}

/// A hot source wired to a [`TestSender`], for driving operators by hand.
pub struct TestChannel<T: Clone + Send + 'static> {
    pub sender: TestSender<T>,
    pub stream: EventStream<T>,
}

impl<T: Clone + Send + 'static> TestChannel<T> {
    pub fn new() -> Self {
        let subject = Subject::new();
        let subscriptions = Arc::new(AtomicUsize::new(0));
        let cancellations = Arc::new(AtomicUsize::new(0));

        let stream = {
            let subject = subject.clone();
            let subscriptions = subscriptions.clone();
            let cancellations = cancellations.clone();
            EventStream::create(move |subscriber: Subscriber<T>| {
                subscriptions.fetch_add(1, Ordering::SeqCst);
                let cancellations = cancellations.clone();
                subscriber.subscription().add_teardown(move || {
                    cancellations.fetch_add(1, Ordering::SeqCst);
                });

                let downstream = subscriber.subscription().clone();
                let upstream = subject.as_stream().subscribe(subscriber);
                downstream.add(upstream);
            })
        };

        Self {
            sender: TestSender {
                subject,
                subscriptions,
                cancellations,
            },
            stream,
        }
    }
}

impl<T: Clone + Send + 'static> Default for TestChannel<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a hot test source, returning its sender and stream.
pub fn test_channel<T: Clone + Send + 'static>() -> (TestSender<T>, EventStream<T>) {
    let TestChannel { sender, stream } = TestChannel::new();
    (sender, stream)
}

/// Helper to create multiple test channels at once.
pub struct TestChannels;

impl TestChannels {
    pub fn two<T: Clone + Send + 'static>() -> (TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new())
    }

    pub fn three<T: Clone + Send + 'static>() -> (TestChannel<T>, TestChannel<T>, TestChannel<T>) {
        (TestChannel::new(), TestChannel::new(), TestChannel::new())
    }
}

/// Pushes `value`, panicking if the channel is closed.
pub fn push<T: Clone + Send + 'static>(value: T, sender: &TestSender<T>) {
    sender
        .send(value)
        .expect("test channel closed before push");
}
