// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, EventStream, Observer, StreamItem, Subscription};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::Stream;
use pin_project::{pin_project, pinned_drop};

/// Pull-side view of one subscription to an [`EventStream`].
///
/// Values arrive as `StreamItem::Value`, a stream error as a final
/// `StreamItem::Error`, and completion or cancellation ends the stream.
/// Dropping it cancels the subscription.
#[pin_project(PinnedDrop)]
pub struct SubscriptionStream<T> {
    #[pin]
    receiver: UnboundedReceiver<StreamItem<T>>,
    subscription: Subscription,
}

impl<T> SubscriptionStream<T> {
    /// The subscription feeding this stream.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl<T> Stream for SubscriptionStream<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().receiver.poll_next(cx)
    }
}

#[pinned_drop]
impl<T> PinnedDrop for SubscriptionStream<T> {
    fn drop(self: Pin<&mut Self>) {
        self.subscription.cancel();
    }
}

struct ChannelObserver<T> {
    sender: UnboundedSender<StreamItem<T>>,
}

impl<T: Send + 'static> Observer<T> for ChannelObserver<T> {
    fn on_next(&self, value: T) {
        // A closed receiver means the pull side is gone; its drop cancels us
        let _ = self.sender.unbounded_send(StreamItem::Value(value));
    }

    fn on_error(&self, error: BraidError) {
        let _ = self.sender.unbounded_send(StreamItem::Error(error));
    }

    fn on_complete(&self) {
        self.sender.close_channel();
    }
}

/// Extension trait consuming an [`EventStream`] as a `futures::Stream`.
pub trait IntoStreamExt<T: Send + 'static> {
    /// Subscribes and returns the pull-side view of the new subscription.
    fn into_stream(&self) -> SubscriptionStream<T>;
}

impl<T: Send + 'static> IntoStreamExt<T> for EventStream<T> {
    fn into_stream(&self) -> SubscriptionStream<T> {
        into_stream(self)
    }
}

/// Subscribes to `stream` and returns a `futures::Stream` of its signals.
pub fn into_stream<T: Send + 'static>(stream: &EventStream<T>) -> SubscriptionStream<T> {
    let (sender, receiver) = unbounded();
    let closer = sender.clone();

    let subscription = stream.subscribe(ChannelObserver { sender });
    // Ends the pull stream on cancellation and after a terminal signal
    subscription.add_teardown(move || closer.close_channel());

    SubscriptionStream {
        receiver,
        subscription,
    }
}
