// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background tasks bound to a [`Subscription`].
//!
//! Timed producers (intervals, delays, window timers) and the pull-to-push
//! bridge run as spawned tasks. A [`BraidTask`] ties such a task to the
//! subscription it produces for: cancelling the subscription stops the task at
//! its next await point, without the task body having to poll a flag.

use braid_core::Subscription;
use core::future::Future;
use futures::future::{select, Either};

/// Handle to a task spawned on behalf of one subscription.
#[derive(Debug, Clone)]
pub struct BraidTask {
    subscription: Subscription,
}

impl BraidTask {
    /// Spawns `f(subscription)` on the tokio runtime.
    ///
    /// The future is raced against `subscription.cancelled()` and dropped as
    /// soon as the subscription is cancelled.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, like `tokio::spawn`.
    #[cfg(feature = "runtime-tokio")]
    pub fn spawn<F, Fut>(subscription: &Subscription, f: F) -> Self
    where
        F: FnOnce(Subscription) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let work = f(subscription.clone());
        let watch = subscription.clone();

        tokio::spawn(async move {
            let work = core::pin::pin!(work);
            let cancelled = core::pin::pin!(watch.cancelled());
            if let Either::Right(_) = select(work, cancelled).await {
                trace!("task stopped by cancellation of {:?}", watch.id());
            }
        });

        Self {
            subscription: subscription.clone(),
        }
    }

    /// Cancels the subscription the task runs for.
    pub fn cancel(&self) {
        self.subscription.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.subscription.is_cancelled()
    }
}
