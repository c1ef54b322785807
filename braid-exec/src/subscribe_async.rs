// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use braid_core::{EventStream, IntoBraidError, Result, StreamItem, Subscription};
use core::error::Error;
use core::future::Future;
use futures::StreamExt;

use crate::into_stream::IntoStreamExt;

/// Drives an [`EventStream`] from async code.
#[async_trait]
pub trait SubscribeAsyncExt<T> {
    /// Subscribes and awaits `on_next` for every value, one at a time and in
    /// order, until the stream completes.
    ///
    /// `cancellation` stops the subscription early when cancelled; the
    /// handler receives it so long-running work can observe it too. A handler
    /// error is passed to `on_error` when given, and otherwise ends the
    /// subscription and is returned.
    ///
    /// # Errors
    ///
    /// Returns the stream's error, or the first handler error when no
    /// `on_error` callback is supplied.
    async fn subscribe_async<F, Fut, E, OnError>(
        &self,
        on_next: F,
        cancellation: Option<Subscription>,
        on_error: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, Subscription) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: Error + Send + Sync + 'static;
}

#[async_trait]
impl<T: Send + 'static> SubscribeAsyncExt<T> for EventStream<T> {
    async fn subscribe_async<F, Fut, E, OnError>(
        &self,
        on_next: F,
        cancellation: Option<Subscription>,
        on_error: Option<OnError>,
    ) -> Result<()>
    where
        F: Fn(T, Subscription) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = core::result::Result<(), E>> + Send + 'static,
        OnError: Fn(E) + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        let cancellation = cancellation.unwrap_or_default();
        let mut items = self.into_stream();
        cancellation.add(items.subscription().clone());

        while let Some(item) = items.next().await {
            let value = match item {
                StreamItem::Value(value) => value,
                StreamItem::Error(error) => return Err(error),
            };

            if let Err(error) = on_next(value, cancellation.clone()).await {
                match &on_error {
                    Some(on_error) => on_error(error),
                    None => {
                        debug!("subscribe_async handler failed, cancelling");
                        items.subscription().cancel();
                        return Err(error.into_braid());
                    }
                }
            }
        }

        Ok(())
    }
}
