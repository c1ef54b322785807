// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bridges between braid push streams and `futures::Stream`.
//!
//! - [`into_stream`] pulls a push stream: every subscription becomes a
//!   `Stream<Item = StreamItem<T>>` that cancels the subscription when dropped.
//! - [`from_stream`] pushes a pull stream, driving it on a spawned task.
//! - [`SubscribeAsyncExt::subscribe_async`] consumes a push stream with an
//!   async handler.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

#[cfg(feature = "runtime-tokio")]
pub mod from_stream;
pub mod into_stream;
pub mod subscribe_async;

#[cfg(feature = "runtime-tokio")]
pub use self::from_stream::from_stream;
pub use self::into_stream::{into_stream, IntoStreamExt, SubscriptionStream};
pub use self::subscribe_async::SubscribeAsyncExt;
