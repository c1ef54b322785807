// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push-based reactive streams and the operators that combine them.
//!
//! This crate re-exports the braid workspace behind one dependency:
//!
//! - **Streams and subjects** from `braid-core`: [`EventStream`], [`Subject`],
//!   [`Observer`], [`Subscription`] and the in-memory sources
//! - **Combining operators** from `braid-stream`: [`zip`], [`merge`],
//!   [`concat`], [`start_with`], [`combine_latest`], [`with_latest_from`],
//!   [`switch_on_next`], [`join`] and [`group_join`]
//! - **Timed sources** from `braid-time`: `timer`, `interval`, `delay` and
//!   `duration_window` (feature `runtime-tokio`)
//! - **Bridges** from `braid-exec` to and from `futures::Stream`
//!
//! # Example
//!
//! ```
//! use braid_rx::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let letters = EventStream::from_values(vec!["A", "B", "C", "d", "E"]);
//! let numbers = EventStream::from_values(vec![1, 2, 3, 4]);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! letters
//!     .zip_with(numbers, |s, n| format!("{s}_{n}"))
//!     .subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["A_1", "B_2", "C_3", "d_4"]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use braid_core::{
    BraidError, EventStream, FnObserver, IntoBraidError, Notification, Observer, Result,
    SerialSubscription, StreamItem, Subject, SubjectError, Subscriber, Subscription,
};

pub use braid_stream::{
    combine_latest, combine_latest_all, concat, group_join, join, merge, start_with,
    start_with_values, switch_on_next, with_latest_from, zip, CombinedState,
};

pub use braid_runtime::{BraidTask, Timer};
#[cfg(feature = "runtime-tokio")]
pub use braid_runtime::TokioTimer;

#[cfg(feature = "runtime-tokio")]
pub use braid_time::{delay, duration_window, interval, timer};

#[cfg(feature = "runtime-tokio")]
pub use braid_exec::from_stream;
pub use braid_exec::{into_stream, SubscriptionStream};

/// Prelude module for convenient imports
pub mod prelude {
    pub use braid_core::{EventStream, Observer, StreamItem, Subject, Subscription};
    pub use braid_exec::{IntoStreamExt, SubscribeAsyncExt};
    pub use braid_runtime::Timer;
    pub use braid_stream::{
        CombineLatestExt, CombinedState, ConcatExt, GroupJoinExt, JoinExt, MergeExt,
        StartWithExt, SwitchOnNextExt, WithLatestFromExt, ZipExt,
    };

    #[cfg(feature = "runtime-tokio")]
    pub use braid_runtime::TokioTimer;
    #[cfg(feature = "runtime-tokio")]
    pub use braid_time::DelayExt;
}
