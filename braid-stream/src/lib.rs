// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combining operators for braid push streams.
//!
//! Every operator takes one or more [`EventStream`](braid_core::EventStream)s
//! and returns a new one. Subscribing to the result subscribes to the
//! sources; cancelling it, or the result terminating, cancels every source,
//! inner stream and window the operator opened.
//!
//! Each operator is available as a free function and as an extension trait
//! method, so pipelines read left to right:
//!
//! ```
//! use braid_core::EventStream;
//! use braid_stream::{MergeExt, StartWithExt, ZipExt};
//! use std::sync::{Arc, Mutex};
//!
//! let letters = EventStream::from_values(vec!["a", "b", "c"]);
//! let numbers = EventStream::from_values(vec![1, 2]).start_with_values(vec![0]);
//!
//! let zipped = letters
//!     .zip_with(numbers, |l, n| format!("{l}{n}"))
//!     .merge_with(EventStream::just("z9".to_string()));
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! zipped.subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["a0", "b1", "c2", "z9"]);
//! ```
//!
//! ## Operator Categories
//!
//! ### Pairing
//!
//! - **[`zip`]**: pairs values by index
//! - **[`combine_latest`]** / **[`combine_latest_all`]**: emits the latest
//!   value of every source whenever any of them emits
//! - **[`with_latest_from`]**: samples a secondary stream on each primary value
//!
//! ### Sequencing
//!
//! - **[`merge`]**: interleaves sources in arrival order
//! - **[`concat`]**: runs sources one after another
//! - **[`start_with`]** / **[`start_with_values`]**: prepends a prefix
//! - **[`switch_on_next`]**: follows the most recent inner stream
//!
//! ### Windowed
//!
//! - **[`join`]**: pairs values whose windows overlap
//! - **[`group_join`]**: groups the right values falling in each left window
//!
//! ## Concurrency
//!
//! Sources may emit from any thread. Each subscription keeps its state in a
//! [`Mailbox`](braid_core::Mailbox), so signals are handled one at a time and
//! a source that emits while the operator is busy never blocks.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;
mod window;

pub mod combine_latest;
pub mod concat;
pub mod group_join;
pub mod join;
pub mod merge;
pub mod start_with;
pub mod switch_on_next;
pub mod with_latest_from;
pub mod zip;

pub use combine_latest::{combine_latest, combine_latest_all, CombineLatestExt, CombinedState};
pub use concat::{concat, ConcatExt};
pub use group_join::{group_join, GroupJoinExt};
pub use join::{join, JoinExt};
pub use merge::{merge, MergeExt};
pub use start_with::{start_with, start_with_values, StartWithExt};
pub use switch_on_next::{switch_on_next, SwitchOnNextExt};
pub use with_latest_from::{with_latest_from, WithLatestFromExt};
pub use zip::{zip, ZipExt};
