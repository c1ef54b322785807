// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Combines the most recent value of every source.
//!
//! # Behavior
//!
//! - Keeps the latest value of each source
//! - Once every source has emitted at least once, emits on every arrival
//!   from any source, combining the new value with the latest of the others
//! - Completes when every source has completed, or as soon as a source
//!   completes without ever having emitted (no combination is possible)
//! - Errors, and panicking combiners, terminate the output immediately
//!
//! [`combine_latest`] takes two sources of any types; [`combine_latest_all`]
//! takes any number of sources of one type and hands the combiner a
//! [`CombinedState`].
//!
//! # Example
//!
//! ```rust
//! use braid_core::Subject;
//! use braid_stream::CombineLatestExt;
//! use std::sync::{Arc, Mutex};
//!
//! let temperature = Subject::<i32>::new();
//! let unit = Subject::<&'static str>::new();
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! temperature
//!     .as_stream()
//!     .combine_latest(unit.as_stream(), |t, u| format!("{t}{u}"))
//!     .subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! temperature.next(20).unwrap(); // nothing yet: no unit
//! unit.next("C").unwrap();
//! temperature.next(21).unwrap();
//! unit.next("F").unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["20C", "21C", "21F"]);
//! ```

mod combined_state;
mod implementation;

pub use combined_state::CombinedState;
pub use implementation::{combine_latest, combine_latest_all, CombineLatestExt};
