// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Start-with operator - prepends a prefix to a stream.
//!
//! `main.start_with(prefix)` plays `prefix` to completion and only then
//! subscribes to `main`; it is `concat([prefix, main])`. An error in the
//! prefix terminates the output before `main` is ever subscribed.
//!
//! # Examples
//!
//! ```rust
//! use braid_core::EventStream;
//! use braid_stream::StartWithExt;
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//!
//! EventStream::range(10, 2)
//!     .start_with_values(vec![0, 1])
//!     .subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! assert_eq!(*seen.lock().unwrap(), vec![0, 1, 10, 11]);
//! ```

mod implementation;

pub use implementation::{start_with, start_with_values, StartWithExt};
