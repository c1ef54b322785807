// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Pairs two streams by arrival index.
//!
//! # Behavior
//!
//! - The i-th output is `combiner(a_i, b_i)`, whatever the timing of the two
//!   arrivals; values waiting for a partner are queued per source
//! - Completes as soon as one source has completed and its queue is empty,
//!   since no further pair can be formed; the other source is cancelled and
//!   its leftover values are discarded
//! - An error from either source, or a panicking combiner, terminates the
//!   output immediately
//!
//! # Example
//!
//! ```rust
//! use braid_core::EventStream;
//! use braid_stream::ZipExt;
//! use std::sync::{Arc, Mutex};
//!
//! let letters = EventStream::from_values(vec!["A", "B", "C", "d", "E"]);
//! let numbers = EventStream::from_values(vec![1, 2, 3, 4]);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! letters
//!     .zip_with(numbers, |s, i| format!("{s}_{i}"))
//!     .subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["A_1", "B_2", "C_3", "d_4"]);
//! ```

mod implementation;

pub use implementation::{zip, ZipExt};
