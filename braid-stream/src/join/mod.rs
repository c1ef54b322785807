// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Window-based pairing of two streams.
//!
//! Every arrival on either side opens a window whose lifetime is the stream
//! its selector returns: the window closes on that stream's first value or
//! completion. A new arrival pairs with every arrival of the other side whose
//! window is still open at that moment, so each matching pair is emitted
//! exactly once, by whichever member arrived last.
//!
//! ## Characteristics
//!
//! - **Exclusive end**: a signal handled after a window closed does not pair
//!   with that window's value.
//! - **Completion**: once both sources have completed and every window has
//!   closed.
//! - **Errors**: from either source or any window stream, propagated at once.
//!
//! ## Example
//!
//! ```
//! use braid_core::{EventStream, Subject};
//! use braid_stream::JoinExt;
//! use std::sync::{Arc, Mutex};
//!
//! let left = Subject::new();
//! let right = Subject::new();
//! let close_left = Subject::<()>::new();
//!
//! let closer = close_left.clone();
//! let pairs = left.as_stream().join(
//!     right.as_stream(),
//!     move |_: &&str| closer.as_stream(),
//!     |_: &i32| EventStream::<()>::empty(),
//!     |a, b| format!("{a}{b}"),
//! );
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = seen.clone();
//! pairs.subscribe_fn(move |v| sink.lock().unwrap().push(v));
//!
//! left.next("x").unwrap();
//! right.next(1).unwrap();
//! close_left.next(()).unwrap();
//! right.next(2).unwrap();
//!
//! assert_eq!(*seen.lock().unwrap(), vec!["x1".to_string()]);
//! ```

mod implementation;

pub use implementation::{join, JoinExt};
