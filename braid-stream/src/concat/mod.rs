// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Plays streams one after another.
//!
//! # Behavior
//!
//! - Source k+1 is subscribed only once the completion of source k has been
//!   observed, so a cold source never starts early
//! - Completes after the last source completes (at once for an empty list)
//! - An error stops the sequence; later sources are never subscribed
//!
//! Sources that complete while being subscribed do not nest: the next
//! subscription is started after the current one returns.

mod implementation;

pub use implementation::{concat, ConcatExt};
