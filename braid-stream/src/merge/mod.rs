// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Interleaves several streams into one.
//!
//! # Behavior
//!
//! - All sources are subscribed at once and every value is forwarded as it
//!   arrives; the order of values from one source is preserved
//! - Completes once every source has completed (at once for an empty list)
//! - The first error is forwarded and cancels the remaining sources

mod implementation;

pub use implementation::{merge, MergeExt};
