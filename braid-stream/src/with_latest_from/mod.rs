// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Samples the latest value of a secondary stream on every primary arrival.
//!
//! # Behavior
//!
//! - Emits `combiner(main_value, latest_other)` for each `main` arrival once
//!   `other` has produced a value; earlier `main` values are dropped
//! - `other` arrivals only update the sampled value
//! - Completion follows `main`; `other` completing keeps its last value
//! - Errors from either stream terminate the output
//!
//! `other` is subscribed before `main`, so values it has available
//! synchronously are already sampled when `main` starts.

mod implementation;

pub use implementation::{with_latest_from, WithLatestFromExt};
