// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timed sources for braid push streams.
//!
//! Everything here is driven by a [`Timer`](braid_runtime::Timer) passed in by
//! the caller and runs on a task bound to the subscription (see
//! [`BraidTask`](braid_runtime::BraidTask)), so a paused test clock controls
//! when values appear.
//!
//! - [`timer`]: one value after a due time
//! - [`interval`]: a value every period
//! - [`delay`]: shifts a stream later in time
//! - [`duration_window`]: fixed-length windows for `join` and `group_join`

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

#[cfg(feature = "runtime-tokio")]
mod clock;
#[cfg(feature = "runtime-tokio")]
pub mod delay;
#[cfg(feature = "runtime-tokio")]
pub mod sources;
#[cfg(feature = "runtime-tokio")]
mod window;

#[cfg(feature = "runtime-tokio")]
pub use delay::{delay, DelayExt};
#[cfg(feature = "runtime-tokio")]
pub use sources::{interval, timer};
#[cfg(feature = "runtime-tokio")]
pub use window::duration_window;
