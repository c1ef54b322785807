// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Timer contract and task spawning for the braid combination engine.
//!
//! Operators that need time depend on the [`Timer`] trait only. The default
//! implementation, [`TokioTimer`], is enabled by the `runtime-tokio` feature.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod impls;
pub mod task;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use self::impls::tokio::TokioTimer;
pub use self::task::BraidTask;
pub use self::timer::Timer;
