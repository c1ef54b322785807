// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flattens a stream of streams by following only the newest inner stream.
//!
//! # Behavior
//!
//! - Each inner stream emitted by the outer stream cancels the previously
//!   active one and becomes active
//! - Signals of a superseded inner stream are discarded, even if they were
//!   already in flight when the switch happened
//! - Completes once the outer stream has completed and the active inner
//!   stream, if any, has completed
//! - An error from the outer or the active inner stream terminates the output
//!   and cancels everything

mod implementation;

pub use implementation::{switch_on_next, SwitchOnNextExt};
