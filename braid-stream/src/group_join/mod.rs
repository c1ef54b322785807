// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Window-based grouping of one stream's values under another's.
//!
//! For every left value `a`, `group_join` emits `selector(a, group)` at the
//! moment `a` arrives. `group` is a stream of the right values falling in
//! `a`'s window: those whose own window is open when `a` arrives, then every
//! later right value until `a`'s window closes, at which point the group
//! completes.
//!
//! Groups replay what they have collected, so a group subscribed after some
//! matches were made still sees them. If the operator fails, every open
//! group receives the error before the output does.
//!
//! The output completes once the left source has completed and every left
//! window has closed. The right source completing has no effect on it.

mod implementation;

pub use implementation::{group_join, GroupJoinExt};
