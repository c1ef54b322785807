// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the braid workspace.
//!
//! - [`TestChannel`] / [`test_channel`] - hot sources driven by hand, with
//!   subscription and cancellation counters
//! - [`RecordingObserver`] - records every signal for synchronous assertions
//! - `helpers` - async assertions over pulled streams
//! - `test_data` - fixtures

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recording_observer;
pub mod test_channel;
pub mod test_data;

pub use braid_exec::IntoStreamExt;
pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, unwrap_error, unwrap_stream, unwrap_value,
};
pub use recording_observer::RecordingObserver;
pub use test_channel::{push, test_channel, TestChannel, TestChannels, TestSender};
