// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::{BraidError, Result};

/// Runs a user-supplied combiner or selector, turning a panic into
/// [`BraidError::SelectorError`] for `operator`.
///
/// Operators call every user closure through this so that a panicking
/// selector terminates the output stream with an error instead of unwinding
/// through the thread that happened to deliver the triggering signal.
pub fn invoke_selector<R, F>(operator: &'static str, f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        warn!("{} selector panicked: {}", operator, message);
        BraidError::selector_error(operator, message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
