// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::BraidError;
use crate::observer::Observer;

/// One signal of a push sequence.
///
/// A well-formed sequence is any number of `Next` followed by at most one
/// terminal signal (`Error` or `Complete`).
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// A value
    Next(T),
    /// Terminal failure
    Error(BraidError),
    /// Terminal success
    Complete,
}

impl<T> Notification<T> {
    /// Returns `true` for `Error` and `Complete`.
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Delivers this signal to `observer`.
    pub fn deliver<O>(self, observer: &O)
    where
        O: Observer<T> + ?Sized,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(error) => observer.on_error(error),
            Notification::Complete => observer.on_complete(),
        }
    }
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Notification::Next(a), Notification::Next(b)) => a == b,
            (Notification::Complete, Notification::Complete) => true,
            (Notification::Error(a), Notification::Error(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
