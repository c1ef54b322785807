// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{BraidError, Notification, Observer};
use parking_lot::Mutex;
use std::sync::Arc;

/// Observer that records every signal it receives.
///
/// Clones share the same log, so a test keeps one handle and subscribes the
/// other.
#[derive(Clone)]
pub struct RecordingObserver<T> {
    log: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T: Clone> RecordingObserver<T> {
    pub fn new() -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All signals received so far.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.log.lock().clone()
    }

    /// The values received so far.
    pub fn values(&self) -> Vec<T> {
        self.log
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }

    /// The error, if the sequence failed.
    pub fn error(&self) -> Option<BraidError> {
        self.log.lock().iter().find_map(|n| match n {
            Notification::Error(error) => Some(error.clone()),
            _ => None,
        })
    }

    pub fn is_completed(&self) -> bool {
        self.log
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Complete))
    }

    /// Returns `true` once a terminal signal was received.
    pub fn is_terminated(&self) -> bool {
        self.log.lock().iter().any(Notification::is_terminal)
    }
}

impl<T: Clone> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> Observer<T> for RecordingObserver<T> {
    fn on_next(&self, value: T) {
        self.log.lock().push(Notification::Next(value));
    }

    fn on_error(&self, error: BraidError) {
        self.log.lock().push(Notification::Error(error));
    }

    fn on_complete(&self) {
        self.log.lock().push(Notification::Complete);
    }
}
