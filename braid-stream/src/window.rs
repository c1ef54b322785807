// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-arrival windows shared by `join` and `group_join`.
//!
//! Every arrival on either side opens a window: the subscription to the
//! stream its selector returned. The first value or the completion of that
//! stream closes the window; an error fails the whole operator. While open,
//! the arrival's payload is kept in an [`OpenWindows`] map keyed by a
//! monotonically increasing arrival id, so iteration follows arrival order.

use braid_core::{Actor, BraidError, EventStream, Mailbox, Notification, Subscription};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Returns the window stream for one arrival.
pub(crate) type WindowSelector<V, W> = Arc<dyn Fn(&V) -> EventStream<W> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JoinSide {
    Left,
    Right,
}

/// What a window stream reported.
pub(crate) enum WindowEvent {
    Closed(JoinSide, u64),
    Failed(BraidError),
}

struct OpenWindow<V> {
    value: V,
    subscription: Subscription,
}

pub(crate) struct OpenWindows<V> {
    side: JoinSide,
    entries: BTreeMap<u64, OpenWindow<V>>,
}

impl<V> OpenWindows<V> {
    pub(crate) fn new(side: JoinSide) -> Self {
        Self {
            side,
            entries: BTreeMap::new(),
        }
    }

    /// Payloads of the open windows, oldest arrival first.
    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values().map(|entry| &entry.value)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribes to `window` and keeps `value` until the window closes.
    ///
    /// The window's signals come back to `mailbox` as [`WindowEvent`]s; one
    /// that closes synchronously is handled after the current message.
    pub(crate) fn open<W, A>(
        &mut self,
        id: u64,
        value: V,
        window: &EventStream<W>,
        mailbox: &Mailbox<A>,
        parent: &Subscription,
    ) where
        W: Send + 'static,
        A: Actor,
        A::Message: From<WindowEvent>,
    {
        let side = self.side;
        let subscription = window.subscribe(mailbox.observer(move |n: Notification<W>| {
            let event = match n {
                Notification::Error(error) => WindowEvent::Failed(error),
                Notification::Next(_) | Notification::Complete => WindowEvent::Closed(side, id),
            };
            A::Message::from(event)
        }));

        parent.add(subscription.clone());
        self.entries.insert(
            id,
            OpenWindow {
                value,
                subscription,
            },
        );
    }

    /// Closes the window of arrival `id`, returning its payload.
    ///
    /// Returns `None` if the window was already closed.
    pub(crate) fn close(&mut self, id: u64, parent: &Subscription) -> Option<V> {
        let entry = self.entries.remove(&id)?;
        parent.remove(&entry.subscription);
        entry.subscription.cancel();
        Some(entry.value)
    }
}
