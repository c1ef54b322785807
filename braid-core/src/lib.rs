// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core push-stream types for the braid combination engine.
//!
//! An [`EventStream`] pushes values to an [`Observer`] through a [`Subscriber`]
//! that enforces the sequence contract (values, then at most one terminal
//! signal). Subscribing yields a [`Subscription`] whose cancellation tears
//! down everything upstream. Operators keep their state in a [`Mailbox`]
//! actor so that signals from concurrent sources are handled one at a time
//! without blocking any producer.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod error;
pub mod event_stream;
pub mod mailbox;
pub mod notification;
pub mod observer;
pub mod selector;
pub mod stream_item;
pub mod subject;
pub mod subject_error;
pub mod subscriber;
pub mod subscription;

pub use self::error::{BraidError, IntoBraidError, Result};
pub use self::event_stream::EventStream;
pub use self::mailbox::{Actor, Mailbox, MailboxObserver, WeakMailbox};
pub use self::notification::Notification;
pub use self::observer::{FnObserver, Observer};
pub use self::selector::invoke_selector;
pub use self::stream_item::StreamItem;
pub use self::subject::Subject;
pub use self::subject_error::SubjectError;
pub use self::subscriber::Subscriber;
pub use self::subscription::{Cancelled, SerialSubscription, Subscription, SubscriptionId};
