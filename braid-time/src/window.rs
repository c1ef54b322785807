// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::EventStream;
use braid_runtime::Timer;
use core::time::Duration;

use crate::sources;

/// Window selector for `join` and `group_join` giving every arrival a window
/// of `duration`.
///
/// ```no_run
/// use braid_runtime::TokioTimer;
/// use braid_stream::JoinExt;
/// use braid_time::{duration_window, interval};
/// use std::time::Duration;
///
/// # async fn demo() {
/// let fast = interval(TokioTimer, Duration::from_millis(100));
/// let slow = interval(TokioTimer, Duration::from_millis(300));
///
/// let pairs = fast.join(
///     slow,
///     duration_window(TokioTimer, Duration::from_millis(50)),
///     duration_window(TokioTimer, Duration::from_millis(250)),
///     |f, s| (f, s),
/// );
/// # }
/// ```
pub fn duration_window<V, TM>(
    timer: TM,
    duration: Duration,
) -> impl Fn(&V) -> EventStream<u64> + Send + Sync + 'static
where
    V: 'static,
    TM: Timer,
{
    move |_: &V| sources::timer(timer.clone(), duration)
}
