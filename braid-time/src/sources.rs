// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources driven by a [`Timer`].
//!
//! Each subscription runs its own task; cancelling the subscription stops the
//! task at its next sleep.

use braid_core::{EventStream, Subscriber};
use braid_runtime::{BraidTask, Timer};
use core::time::Duration;

use crate::clock::sleep_until;

/// Emits `0` once `due` has elapsed, then completes.
pub fn timer<TM: Timer>(timer: TM, due: Duration) -> EventStream<u64> {
    EventStream::create(move |subscriber: Subscriber<u64>| {
        let timer = timer.clone();
        let subscription = subscriber.subscription().clone();
        BraidTask::spawn(&subscription, move |_| async move {
            timer.sleep_future(due).await;
            subscriber.next(0);
            subscriber.complete();
        });
    })
}

/// Emits `0, 1, 2, ...`, one value every `period`, until cancelled.
///
/// Ticks are scheduled against the start instant, so a slow observer does not
/// make the sequence drift.
pub fn interval<TM: Timer>(timer: TM, period: Duration) -> EventStream<u64> {
    EventStream::create(move |subscriber: Subscriber<u64>| {
        let timer = timer.clone();
        let subscription = subscriber.subscription().clone();
        BraidTask::spawn(&subscription, move |_| async move {
            let mut deadline = timer.now();
            for tick in 0u64.. {
                deadline = deadline + period;
                sleep_until(&timer, deadline).await;
                if subscriber.is_closed() {
                    return;
                }
                trace!("interval tick {}", tick);
                subscriber.next(tick);
            }
        });
    })
}
