// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_runtime::Timer;
use core::time::Duration;

/// Sleeps until `deadline`, or not at all if it has passed.
pub(crate) fn sleep_until<TM: Timer>(timer: &TM, deadline: TM::Instant) -> TM::Sleep {
    let now = timer.now();
    let remaining = if deadline > now {
        deadline - now
    } else {
        Duration::ZERO
    };
    timer.sleep_future(remaining)
}
