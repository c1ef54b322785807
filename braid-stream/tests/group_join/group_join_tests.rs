// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{EventStream, Notification};
use braid_stream::{group_join, GroupJoinExt};
use braid_test_utils::{push, RecordingObserver, TestChannel, TestChannels};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_group_join_group_replays_matches_to_late_subscribers() {
    // Arrange
    let left = TestChannel::<&str>::new();
    let right = TestChannel::<i32>::new();
    let groups = RecordingObserver::<(&str, EventStream<i32>)>::new();
    left.stream
        .group_join(
            right.stream,
            |_| EventStream::<()>::never(),
            |_| EventStream::<()>::never(),
            |a, group| (a, group),
        )
        .subscribe(groups.clone());

    // Act
    push(1, &right.sender);
    push("a", &left.sender);
    push(2, &right.sender);
    push(3, &right.sender);

    // Assert
    let emitted = groups.values();
    assert_eq!(emitted.len(), 1);
    let (key, group) = &emitted[0];
    assert_eq!(*key, "a");

    let members = RecordingObserver::new();
    group.subscribe(members.clone());
    assert_eq!(members.values(), vec![1, 2, 3]);
    assert!(!members.is_terminated());
}

#[test]
fn test_group_join_group_completes_when_its_window_closes() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let close_left = TestChannel::<()>::new();
    let closer = close_left.stream.clone();
    let members = RecordingObserver::new();
    let sink = members.clone();
    group_join(
        left.stream,
        right.stream,
        move |_| closer.clone(),
        |_| EventStream::<()>::never(),
        move |_, group: EventStream<i32>| {
            group.subscribe(sink.clone());
        },
    )
    .subscribe(RecordingObserver::<()>::new());

    // Act
    push(1, &left.sender);
    push(10, &right.sender);
    push((), &close_left.sender);
    push(20, &right.sender);

    // Assert
    assert_eq!(
        members.notifications(),
        vec![Notification::Next(10), Notification::Complete]
    );
}

#[test]
fn test_group_join_new_group_excludes_closed_right_windows() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let recorder = RecordingObserver::new();
    group_join(
        left.stream,
        right.stream,
        |_| EventStream::<()>::never(),
        |_| EventStream::<()>::empty(),
        |a, group: EventStream<i32>| {
            let members = RecordingObserver::new();
            group.subscribe(members.clone());
            (a, members)
        },
    )
    .subscribe(recorder.clone());

    // Act
    push(7, &right.sender);
    push(1, &left.sender);
    push(8, &right.sender);

    // Assert
    let emitted = recorder.values();
    assert_eq!(emitted[0].0, 1);
    assert_eq!(emitted[0].1.values(), vec![8]);
}

#[test]
fn test_group_join_completes_after_left_done_and_groups_closed() {
    // Arrange
    let (left, right) = TestChannels::two::<i32>();
    let close_left = TestChannel::<()>::new();
    let closer = close_left.stream.clone();
    let recorder = RecordingObserver::new();
    group_join(
        left.stream,
        right.stream,
        move |_| closer.clone(),
        |_| EventStream::<()>::never(),
        |a, _group: EventStream<i32>| a,
    )
    .subscribe(recorder.clone());

    // Act
    push(1, &left.sender);
    left.sender.complete();

    // Assert
    assert_eq!(recorder.notifications(), vec![Notification::Next(1)]);

    // Act
    push((), &close_left.sender);

    // Assert
    assert_eq!(
        recorder.notifications(),
        vec![Notification::Next(1), Notification::Complete]
    );
    assert_eq!(right.sender.active_subscriptions(), 0);
}

#[test]
fn test_group_join_groups_see_every_right_value_when_sides_push_from_threads() {
    // Arrange
    const N: u32 = 100;
    let (left, right) = TestChannels::two::<u32>();
    let groups = RecordingObserver::<(u32, EventStream<u32>)>::new();
    left.stream
        .group_join(
            right.stream,
            |_| EventStream::<()>::never(),
            |_| EventStream::<()>::never(),
            |a, group| (a, group),
        )
        .subscribe(groups.clone());

    // Act
    let producers = [left.sender, right.sender].map(|sender| {
        thread::spawn(move || {
            for i in 0..N {
                push(i, &sender);
            }
        })
    });
    for producer in producers {
        producer.join().expect("producer panicked");
    }

    // Assert
    let mut pairs = Vec::new();
    for (a, group) in groups.values() {
        let members = RecordingObserver::new();
        group.subscribe(members.clone());
        pairs.extend(members.values().into_iter().map(|b| (a, b)));
    }
    let unique: HashSet<(u32, u32)> = pairs.iter().copied().collect();
    assert_eq!(groups.values().len(), N as usize);
    assert_eq!(pairs.len(), (N * N) as usize);
    assert_eq!(unique.len(), (N * N) as usize);
}
