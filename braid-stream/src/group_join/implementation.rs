// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{
    invoke_selector, Actor, BraidError, EventStream, Mailbox, Notification, Subject, Subscriber,
    WeakMailbox,
};
use std::sync::Arc;

use crate::window::{JoinSide, OpenWindows, WindowEvent, WindowSelector};

enum GroupJoinMessage<A, B> {
    Left(Notification<A>),
    Right(Notification<B>),
    Window(WindowEvent),
}

impl<A, B> From<WindowEvent> for GroupJoinMessage<A, B> {
    fn from(event: WindowEvent) -> Self {
        Self::Window(event)
    }
}

type GroupSelector<A, B, R> = Arc<dyn Fn(A, EventStream<B>) -> R + Send + Sync>;

struct GroupJoinState<A, B, WA, WB, R>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    groups: OpenWindows<Subject<B>>,
    right: OpenWindows<B>,
    left_done: bool,
    next_id: u64,
    window_left: WindowSelector<A, WA>,
    window_right: WindowSelector<B, WB>,
    selector: GroupSelector<A, B, R>,
    mailbox: WeakMailbox<GroupJoinState<A, B, WA, WB, R>>,
    downstream: Subscriber<R>,
}

impl<A, B, WA, WB, R> GroupJoinState<A, B, WA, WB, R>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    fn arrival_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn on_left(&mut self, a: A) -> Result<(), BraidError> {
        let group = Subject::replay();
        for b in self.right.values() {
            let _ = group.next(b.clone());
        }

        let window = invoke_selector("group_join", || (self.window_left)(&a))?;
        let stream = group.as_stream();
        let value = match invoke_selector("group_join", || (self.selector)(a, stream)) {
            Ok(value) => value,
            Err(error) => {
                let _ = group.error(error.clone());
                return Err(error);
            }
        };
        self.downstream.next(value);

        let Some(mailbox) = self.mailbox.upgrade() else {
            return Ok(());
        };
        let id = self.arrival_id();
        let parent = self.downstream.subscription().clone();
        self.groups.open(id, group, &window, &mailbox, &parent);
        Ok(())
    }

    fn on_right(&mut self, b: B) -> Result<(), BraidError> {
        for group in self.groups.values() {
            if group.next(b.clone()).is_err() {
                trace!("group_join skipped a closed group");
            }
        }

        let window = invoke_selector("group_join", || (self.window_right)(&b))?;
        let Some(mailbox) = self.mailbox.upgrade() else {
            return Ok(());
        };
        let id = self.arrival_id();
        let parent = self.downstream.subscription().clone();
        self.right.open(id, b, &window, &mailbox, &parent);
        Ok(())
    }

    fn close(&mut self, side: JoinSide, id: u64) {
        let parent = self.downstream.subscription();
        match side {
            JoinSide::Left => {
                if let Some(group) = self.groups.close(id, parent) {
                    group.complete();
                }
                self.complete_if_drained();
            }
            JoinSide::Right => {
                self.right.close(id, parent);
            }
        }
    }

    fn complete_if_drained(&self) {
        if self.left_done && self.groups.is_empty() {
            debug!("group_join completed");
            self.downstream.complete();
        }
    }

    fn fail(&self, error: BraidError) {
        for group in self.groups.values() {
            if group.error(error.clone()).is_err() {
                trace!("group_join skipped a closed group");
            }
        }
        self.downstream.error(error);
    }
}

impl<A, B, WA, WB, R> Actor for GroupJoinState<A, B, WA, WB, R>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    type Message = GroupJoinMessage<A, B>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        let outcome = match message {
            GroupJoinMessage::Left(Notification::Next(a)) => self.on_left(a),
            GroupJoinMessage::Right(Notification::Next(b)) => self.on_right(b),
            GroupJoinMessage::Left(Notification::Complete) => {
                self.left_done = true;
                self.complete_if_drained();
                Ok(())
            }
            GroupJoinMessage::Right(Notification::Complete) => Ok(()),
            GroupJoinMessage::Window(WindowEvent::Closed(side, id)) => {
                self.close(side, id);
                Ok(())
            }
            GroupJoinMessage::Left(Notification::Error(error))
            | GroupJoinMessage::Right(Notification::Error(error))
            | GroupJoinMessage::Window(WindowEvent::Failed(error)) => Err(error),
        };

        if let Err(error) = outcome {
            self.fail(error);
        }
    }
}

/// Emits, for every `left` value, `selector(a, group)` where `group` streams
/// the `right` values that fall in `a`'s window.
pub fn group_join<A, B, WA, WB, R, SA, SB, F>(
    left: EventStream<A>,
    right: EventStream<B>,
    window_left: SA,
    window_right: SB,
    selector: F,
) -> EventStream<R>
where
    A: Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
    SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
    SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
    F: Fn(A, EventStream<B>) -> R + Send + Sync + 'static,
{
    let window_left: WindowSelector<A, WA> = Arc::new(window_left);
    let window_right: WindowSelector<B, WB> = Arc::new(window_right);
    let selector: GroupSelector<A, B, R> = Arc::new(selector);

    EventStream::create(move |subscriber: Subscriber<R>| {
        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new_cyclic(|weak| GroupJoinState {
            groups: OpenWindows::new(JoinSide::Left),
            right: OpenWindows::new(JoinSide::Right),
            left_done: false,
            next_id: 0,
            window_left: window_left.clone(),
            window_right: window_right.clone(),
            selector: selector.clone(),
            mailbox: weak,
            downstream: subscriber,
        });

        parent.add(left.subscribe(mailbox.observer(GroupJoinMessage::Left)));
        if !parent.is_cancelled() {
            parent.add(right.subscribe(mailbox.observer(GroupJoinMessage::Right)));
        }
    })
}

/// Extension trait providing [`group_join`] as a method.
pub trait GroupJoinExt<A: Send + 'static> {
    /// Groups the values of `other` under each value of this stream.
    fn group_join<B, WA, WB, R, SA, SB, F>(
        self,
        other: EventStream<B>,
        window_self: SA,
        window_other: SB,
        selector: F,
    ) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        WA: Send + 'static,
        WB: Send + 'static,
        R: Send + 'static,
        SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
        SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
        F: Fn(A, EventStream<B>) -> R + Send + Sync + 'static;
}

impl<A: Send + 'static> GroupJoinExt<A> for EventStream<A> {
    fn group_join<B, WA, WB, R, SA, SB, F>(
        self,
        other: EventStream<B>,
        window_self: SA,
        window_other: SB,
        selector: F,
    ) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        WA: Send + 'static,
        WB: Send + 'static,
        R: Send + 'static,
        SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
        SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
        F: Fn(A, EventStream<B>) -> R + Send + Sync + 'static,
    {
        group_join(self, other, window_self, window_other, selector)
    }
}
