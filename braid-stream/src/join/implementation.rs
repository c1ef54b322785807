// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use braid_core::{
    invoke_selector, Actor, BraidError, EventStream, Mailbox, Notification, Subscriber,
    WeakMailbox,
};
use std::sync::Arc;

use crate::window::{JoinSide, OpenWindows, WindowEvent, WindowSelector};

enum JoinMessage<A, B> {
    Left(Notification<A>),
    Right(Notification<B>),
    Window(WindowEvent),
}

impl<A, B> From<WindowEvent> for JoinMessage<A, B> {
    fn from(event: WindowEvent) -> Self {
        Self::Window(event)
    }
}

type Combiner<A, B, R> = Arc<dyn Fn(A, B) -> R + Send + Sync>;

struct JoinState<A, B, WA, WB, R>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    left: OpenWindows<A>,
    right: OpenWindows<B>,
    left_done: bool,
    right_done: bool,
    next_id: u64,
    window_left: WindowSelector<A, WA>,
    window_right: WindowSelector<B, WB>,
    combiner: Combiner<A, B, R>,
    mailbox: WeakMailbox<JoinState<A, B, WA, WB, R>>,
    downstream: Subscriber<R>,
}

impl<A, B, WA, WB, R> JoinState<A, B, WA, WB, R>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    fn arrival_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn emit(&self, a: A, b: B) -> Result<(), BraidError> {
        let value = invoke_selector("join", || (self.combiner)(a, b))?;
        self.downstream.next(value);
        Ok(())
    }

    fn on_left(&mut self, a: A) -> Result<(), BraidError> {
        for b in self.right.values() {
            self.emit(a.clone(), b.clone())?;
        }

        let window = invoke_selector("join", || (self.window_left)(&a))?;
        let Some(mailbox) = self.mailbox.upgrade() else {
            return Ok(());
        };
        let id = self.arrival_id();
        let parent = self.downstream.subscription().clone();
        self.left.open(id, a, &window, &mailbox, &parent);
        Ok(())
    }

    fn on_right(&mut self, b: B) -> Result<(), BraidError> {
        for a in self.left.values() {
            self.emit(a.clone(), b.clone())?;
        }

        let window = invoke_selector("join", || (self.window_right)(&b))?;
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
                self.left.close(id, parent);
            }
            JoinSide::Right => {
                self.right.close(id, parent);
            }
        }
        self.complete_if_drained();
    }

    fn complete_if_drained(&self) {
        if self.left_done && self.right_done && self.left.is_empty() && self.right.is_empty() {
            debug!("join completed");
            self.downstream.complete();
        }
    }
}

impl<A, B, WA, WB, R> Actor for JoinState<A, B, WA, WB, R>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
{
    type Message = JoinMessage<A, B>;

    fn handle(&mut self, message: Self::Message) {
        if self.downstream.is_closed() {
            return;
        }

        let outcome = match message {
            JoinMessage::Left(Notification::Next(a)) => self.on_left(a),
            JoinMessage::Right(Notification::Next(b)) => self.on_right(b),
            JoinMessage::Left(Notification::Complete) => {
                self.left_done = true;
                self.complete_if_drained();
                Ok(())
            }
            JoinMessage::Right(Notification::Complete) => {
                self.right_done = true;
                self.complete_if_drained();
                Ok(())
            }
            JoinMessage::Window(WindowEvent::Closed(side, id)) => {
                self.close(side, id);
                Ok(())
            }
            JoinMessage::Left(Notification::Error(error))
            | JoinMessage::Right(Notification::Error(error))
            | JoinMessage::Window(WindowEvent::Failed(error)) => Err(error),
        };

        if let Err(error) = outcome {
            self.downstream.error(error);
        }
    }
}

/// Pairs values of `left` and `right` whose windows overlap.
///
/// `window_left` and `window_right` return, for each arrival, the stream
/// whose first value or completion ends that arrival's window.
pub fn join<A, B, WA, WB, R, SA, SB, F>(
    left: EventStream<A>,
    right: EventStream<B>,
    window_left: SA,
    window_right: SB,
    combiner: F,
) -> EventStream<R>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    WA: Send + 'static,
    WB: Send + 'static,
    R: Send + 'static,
    SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
    SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    let window_left: WindowSelector<A, WA> = Arc::new(window_left);
    let window_right: WindowSelector<B, WB> = Arc::new(window_right);
    let combiner: Combiner<A, B, R> = Arc::new(combiner);

    EventStream::create(move |subscriber: Subscriber<R>| {
        let parent = subscriber.subscription().clone();
        let mailbox = Mailbox::new_cyclic(|weak| JoinState {
            left: OpenWindows::new(JoinSide::Left),
            right: OpenWindows::new(JoinSide::Right),
            left_done: false,
            right_done: false,
            next_id: 0,
            window_left: window_left.clone(),
            window_right: window_right.clone(),
            combiner: combiner.clone(),
            mailbox: weak,
            downstream: subscriber,
        });

        parent.add(left.subscribe(mailbox.observer(JoinMessage::Left)));
        if !parent.is_cancelled() {
            parent.add(right.subscribe(mailbox.observer(JoinMessage::Right)));
        }
    })
}

/// Extension trait providing [`join`] as a method.
pub trait JoinExt<A: Clone + Send + 'static> {
    /// Joins this stream with `other` over per-arrival windows.
    fn join<B, WA, WB, R, SA, SB, F>(
        self,
        other: EventStream<B>,
        window_self: SA,
        window_other: SB,
        combiner: F,
    ) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        WA: Send + 'static,
        WB: Send + 'static,
        R: Send + 'static,
        SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
        SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static;
}

impl<A: Clone + Send + 'static> JoinExt<A> for EventStream<A> {
    fn join<B, WA, WB, R, SA, SB, F>(
        self,
        other: EventStream<B>,
        window_self: SA,
        window_other: SB,
        combiner: F,
    ) -> EventStream<R>
    where
        B: Clone + Send + 'static,
        WA: Send + 'static,
        WB: Send + 'static,
        R: Send + 'static,
        SA: Fn(&A) -> EventStream<WA> + Send + Sync + 'static,
        SB: Fn(&B) -> EventStream<WB> + Send + Sync + 'static,
        F: Fn(A, B) -> R + Send + Sync + 'static,
    {
        join(self, other, window_self, window_other, combiner)
    }
}
