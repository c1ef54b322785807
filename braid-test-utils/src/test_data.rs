// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fixtures shared by the operator tests.

use braid_core::EventStream;

/// The letters of the classic zip example, one more than [`numbers`].
pub fn letters() -> Vec<&'static str> {
    vec!["A", "B", "C", "d", "E"]
}

pub fn numbers() -> Vec<i32> {
    vec![1, 2, 3, 4]
}

pub fn letter_stream() -> EventStream<&'static str> {
    EventStream::from_values(letters())
}

pub fn number_stream() -> EventStream<i32> {
    EventStream::from_values(numbers())
}

/// A labelled reading, for tests that need a non-`Copy` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub sensor: String,
    pub value: i32,
}

impl Reading {
    pub fn new(sensor: impl Into<String>, value: i32) -> Self {
        Self {
            sensor: sensor.into(),
            value,
        }
    }
}

pub fn reading_north() -> Reading {
    Reading::new("north", 12)
}

pub fn reading_south() -> Reading {
    Reading::new("south", 7)
}

pub fn reading_east() -> Reading {
    Reading::new("east", 30)
}
