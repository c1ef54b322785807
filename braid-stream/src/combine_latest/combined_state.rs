// Copyright 2025 Braid contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Snapshot handed to the [`combine_latest_all`](crate::combine_latest_all) combiner.
///
/// Holds the latest value of every source, in source order, and the index of
/// the source whose arrival triggered the emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedState<V> {
    values: Vec<V>,
    trigger: usize,
}

impl<V> CombinedState<V> {
    pub fn new(values: Vec<V>, trigger: usize) -> Self {
        Self { values, trigger }
    }

    /// Latest values, one per source.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Index of the source that emitted last.
    pub fn trigger_index(&self) -> usize {
        self.trigger
    }

    /// The value that triggered this emission.
    pub fn trigger_value(&self) -> Option<&V> {
        self.values.get(self.trigger)
    }

    pub fn into_values(self) -> Vec<V> {
        self.values
    }

    /// Returns the number of sources in the combined state.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
