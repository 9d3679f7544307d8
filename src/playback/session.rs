use crate::trace::{generate, Step};

/// One input array together with its precomputed trace.
///
/// Never mutated after construction; a reset builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSession {
    array: Vec<i32>,
    trace: Vec<Step>,
}

impl PlaybackSession {
    pub fn new(array: Vec<i32>) -> Self {
        let trace = generate(&array);
        Self { array, trace }
    }

    /// The input the trace was generated from.
    pub fn array(&self) -> &[i32] {
        &self.array
    }

    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Index of the `Complete` step.
    pub fn last_index(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.trace.get(index)
    }
}
