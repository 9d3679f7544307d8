//! Bubble sort trace generation.
//!
//! [`generate`] turns an input array into the ordered list of [`Step`]s that
//! the playback controller navigates. Nothing in here keeps state between
//! calls: the same input always yields the same trace.

mod generator;
mod listing;
mod step;

pub use generator::generate;
pub use listing::{highlight_for, BUBBLE_SORT_LISTING};
pub use step::{Step, StepKind};

use serde::Serialize;

/// Per-kind counts for a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceSummary {
    pub steps: usize,
    pub compares: usize,
    pub swaps: usize,
    pub boundaries: usize,
}

impl TraceSummary {
    pub fn of(steps: &[Step]) -> Self {
        let mut summary = Self {
            steps: steps.len(),
            ..Self::default()
        };
        for step in steps {
            match step.kind {
                StepKind::Compare => summary.compares += 1,
                StepKind::Swap => summary.swaps += 1,
                StepKind::SortedBoundary => summary.boundaries += 1,
                StepKind::Init | StepKind::Complete => {}
            }
        }
        summary
    }
}
