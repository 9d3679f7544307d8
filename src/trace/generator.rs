//! Instrumented bubble sort.

use super::listing::highlight_for;
use super::{Step, StepKind};

/// Expand one bubble sort run over `initial` into its full trace.
///
/// The sort runs on a private copy; every emitted [`Step`] owns its own
/// snapshot. Every pass performs all `n - i - 1` comparisons even when it
/// swaps nothing, so the number of `Compare` steps is always `n * (n - 1) / 2`.
/// Inputs of length 0 or 1 produce only `Init` and `Complete`.
pub fn generate(initial: &[i32]) -> Vec<Step> {
    let mut arr = initial.to_vec();
    let n = arr.len();
    let mut steps = Vec::with_capacity(capacity_hint(n));

    steps.push(snapshot(
        &arr,
        Vec::new(),
        StepKind::Init,
        "Here is the unsorted array. Let's start sorting!".to_string(),
    ));

    if n > 1 {
        for i in 0..n {
            for j in 0..n - i - 1 {
                steps.push(snapshot(
                    &arr,
                    vec![j, j + 1],
                    StepKind::Compare,
                    format!(
                        "Compare index {} ({}) with index {} ({}).",
                        j,
                        arr[j],
                        j + 1,
                        arr[j + 1]
                    ),
                ));

                if arr[j] > arr[j + 1] {
                    arr.swap(j, j + 1);
                    steps.push(snapshot(
                        &arr,
                        vec![j, j + 1],
                        StepKind::Swap,
                        format!(
                            "{} is larger, so it bubbles up to the right.",
                            arr[j + 1]
                        ),
                    ));
                }
            }

            let sorted: Vec<usize> = (0..=i).map(|k| n - 1 - k).collect();
            steps.push(snapshot(
                &arr,
                sorted,
                StepKind::SortedBoundary,
                format!(
                    "The largest remaining value {} is now fixed at the end.",
                    arr[n - 1 - i]
                ),
            ));
        }
    }

    steps.push(snapshot(
        &arr,
        (0..n).collect(),
        StepKind::Complete,
        "Every element is in sorted order!".to_string(),
    ));

    tracing::debug!(n, steps = steps.len(), "Generated bubble sort trace");
    steps
}

fn snapshot(arr: &[i32], indices: Vec<usize>, kind: StepKind, narrative: String) -> Step {
    Step {
        array: arr.to_vec(),
        indices,
        kind,
        narrative,
        highlight_line: Some(highlight_for(kind)),
    }
}

/// Upper bound on trace length: every comparison swapping, plus one
/// boundary per pass and the two bookends.
fn capacity_hint(n: usize) -> usize {
    n * n.saturating_sub(1) + n + 2
}
