//! Static source listing shown next to the animation.

use super::StepKind;

/// The bubble sort being animated, one entry per displayed line.
pub const BUBBLE_SORT_LISTING: [&str; 6] = [
    "def bubble_sort(arr):",
    "    n = len(arr)",
    "    for i in range(n):",
    "        for j in range(0, n - i - 1):",
    "            if arr[j] > arr[j + 1]:",
    "                arr[j], arr[j + 1] = arr[j + 1], arr[j]",
];

/// Listing line a step of the given kind corresponds to.
pub fn highlight_for(kind: StepKind) -> usize {
    match kind {
        StepKind::Init | StepKind::Complete => 0,
        StepKind::SortedBoundary => 2,
        StepKind::Compare => 4,
        StepKind::Swap => 5,
    }
}
