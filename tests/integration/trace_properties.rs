//! Integration tests for trace generation
//!
//! Checks the structural guarantees of a generated trace against a reference
//! sort, both on fixed scenarios and on arbitrary inputs.

use bubbletrace::{generate, Step, StepKind, TraceSummary};
use proptest::prelude::*;

fn count(steps: &[Step], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind == kind).count()
}

/// Test the walkthrough for [5, 3, 8, 1]
#[test]
fn test_scenario_5_3_8_1() {
    let steps = generate(&[5, 3, 8, 1]);

    assert_eq!(steps[0].kind, StepKind::Init);
    assert_eq!(steps[0].array, vec![5, 3, 8, 1]);
    assert!(steps[0].indices.is_empty());

    assert_eq!(steps[1].kind, StepKind::Compare);
    assert_eq!(steps[1].indices, vec![0, 1]);
    assert_eq!(steps[1].array, vec![5, 3, 8, 1]);

    assert_eq!(steps[2].kind, StepKind::Swap);
    assert_eq!(steps[2].array, vec![3, 5, 8, 1]);

    assert_eq!(steps[3].kind, StepKind::Compare);
    assert_eq!(steps[3].indices, vec![1, 2]);
    assert_eq!((steps[3].array[1], steps[3].array[2]), (5, 8));

    assert_eq!(steps[4].kind, StepKind::Compare);
    assert_eq!(steps[4].indices, vec![2, 3]);
    assert_eq!((steps[4].array[2], steps[4].array[3]), (8, 1));

    assert_eq!(steps[5].kind, StepKind::Swap);
    assert_eq!(steps[5].array, vec![3, 5, 1, 8]);

    assert_eq!(steps[6].kind, StepKind::SortedBoundary);
    assert_eq!(steps[6].indices, vec![3]);

    let last = steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Complete);
    assert_eq!(last.array, vec![1, 3, 5, 8]);
    assert_eq!(last.indices, vec![0, 1, 2, 3]);
}

/// Test that a sorted input still runs every comparison
#[test]
fn test_already_sorted_has_no_early_exit() {
    let steps = generate(&[1, 2, 3]);
    assert_eq!(count(&steps, StepKind::Compare), 3);
    assert_eq!(count(&steps, StepKind::Swap), 0);
    assert_eq!(count(&steps, StepKind::SortedBoundary), 3);
    let last = steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Complete);
    assert_eq!(last.array, vec![1, 2, 3]);
}

/// Test that equal keys never swap
#[test]
fn test_equal_values_do_not_swap() {
    let steps = generate(&[4, 4, 4, 4]);
    assert_eq!(count(&steps, StepKind::Swap), 0);

    let steps = generate(&[2, 1, 2]);
    // Only the leading 2 moves past the 1; the two 2s never trade places.
    assert_eq!(count(&steps, StepKind::Swap), 1);
}

/// Test that boundaries name a growing suffix
#[test]
fn test_boundaries_grow_one_position_per_pass() {
    let steps = generate(&[9, 7, 5, 3, 1]);
    let boundaries: Vec<&Step> = steps
        .iter()
        .filter(|s| s.kind == StepKind::SortedBoundary)
        .collect();
    assert_eq!(boundaries.len(), 5);
    for (i, step) in boundaries.iter().enumerate() {
        let expected: Vec<usize> = (0..=i).map(|k| 4 - k).collect();
        assert_eq!(step.indices, expected);
    }
}

/// Replay the trace's swaps over `(value, original position)` pairs.
fn replay_with_origins(input: &[i32], steps: &[Step]) -> Vec<(i32, usize)> {
    let mut tagged: Vec<(i32, usize)> = input.iter().copied().zip(0..).collect();
    for step in steps.iter().filter(|s| s.kind == StepKind::Swap) {
        let (a, b) = step.pair().unwrap();
        tagged.swap(a, b);
    }
    tagged
}

fn assert_equal_keys_keep_order(sorted: &[(i32, usize)]) {
    for pair in sorted.windows(2) {
        if pair[0].0 == pair[1].0 {
            assert!(pair[0].1 < pair[1].1, "equal keys reordered: {sorted:?}");
        }
    }
}

/// Test that equal keys come out in their original order
#[test]
fn test_equal_keys_keep_relative_order() {
    let input = [3, 1, 3, 2, 1, 3];
    let steps = generate(&input);
    let sorted = replay_with_origins(&input, &steps);

    let values: Vec<i32> = sorted.iter().map(|(v, _)| *v).collect();
    assert_eq!(values, steps.last().unwrap().array);
    assert_eq!(
        sorted,
        vec![(1, 1), (1, 4), (2, 3), (3, 0), (3, 2), (3, 5)]
    );
    assert_equal_keys_keep_order(&sorted);
}

fn reference_sort(input: &[i32]) -> Vec<i32> {
    let mut sorted = input.to_vec();
    sorted.sort();
    sorted
}

proptest! {
    #[test]
    fn prop_step_counts(input in prop::collection::vec(-50i32..50, 2..16)) {
        let n = input.len();
        let steps = generate(&input);
        let summary = TraceSummary::of(&steps);

        prop_assert_eq!(summary.compares, n * (n - 1) / 2);
        prop_assert!(summary.swaps <= summary.compares);
        prop_assert_eq!(summary.boundaries, n);
        prop_assert_eq!(steps.len(), 1 + summary.compares + summary.swaps + n + 1);
        prop_assert_eq!(steps.first().map(|s| s.kind), Some(StepKind::Init));
        prop_assert_eq!(steps.last().map(|s| s.kind), Some(StepKind::Complete));
    }

    #[test]
    fn prop_every_snapshot_has_input_length(input in prop::collection::vec(any::<i32>(), 0..16)) {
        for step in generate(&input) {
            prop_assert_eq!(step.array.len(), input.len());
        }
    }

    #[test]
    fn prop_final_array_matches_reference_sort(input in prop::collection::vec(any::<i32>(), 0..16)) {
        let steps = generate(&input);
        let last = steps.last().unwrap();
        prop_assert_eq!(&last.array, &reference_sort(&input));
    }

    #[test]
    fn prop_generation_is_deterministic(input in prop::collection::vec(any::<i32>(), 0..12)) {
        prop_assert_eq!(generate(&input), generate(&input));
    }

    #[test]
    fn prop_swap_transposes_preceding_compare(input in prop::collection::vec(0i32..20, 2..12)) {
        let steps = generate(&input);
        for (idx, step) in steps.iter().enumerate() {
            if step.kind != StepKind::Swap {
                continue;
            }
            let prev = &steps[idx - 1];
            prop_assert_eq!(prev.kind, StepKind::Compare);
            prop_assert_eq!(&prev.indices, &step.indices);

            let (a, b) = step.pair().unwrap();
            prop_assert!(prev.array[a] > prev.array[b]);
            prop_assert_eq!(step.array[a], prev.array[b]);
            prop_assert_eq!(step.array[b], prev.array[a]);
            for k in (0..step.array.len()).filter(|k| *k != a && *k != b) {
                prop_assert_eq!(step.array[k], prev.array[k]);
            }
        }
    }

    #[test]
    fn prop_equal_keys_keep_relative_order(input in prop::collection::vec(0i32..5, 0..14)) {
        let steps = generate(&input);
        for (idx, step) in steps.iter().enumerate().filter(|(_, s)| s.kind == StepKind::Swap) {
            let (a, b) = step.pair().unwrap();
            prop_assert_ne!(steps[idx - 1].array[a], steps[idx - 1].array[b]);
        }

        let sorted = replay_with_origins(&input, &steps);
        for pair in sorted.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }

    #[test]
    fn prop_compare_pairs_are_adjacent(input in prop::collection::vec(any::<i32>(), 2..12)) {
        for step in generate(&input) {
            if let Some((a, b)) = step.pair() {
                prop_assert_eq!(b, a + 1);
            }
        }
    }
}
