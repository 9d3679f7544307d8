//! Where session arrays come from.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the input array for each new session.
pub trait ArraySource: Send {
    fn next_array(&mut self) -> Vec<i32>;
}

/// Uniformly random values in an inclusive range.
pub struct RandomArraySource {
    len: usize,
    range: RangeInclusive<i32>,
    /// `None` uses the thread RNG.
    rng: Option<StdRng>,
}

impl RandomArraySource {
    /// A reversed range such as `99..=10` is treated as `10..=99`.
    pub fn new(len: usize, range: RangeInclusive<i32>) -> Self {
        Self {
            len,
            range: ordered(range),
            rng: None,
        }
    }

    /// Same as [`RandomArraySource::new`], but reproducible across runs.
    pub fn seeded(len: usize, range: RangeInclusive<i32>, seed: u64) -> Self {
        Self {
            len,
            range: ordered(range),
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

fn ordered(range: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let (start, end) = range.into_inner();
    if start > end {
        end..=start
    } else {
        start..=end
    }
}

impl ArraySource for RandomArraySource {
    fn next_array(&mut self) -> Vec<i32> {
        let range = self.range.clone();
        match self.rng.as_mut() {
            Some(rng) => (0..self.len).map(|_| rng.random_range(range.clone())).collect(),
            None => {
                let mut rng = rand::rng();
                (0..self.len).map(|_| rng.random_range(range.clone())).collect()
            }
        }
    }
}

/// Always yields the same array.
#[derive(Debug, Clone)]
pub struct FixedArraySource(Vec<i32>);

impl FixedArraySource {
    pub fn new(array: Vec<i32>) -> Self {
        Self(array)
    }
}

impl ArraySource for FixedArraySource {
    fn next_array(&mut self) -> Vec<i32> {
        self.0.clone()
    }
}
