use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User-facing playback speed dial.
///
/// Higher is faster: the autonomous tick interval is `1000 - speed`
/// milliseconds. Values are always kept inside [`Speed::MIN`]..=[`Speed::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u32")]
pub struct Speed(u32);

impl Speed {
    pub const MIN: u32 = 20;
    pub const MAX: u32 = 980;
    pub const DEFAULT: u32 = 500;
    /// Increment used by the `+`/`-` keys.
    pub const STEP: u32 = 20;

    /// Build a speed, clamping out-of-range values.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u32)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Time between two autonomous ticks.
    pub fn interval(self) -> Duration {
        Duration::from_millis(u64::from(1000 - self.0))
    }

    /// Dial position as shown to the user, relative to the maximum.
    pub fn percent(self) -> u32 {
        (f64::from(self.0) / f64::from(Self::MAX) * 100.0).round() as u32
    }

    pub fn faster(self) -> Self {
        Self::new(i64::from(self.0) + i64::from(Self::STEP))
    }

    pub fn slower(self) -> Self {
        Self::new(i64::from(self.0) - i64::from(Self::STEP))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for Speed {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Speed> for u32 {
    fn from(speed: Speed) -> Self {
        speed.0
    }
}
