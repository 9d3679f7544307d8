//! Navigating a trace over time.

mod controller;
mod driver;
mod session;
mod source;
mod speed;

pub use controller::{PlaybackController, PlaybackStatus, Schedule};
pub use driver::{PlaybackCommand, PlaybackDriver, PlaybackFrame, PlaybackHandle};
pub use session::PlaybackSession;
pub use source::{ArraySource, FixedArraySource, RandomArraySource};
pub use speed::Speed;
