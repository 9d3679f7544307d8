//! Cursor, run flag and speed over a precomputed trace.
//!
//! The controller is a plain state machine. It never sleeps or spawns; each
//! operation returns a [`Schedule`] telling whoever owns the clock what the
//! single pending tick should be after the change. See
//! [`PlaybackDriver`](super::PlaybackDriver) for the tokio owner.

use std::time::Duration;

use serde::Serialize;

use super::session::PlaybackSession;
use super::source::ArraySource;
use super::speed::Speed;
use crate::trace::{Step, StepKind};

/// Timer directive produced by every controller operation.
///
/// Except for [`Schedule::Keep`], whatever timer was pending before the
/// operation is superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Leave the pending tick untouched.
    Keep,
    /// No tick should be pending.
    Idle,
    /// Fire [`PlaybackController::fire`] with `epoch` after `after`.
    Arm { epoch: u64, after: Duration },
}

/// Playback metadata for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackStatus {
    pub cursor: usize,
    /// Trace length; zero before the first session.
    pub len: usize,
    pub running: bool,
    pub speed: Speed,
}

impl PlaybackStatus {
    pub fn interval(&self) -> Duration {
        self.speed.interval()
    }

    /// Index of the last step, as displayed in "cursor / last".
    pub fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.last_index()
    }
}

/// Navigates one [`PlaybackSession`] at a time.
pub struct PlaybackController {
    source: Box<dyn ArraySource>,
    session: Option<PlaybackSession>,
    cursor: usize,
    running: bool,
    speed: Speed,
    /// Bumped whenever the pending tick is replaced.
    epoch: u64,
}

impl PlaybackController {
    /// A controller with no session yet. Call [`reset`](Self::reset) or
    /// [`load`](Self::load) to generate the first trace.
    pub fn new(source: Box<dyn ArraySource>, speed: Speed) -> Self {
        Self {
            source,
            session: None,
            cursor: 0,
            running: false,
            speed,
            epoch: 0,
        }
    }

    /// Create and immediately start the first session.
    pub fn start(source: Box<dyn ArraySource>, speed: Speed) -> Self {
        let mut controller = Self::new(source, speed);
        controller.reset();
        controller
    }

    pub fn session(&self) -> Option<&PlaybackSession> {
        self.session.as_ref()
    }

    /// The step under the cursor, or the empty placeholder before any trace exists.
    pub fn current_step(&self) -> &Step {
        self.session
            .as_ref()
            .and_then(|s| s.step(self.cursor))
            .unwrap_or_else(|| Step::placeholder_ref())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.session.as_ref().map_or(0, PlaybackSession::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn status(&self) -> PlaybackStatus {
        PlaybackStatus {
            cursor: self.cursor,
            len: self.len(),
            running: self.running,
            speed: self.speed,
        }
    }

    fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Start autonomous advance. Without a session there is nothing to play;
    /// while already running the pending tick is kept as is.
    pub fn play(&mut self) -> Schedule {
        if self.running {
            return Schedule::Keep;
        }
        if self.session.is_some() {
            tracing::debug!(cursor = self.cursor, "Playback started");
            self.running = true;
        }
        self.reschedule()
    }

    pub fn pause(&mut self) -> Schedule {
        if self.running {
            tracing::debug!(cursor = self.cursor, "Playback paused");
            self.running = false;
        }
        self.reschedule()
    }

    pub fn toggle(&mut self) -> Schedule {
        if self.running {
            self.pause()
        } else {
            self.play()
        }
    }

    /// One autonomous advance. At the last step this stops playback instead
    /// of moving. Does nothing while paused.
    pub fn tick(&mut self) -> Schedule {
        if !self.running {
            return self.reschedule();
        }
        if self.cursor < self.last_index() {
            self.cursor += 1;
            tracing::trace!(cursor = self.cursor, "Tick");
        } else {
            tracing::debug!(cursor = self.cursor, "Reached final step, pausing");
            self.running = false;
        }
        self.reschedule()
    }

    /// Deliver a timer expiry. Returns `None` when `epoch` belongs to a tick
    /// that has since been replaced.
    pub fn fire(&mut self, epoch: u64) -> Option<Schedule> {
        if epoch != self.epoch {
            tracing::trace!(epoch, current = self.epoch, "Ignoring stale tick");
            return None;
        }
        Some(self.tick())
    }

    pub fn step_forward(&mut self) -> Schedule {
        self.cursor = (self.cursor + 1).min(self.last_index());
        self.reschedule()
    }

    pub fn step_backward(&mut self) -> Schedule {
        self.cursor = self.cursor.saturating_sub(1);
        self.reschedule()
    }

    /// Change the dial. Out-of-range values are clamped; the new interval
    /// applies from the next armed tick.
    pub fn set_speed(&mut self, value: i64) -> Schedule {
        self.speed = Speed::new(value);
        tracing::debug!(speed = self.speed.value(), "Speed changed");
        self.reschedule()
    }

    /// One notch up from the current speed.
    pub fn faster(&mut self) -> Schedule {
        self.set_speed(i64::from(self.speed.faster().value()))
    }

    /// One notch down from the current speed.
    pub fn slower(&mut self) -> Schedule {
        self.set_speed(i64::from(self.speed.slower().value()))
    }

    /// Replace the session with a fresh array from the source.
    pub fn reset(&mut self) -> Schedule {
        let array = self.source.next_array();
        self.load(array)
    }

    /// Replace the session with a trace over `array`. Cursor goes back to the
    /// start and playback is paused.
    pub fn load(&mut self, array: Vec<i32>) -> Schedule {
        let session = PlaybackSession::new(array);
        tracing::debug!(
            n = session.array().len(),
            steps = session.len(),
            "Loaded new session"
        );
        self.session = Some(session);
        self.cursor = 0;
        self.running = false;
        self.reschedule()
    }

    /// Jump straight to `index`, clamped to the trace.
    pub fn seek(&mut self, index: usize) -> Schedule {
        self.cursor = index.min(self.last_index());
        self.reschedule()
    }

    /// Replace the pending tick. While running at the final step the tick is
    /// due immediately so playback stops without waiting a full interval.
    fn reschedule(&mut self) -> Schedule {
        self.epoch = self.epoch.wrapping_add(1);
        if !self.running {
            return Schedule::Idle;
        }
        let after = if self.cursor >= self.last_index() {
            Duration::ZERO
        } else {
            self.speed.interval()
        };
        Schedule::Arm {
            epoch: self.epoch,
            after,
        }
    }

    /// Whether the cursor sits on the `Complete` step.
    pub fn is_complete(&self) -> bool {
        self.current_step().kind == StepKind::Complete && !self.current_step().is_placeholder()
    }
}
