//! Background task that owns a [`PlaybackController`] and its timer.
//!
//! Commands and timer expiries are handled one at a time in the same task, so
//! the controller never sees concurrent mutation. There is at most one pending
//! tick; every command replaces or keeps it as the controller asks.

use std::pin::Pin;

use serde::Serialize;
use tokio::sync::mpsc;
use tokio::time::{sleep, Sleep};

use super::controller::{PlaybackController, PlaybackStatus, Schedule};
use crate::trace::Step;

/// Intents accepted by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Toggle,
    StepForward,
    StepBackward,
    /// New random array and trace
    Reset,
    /// Load a specific array instead of a random one
    Load(Vec<i32>),
    SetSpeed(i64),
    /// One speed notch up from wherever the dial is when this is applied
    Faster,
    /// One speed notch down
    Slower,
    /// Shutdown the driver
    Shutdown,
}

/// What renderers see after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackFrame {
    pub step: Step,
    pub status: PlaybackStatus,
}

impl PlaybackFrame {
    pub fn of(controller: &PlaybackController) -> Self {
        Self {
            step: controller.current_step().clone(),
            status: controller.status(),
        }
    }
}

/// Handle to control a running [`PlaybackDriver`].
#[derive(Clone)]
pub struct PlaybackHandle {
    cmd_tx: mpsc::UnboundedSender<PlaybackCommand>,
}

impl PlaybackHandle {
    /// Send a command. Returns `false` once the driver has shut down.
    pub fn send(&self, command: PlaybackCommand) -> bool {
        self.cmd_tx.send(command).is_ok()
    }

    pub fn play(&self) {
        let _ = self.send(PlaybackCommand::Play);
    }

    pub fn pause(&self) {
        let _ = self.send(PlaybackCommand::Pause);
    }

    pub fn toggle(&self) {
        let _ = self.send(PlaybackCommand::Toggle);
    }

    pub fn step_forward(&self) {
        let _ = self.send(PlaybackCommand::StepForward);
    }

    pub fn step_backward(&self) {
        let _ = self.send(PlaybackCommand::StepBackward);
    }

    pub fn reset(&self) {
        let _ = self.send(PlaybackCommand::Reset);
    }

    pub fn load(&self, array: Vec<i32>) {
        let _ = self.send(PlaybackCommand::Load(array));
    }

    pub fn set_speed(&self, speed: i64) {
        let _ = self.send(PlaybackCommand::SetSpeed(speed));
    }

    pub fn faster(&self) {
        let _ = self.send(PlaybackCommand::Faster);
    }

    pub fn slower(&self) {
        let _ = self.send(PlaybackCommand::Slower);
    }

    pub fn shutdown(&self) {
        let _ = self.send(PlaybackCommand::Shutdown);
    }
}

/// The single armed tick.
struct PendingTick {
    epoch: u64,
    sleep: Pin<Box<Sleep>>,
}

pub struct PlaybackDriver {
    controller: PlaybackController,
    pending: Option<PendingTick>,
    /// Receive commands from the UI
    cmd_rx: mpsc::UnboundedReceiver<PlaybackCommand>,
    /// Send frames to the UI
    update_tx: mpsc::UnboundedSender<PlaybackFrame>,
}

impl PlaybackDriver {
    /// Spawn the driver and return a handle to control it.
    ///
    /// The current frame is published once right away, before any command.
    pub fn spawn(
        controller: PlaybackController,
        update_tx: mpsc::UnboundedSender<PlaybackFrame>,
    ) -> PlaybackHandle {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

        let driver = Self {
            controller,
            pending: None,
            cmd_rx,
            update_tx,
        };

        tokio::spawn(driver.run());

        PlaybackHandle { cmd_tx }
    }

    /// Main loop for the driver
    async fn run(mut self) {
        self.publish();

        loop {
            tokio::select! {
                cmd = self.cmd_rx.recv() => {
                    let Some(cmd) = cmd else {
                        tracing::debug!("All playback handles dropped");
                        break;
                    };
                    if cmd == PlaybackCommand::Shutdown {
                        break;
                    }
                    let schedule = self.apply(cmd);
                    self.arm(schedule);
                    self.publish();
                }
                epoch = Self::expiry(&mut self.pending) => {
                    self.pending = None;
                    if let Some(schedule) = self.controller.fire(epoch) {
                        self.arm(schedule);
                        self.publish();
                    }
                }
            }
        }

        tracing::debug!("Playback driver stopped");
    }

    fn apply(&mut self, cmd: PlaybackCommand) -> Schedule {
        let c = &mut self.controller;
        match cmd {
            PlaybackCommand::Play => c.play(),
            PlaybackCommand::Pause => c.pause(),
            PlaybackCommand::Toggle => c.toggle(),
            PlaybackCommand::StepForward => c.step_forward(),
            PlaybackCommand::StepBackward => c.step_backward(),
            PlaybackCommand::Reset => c.reset(),
            PlaybackCommand::Load(array) => c.load(array),
            PlaybackCommand::SetSpeed(speed) => c.set_speed(speed),
            PlaybackCommand::Faster => c.faster(),
            PlaybackCommand::Slower => c.slower(),
            PlaybackCommand::Shutdown => Schedule::Idle,
        }
    }

    /// Drop whatever was pending and arm the new tick, if any.
    fn arm(&mut self, schedule: Schedule) {
        self.pending = match schedule {
            Schedule::Keep => return,
            Schedule::Idle => None,
            Schedule::Arm { epoch, after } => Some(PendingTick {
                epoch,
                sleep: Box::pin(sleep(after)),
            }),
        };
    }

    /// Resolves with the pending tick's epoch; never resolves while idle.
    async fn expiry(pending: &mut Option<PendingTick>) -> u64 {
        match pending {
            Some(tick) => {
                tick.sleep.as_mut().await;
                tick.epoch
            }
            None => std::future::pending().await,
        }
    }

    fn publish(&self) {
        let _ = self.update_tx.send(PlaybackFrame::of(&self.controller));
    }
}
