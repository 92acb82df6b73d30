//! Controller service — per-shutter command queues and the motion model.
//!
//! Each shutter owns a FIFO queue drained by a dedicated worker task, so
//! commands for one shutter execute strictly in order while different
//! shutters move concurrently. A `stop` empties the shutter's queue before
//! being enqueued, cancelling whatever was still pending for that device.
//!
//! The shutters give no feedback, so absolute positioning is a timed
//! estimate: the worker starts the motor, sleeps for the travel fraction,
//! and sends `stop`. A shutter whose position is unknown gets a calibration
//! run (full travel to the top end stop) queued ahead of its first
//! absolute move.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use shutterhub_domain::command::{CommandAction, ShutterCommand};
use shutterhub_domain::error::{DecodeError, ShutterHubError};
use shutterhub_domain::instruction::Instruction;
use shutterhub_domain::position::Position;
use shutterhub_domain::rf::Frame;
use shutterhub_domain::shutter::ShutterId;

use crate::ports::Transmitter;

/// Position estimate for one shutter.
#[derive(Debug, Clone, Copy)]
struct MotionState {
    position: Position,
    calibrated: bool,
}

/// Queue, wakeup handle, and position estimate for one shutter.
struct ShutterSlot {
    queue: Mutex<VecDeque<ShutterCommand>>,
    wake: Notify,
    motion: Mutex<MotionState>,
}

impl Default for ShutterSlot {
    fn default() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            wake: Notify::new(),
            motion: Mutex::new(MotionState {
                position: Position::TOP,
                calibrated: false,
            }),
        }
    }
}

/// Application service driving the four shutters through a [`Transmitter`].
pub struct ControllerService<T> {
    transmitter: T,
    slots: [ShutterSlot; 4],
}

fn lock<V>(mutex: &Mutex<V>) -> MutexGuard<'_, V> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<T> ControllerService<T> {
    /// Create a new service sending frames through the given transmitter.
    pub fn new(transmitter: T) -> Self {
        Self {
            transmitter,
            slots: [
                ShutterSlot::default(),
                ShutterSlot::default(),
                ShutterSlot::default(),
                ShutterSlot::default(),
            ],
        }
    }

    fn slot(&self, shutter: ShutterId) -> &ShutterSlot {
        let index = match shutter {
            ShutterId::BedroomWindow => 0,
            ShutterId::BedroomDoor => 1,
            ShutterId::LivingRoomWindow => 2,
            ShutterId::LivingRoomDoor => 3,
        };
        &self.slots[index]
    }

    /// Enqueue a command for its shutter.
    ///
    /// A `stop` clears the shutter's pending queue first so nothing stale
    /// runs after the user halted the device.
    pub fn submit(&self, command: ShutterCommand) {
        let slot = self.slot(command.shutter);
        {
            let mut queue = lock(&slot.queue);
            if command.action == CommandAction::Relative(Instruction::Stop) {
                queue.clear();
            }
            queue.push_back(command);
        }
        tracing::debug!(id = %command.id, shutter = %command.shutter, "command queued");
        slot.wake.notify_one();
    }

    /// Decode and enqueue a manual-control command string such as `3,up`.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] when the string is malformed or names an
    /// unknown device or direction.
    pub fn submit_relative(&self, input: &str) -> Result<(), DecodeError> {
        let command = ShutterCommand::parse_relative(input)?;
        self.submit(command);
        Ok(())
    }

    /// Decode and enqueue an absolute move for the shutter named by
    /// `token`, calibrating first if its position is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownShutter`] for an unknown token; the
    /// scale is lenient and never fails.
    pub fn submit_absolute(&self, token: &str, scale: &str) -> Result<(), DecodeError> {
        let command = ShutterCommand::parse_absolute(token, scale)?;
        if !self.is_calibrated(command.shutter) {
            self.submit(ShutterCommand::calibrate(command.shutter));
        }
        self.submit(command);
        Ok(())
    }

    /// Decode a calibration-button digit and enqueue the calibration run.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownShutter`] for digits outside `0..=3`.
    pub fn submit_calibrate(&self, digit: &str) -> Result<ShutterId, DecodeError> {
        let shutter = ShutterId::from_digit(digit)?;
        self.submit(ShutterCommand::calibrate(shutter));
        Ok(shutter)
    }

    /// Current position estimate, [`None`] while the shutter is
    /// uncalibrated.
    #[must_use]
    pub fn position(&self, shutter: ShutterId) -> Option<Position> {
        let motion = *lock(&self.slot(shutter).motion);
        motion.calibrated.then_some(motion.position)
    }

    fn is_calibrated(&self, shutter: ShutterId) -> bool {
        lock(&self.slot(shutter).motion).calibrated
    }
}

impl<T: Transmitter + Send + Sync + 'static> ControllerService<T> {
    /// Spawn one worker task per shutter, each draining that shutter's
    /// queue for the lifetime of the service.
    pub fn spawn_workers(self: &Arc<Self>) -> Vec<JoinHandle<()>> {
        ShutterId::ALL
            .into_iter()
            .map(|shutter| {
                let service = Arc::clone(self);
                tokio::spawn(async move { service.run_shutter(shutter).await })
            })
            .collect()
    }

    async fn run_shutter(&self, shutter: ShutterId) {
        loop {
            let next = lock(&self.slot(shutter).queue).pop_front();
            match next {
                Some(command) => {
                    if let Err(err) = self.process(command).await {
                        tracing::error!(shutter = %shutter, error = %err, "command failed");
                    }
                }
                None => self.slot(shutter).wake.notified().await,
            }
        }
    }

    async fn process(&self, command: ShutterCommand) -> Result<(), ShutterHubError> {
        tracing::debug!(id = %command.id, shutter = %command.shutter, "processing command");
        match command.action {
            CommandAction::Relative(instruction) => self.drive(command.shutter, instruction).await,
            CommandAction::MoveTo(target) => self.move_to(command.shutter, target).await,
            CommandAction::Calibrate => self.calibrate(command.shutter).await,
        }
    }

    async fn drive(
        &self,
        shutter: ShutterId,
        instruction: Instruction,
    ) -> Result<(), ShutterHubError> {
        self.transmitter
            .transmit(Frame::encode(shutter, instruction))
            .await
    }

    /// Drive to the top end stop for the full up-travel time. The motor
    /// halts itself at the end stop, so no `stop` frame follows.
    async fn calibrate(&self, shutter: ShutterId) -> Result<(), ShutterHubError> {
        tracing::info!(shutter = %shutter, "calibrating");
        self.drive(shutter, Instruction::Up).await?;
        tokio::time::sleep(shutter.travel().up).await;
        let mut motion = lock(&self.slot(shutter).motion);
        motion.position = Position::TOP;
        motion.calibrated = true;
        Ok(())
    }

    async fn move_to(&self, shutter: ShutterId, target: Position) -> Result<(), ShutterHubError> {
        let current = lock(&self.slot(shutter).motion).position;
        let delta = current.delta_to(target);
        if delta == 0 {
            tracing::debug!(shutter = %shutter, position = %target, "already at target");
            return Ok(());
        }
        let travel = shutter.travel();
        let (instruction, full_travel) = if delta > 0 {
            (Instruction::Down, travel.down)
        } else {
            (Instruction::Up, travel.up)
        };
        let run_time = full_travel.mul_f64(f64::from(delta.unsigned_abs()) / 100.0);
        tracing::info!(
            shutter = %shutter,
            from = %current,
            to = %target,
            run_time_ms = run_time.as_millis(),
            "moving"
        );
        self.drive(shutter, instruction).await?;
        tokio::time::sleep(run_time).await;
        self.drive(shutter, Instruction::Stop).await?;
        lock(&self.slot(shutter).motion).position = target;
        Ok(())
    }
}
