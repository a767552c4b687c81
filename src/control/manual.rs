use super::{ActuationVector, FlightState, SessionContext};
use crate::vehicle::ActuationError;
use crate::{error, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strum_macros::Display;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Discrete operator commands.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManualCommand {
    Takeoff,
    Land,
    RotateCw,
    RotateCcw,
    Quit,
}

/// Set of commands held during one input frame.
#[derive(Debug, Default, Clone)]
pub struct HeldCommands {
    held: HashSet<ManualCommand>,
}

impl HeldCommands {
    pub fn none() -> Self { Self::default() }

    pub fn hold(&mut self, cmd: ManualCommand) { self.held.insert(cmd); }

    pub fn release(&mut self, cmd: ManualCommand) { self.held.remove(&cmd); }

    pub fn is_held(&self, cmd: ManualCommand) -> bool { self.held.contains(&cmd) }
}

/// Source of manual operator input, sampled once per frame.
pub trait ManualInput: Send {
    fn poll(&mut self) -> HeldCommands;
}

/// Console-backed manual input.
///
/// A background task reads lines from stdin and forwards recognized keys
/// (`t`, `l`, `r`, `R`, `q`). A terminal cannot observe key release, so the
/// rotation keys act as hold toggles: pressing `r` again releases it.
pub struct StdinInput {
    rx: mpsc::UnboundedReceiver<ManualCommand>,
    held: HeldCommands,
}

impl StdinInput {
    pub fn start() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let cmd = match line.trim() {
                    "t" => Some(ManualCommand::Takeoff),
                    "l" => Some(ManualCommand::Land),
                    "r" => Some(ManualCommand::RotateCw),
                    "R" => Some(ManualCommand::RotateCcw),
                    "q" => Some(ManualCommand::Quit),
                    "" => None,
                    other => {
                        warn!("Unrecognized input {other:?} (expected t/l/r/R/q)");
                        None
                    }
                };
                if let Some(cmd) = cmd {
                    if tx.send(cmd).is_err() {
                        break;
                    }
                }
            }
        });
        Self { rx, held: HeldCommands::none() }
    }
}

impl ManualInput for StdinInput {
    fn poll(&mut self) -> HeldCommands {
        while let Ok(cmd) = self.rx.try_recv() {
            match cmd {
                ManualCommand::RotateCw | ManualCommand::RotateCcw => {
                    if self.held.is_held(cmd) {
                        self.held.release(cmd);
                    } else {
                        self.held.hold(cmd);
                    }
                }
                // Takeoff/land/quit are one-shot, consumed on the next frame.
                other => self.held.hold(other),
            }
        }
        let frame = self.held.clone();
        self.held.release(ManualCommand::Takeoff);
        self.held.release(ManualCommand::Land);
        self.held.release(ManualCommand::Quit);
        frame
    }
}

/// State machine applying discrete operator commands to the vehicle.
///
/// Sole writer of the flight state and of the yaw axis. Takeoff and land are
/// blocking transitions, ignored when the vehicle is already in the target
/// state; rotation holds yaw at ±max speed and composes with the EMG pitch
/// axis published by the signal task.
pub struct ManualController {
    context: Arc<SessionContext>,
    last_transition: Option<Instant>,
    rotating: bool,
}

impl ManualController {
    /// Hold-off after a takeoff/land transition, absorbing key repeats.
    const TRANSITION_DEBOUNCE: Duration = Duration::from_secs(1);

    pub fn new(context: Arc<SessionContext>) -> Self {
        Self { context, last_transition: None, rotating: false }
    }

    /// Applies one frame of held commands.
    pub async fn apply_frame(&mut self, held: &HeldCommands) {
        if held.is_held(ManualCommand::Quit) {
            info!("Quit requested");
            self.context.cancel_token().cancel();
            return;
        }
        self.apply_transitions(held).await;
        self.apply_rotation(held).await;
    }

    async fn apply_transitions(&mut self, held: &HeldCommands) {
        let debounced = self
            .last_transition
            .is_some_and(|t| t.elapsed() < Self::TRANSITION_DEBOUNCE);
        if debounced {
            return;
        }
        let airborne = self.context.flight_state().is_airborne();
        if held.is_held(ManualCommand::Takeoff) && !airborne {
            info!("Taking off...");
            match self.context.vehicle().takeoff().await {
                Ok(()) => {
                    self.context.set_flight_state(FlightState::Airborne);
                    self.last_transition = Some(Instant::now());
                }
                Err(e) => error!("Takeoff failed: {e}"),
            }
        } else if held.is_held(ManualCommand::Land) && airborne {
            info!("Landing...");
            match self.context.vehicle().land().await {
                Ok(()) => {
                    self.context.set_flight_state(FlightState::Grounded);
                    self.last_transition = Some(Instant::now());
                }
                Err(e) => error!("Landing failed: {e}"),
            }
        }
    }

    async fn apply_rotation(&mut self, held: &HeldCommands) {
        let airborne = self.context.flight_state().is_airborne();
        let max_speed = self.context.config().max_speed;
        let yaw = if !airborne {
            0
        } else if held.is_held(ManualCommand::RotateCcw) {
            -max_speed
        } else if held.is_held(ManualCommand::RotateCw) {
            max_speed
        } else {
            0
        };

        self.context.axes().set_yaw(yaw);
        if yaw != 0 {
            if !self.rotating {
                info!("Rotating {}...", if yaw > 0 { "clockwise" } else { "counter-clockwise" });
                self.rotating = true;
            }
            self.send_composed(yaw).await;
        } else if self.rotating {
            self.rotating = false;
            self.send_composed(0).await;
        }
    }

    /// Sends a complete vector with this task's yaw and the signal task's
    /// last published pitch. Last-write-wins on the wire is acceptable by
    /// the link's recency semantics.
    async fn send_composed(&self, yaw: i32) {
        let vector = ActuationVector::new(0, self.context.axes().pitch(), yaw, 0);
        match self.context.vehicle().actuate(vector).await {
            Ok(()) => {}
            Err(ActuationError::HandleLost) => {
                error!("Vehicle handle lost, cancelling session");
                self.context.cancel_token().cancel();
            }
            Err(e) => error!("Manual actuation send failed: {e}"),
        }
    }
}
