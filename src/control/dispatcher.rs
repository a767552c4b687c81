use super::{ActuationVector, SessionContext};
use crate::error;
use crate::signal::Intent;
use crate::vehicle::ActuationError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Turns classified intent into a complete actuation vector and sends it to
/// the vehicle, rate-bounded so a fast sample stream cannot flood the link.
///
/// While the vehicle is grounded every dispatch yields the zero vector; the
/// EMG path can never lift the vehicle off. While airborne, pitch is the
/// intent scaled by the configured max speed and yaw is composed in from the
/// manual rotation axis.
pub struct ActuationDispatcher {
    context: Arc<SessionContext>,
    min_interval: Duration,
    last_sent: Option<Instant>,
}

impl ActuationDispatcher {
    pub fn new(context: Arc<SessionContext>) -> Self {
        let min_interval = context.config().min_command_interval;
        Self { context, min_interval, last_sent: None }
    }

    /// Composes and sends one actuation vector for the given intent.
    ///
    /// The computed vector is always returned; the send is skipped when the
    /// minimum inter-command interval has not elapsed yet. A failed send is
    /// logged and the loop continues with the next sample — except a lost
    /// vehicle handle, the one unrecoverable case, which cancels the session
    /// so the orderly cleanup path runs.
    pub async fn dispatch(&mut self, intent: Intent, intensity: f32) -> ActuationVector {
        let vector = self.compose(intent, intensity);
        self.context.axes().set_pitch(vector.pitch);

        if let Some(last) = self.last_sent {
            if last.elapsed() < self.min_interval {
                return vector;
            }
        }
        self.last_sent = Some(Instant::now());
        match self.context.vehicle().actuate(vector).await {
            Ok(()) => {}
            Err(ActuationError::HandleLost) => {
                error!("Vehicle handle lost, cancelling session");
                self.context.cancel_token().cancel();
            }
            Err(e) => error!("Actuation send failed: {e}"),
        }
        vector
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn compose(&self, intent: Intent, intensity: f32) -> ActuationVector {
        if !self.context.flight_state().is_airborne() {
            return ActuationVector::ZERO;
        }
        let magnitude = (self.context.config().max_speed as f32 * intensity).round() as i32;
        let pitch = match intent {
            Intent::Forward => magnitude,
            Intent::Backward => -magnitude,
            Intent::Hover => 0,
        };
        ActuationVector::new(0, pitch, self.context.axes().yaw(), 0)
    }
}
