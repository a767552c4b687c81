mod simulator;

pub use simulator::SimulatedVehicle;

use crate::control::ActuationVector;
use async_trait::async_trait;
use std::fmt;

/// Failure reported by the vehicle link. Actuation failures are logged and
/// the loop continues; a lost handle triggers the shutdown path instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActuationError {
    SendFailed(String),
    HandleLost,
}

impl fmt::Display for ActuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuationError::SendFailed(reason) => write!(f, "send failed: {reason}"),
            ActuationError::HandleLost => write!(f, "vehicle handle lost"),
        }
    }
}

/// Abstraction over the physical or simulated vehicle.
///
/// `actuate` is fire-and-forget: the link holds no causal ordering across
/// calls, only recency, so each caller sends a complete vector and
/// last-write-wins on the wire. The discrete commands are blocking and may
/// fail; the caller decides whether to continue degraded.
#[async_trait]
pub trait VehicleActuator: Send + Sync {
    async fn actuate(&self, vector: ActuationVector) -> Result<(), ActuationError>;

    async fn takeoff(&self) -> Result<(), ActuationError>;

    async fn land(&self) -> Result<(), ActuationError>;

    /// Releases the vehicle handle. Called exactly once, at shutdown.
    async fn end(&self) -> Result<(), ActuationError>;

    /// Remaining battery in percent, if the link reports it.
    async fn battery(&self) -> Option<i32> { None }
}
