use super::{ActuationError, VehicleActuator};
use crate::control::ActuationVector;
use crate::{info, log};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory stand-in for the real vehicle link.
///
/// Tracks battery, airborne state and an integrated position, and logs every
/// movement in human-readable form. Used when no vehicle is reachable and by
/// the demo configuration.
pub struct SimulatedVehicle {
    inner: RwLock<SimState>,
}

struct SimState {
    battery: i32,
    airborne: bool,
    /// Position in cm: x (right), y (forward), z (up).
    position: [f32; 3],
}

impl SimulatedVehicle {
    /// Displacement per actuation tick per unit of commanded speed.
    const STEP: f32 = 0.1;
    const TAKEOFF_ALTITUDE: f32 = 100.0;

    pub fn new() -> Self {
        info!("SIMULATOR: vehicle initialized");
        Self {
            inner: RwLock::new(SimState { battery: 100, airborne: false, position: [0.0; 3] }),
        }
    }
}

impl Default for SimulatedVehicle {
    fn default() -> Self { Self::new() }
}

fn describe(vector: ActuationVector) -> String {
    let mut parts = Vec::new();
    match vector.pitch {
        p if p > 0 => parts.push(format!("Forward({p})")),
        p if p < 0 => parts.push(format!("Backward({})", -p)),
        _ => {}
    }
    match vector.roll {
        r if r > 0 => parts.push(format!("Right({r})")),
        r if r < 0 => parts.push(format!("Left({})", -r)),
        _ => {}
    }
    match vector.throttle {
        t if t > 0 => parts.push(format!("Up({t})")),
        t if t < 0 => parts.push(format!("Down({})", -t)),
        _ => {}
    }
    match vector.yaw {
        y if y > 0 => parts.push(format!("RotateCW({y})")),
        y if y < 0 => parts.push(format!("RotateCCW({})", -y)),
        _ => {}
    }
    parts.join(", ")
}

#[async_trait]
impl VehicleActuator for SimulatedVehicle {
    #[allow(clippy::cast_precision_loss)]
    async fn actuate(&self, vector: ActuationVector) -> Result<(), ActuationError> {
        let mut state = self.inner.write().await;
        if !state.airborne {
            return Ok(());
        }
        state.position[0] += vector.roll as f32 * Self::STEP;
        state.position[1] += vector.pitch as f32 * Self::STEP;
        state.position[2] += vector.throttle as f32 * Self::STEP;
        let movement = describe(vector);
        if !movement.is_empty() {
            log!("SIMULATOR: {movement} - Position: {:?}", state.position);
        }
        Ok(())
    }

    async fn takeoff(&self) -> Result<(), ActuationError> {
        let mut state = self.inner.write().await;
        info!("SIMULATOR: taking off");
        state.airborne = true;
        state.position[2] = Self::TAKEOFF_ALTITUDE;
        Ok(())
    }

    async fn land(&self) -> Result<(), ActuationError> {
        let mut state = self.inner.write().await;
        info!("SIMULATOR: landing");
        state.airborne = false;
        state.position = [0.0; 3];
        Ok(())
    }

    async fn end(&self) -> Result<(), ActuationError> {
        info!("SIMULATOR: session ended");
        Ok(())
    }

    async fn battery(&self) -> Option<i32> {
        Some(self.inner.read().await.battery)
    }
}
