use super::{FlightState, SharedAxes};
use crate::config::SessionConfig;
use crate::vehicle::VehicleActuator;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Struct representing the shared components of a control session, providing
/// both tasks access to the configuration, the vehicle handle, the published
/// axis values, the flight state channel and the cancellation token.
pub struct SessionContext {
    /// Immutable session configuration.
    config: Arc<SessionConfig>,
    /// Handle to the physical or simulated vehicle.
    vehicle: Arc<dyn VehicleActuator>,
    /// Last published pitch/yaw axis values.
    axes: Arc<SharedAxes>,
    /// Flight state channel; the manual task is the single writer.
    flight_tx: watch::Sender<FlightState>,
    /// Shared shutdown signal observed by both tasks.
    cancel: CancellationToken,
}

impl SessionContext {
    pub fn new(config: SessionConfig, vehicle: Arc<dyn VehicleActuator>) -> Self {
        let (flight_tx, _) = watch::channel(FlightState::Grounded);
        Self {
            config: Arc::new(config),
            vehicle,
            axes: Arc::new(SharedAxes::new()),
            flight_tx,
            cancel: CancellationToken::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig { &self.config }

    /// Provides a cloned reference to the vehicle handle.
    pub fn vehicle(&self) -> Arc<dyn VehicleActuator> { Arc::clone(&self.vehicle) }

    /// Provides a cloned reference to the shared axis cells.
    pub fn axes(&self) -> Arc<SharedAxes> { Arc::clone(&self.axes) }

    /// Current flight state, one coherent value per read.
    pub fn flight_state(&self) -> FlightState { *self.flight_tx.borrow() }

    /// Subscribes a reader to flight state updates.
    pub fn flight_rx(&self) -> watch::Receiver<FlightState> { self.flight_tx.subscribe() }

    /// Publishes a new flight state. Only the manual command handler and the
    /// shutdown path call this.
    pub fn set_flight_state(&self, state: FlightState) {
        self.flight_tx.send_replace(state);
    }

    pub fn cancel_token(&self) -> CancellationToken { self.cancel.clone() }

    pub fn is_cancelled(&self) -> bool { self.cancel.is_cancelled() }
}
