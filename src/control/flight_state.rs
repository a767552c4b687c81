use strum_macros::Display;

/// Whether the vehicle is on the ground or in the air.
///
/// Mutated only by the manual command handler (takeoff/land); the signal
/// task only reads it to gate continuous actuation. EMG input can never
/// cause a transition.
#[derive(Debug, Display, PartialEq, Eq, Clone, Copy, Hash)]
pub enum FlightState {
    Grounded,
    Airborne,
}

impl FlightState {
    pub fn is_airborne(self) -> bool { self == FlightState::Airborne }
}
