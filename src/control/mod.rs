mod actuation;
mod context;
mod dispatcher;
mod flight_state;
mod manual;
mod supervisor;


pub use actuation::{ActuationVector, SharedAxes};
pub use context::SessionContext;
pub use dispatcher::ActuationDispatcher;
pub use flight_state::FlightState;
pub use manual::{HeldCommands, ManualCommand, ManualController, ManualInput, StdinInput};
pub use supervisor::Supervisor;
