#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod control;
mod logger;
mod signal;
mod vehicle;

use crate::config::SessionConfig;
use crate::control::{SessionContext, StdinInput, Supervisor};
use crate::signal::{SampleSource, SyntheticSource};
use crate::vehicle::{SimulatedVehicle, VehicleActuator};
use std::sync::Arc;

const LOW_BATTERY_PERCENT: i32 = 20;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let session_config = SessionConfig::from_env();
    let source = connect_source(&session_config);
    session_config.validate_or_die(source.channel_count());

    let supervisor = Arc::new(init(session_config).await);
    print_instructions();

    let signal_sv = Arc::clone(&supervisor);
    let signal_task = tokio::spawn(async move {
        signal_sv.run_signal_task(source).await;
    });
    let manual_sv = Arc::clone(&supervisor);
    let manual_task = tokio::spawn(async move {
        manual_sv.run_manual_task(Box::new(StdinInput::start())).await;
    });

    let cancel = supervisor.context().cancel_token();
    tokio::select! {
        _ = tokio::signal::ctrl_c() => warn!("Interrupt received"),
        () = cancel.cancelled() => {}
    }
    // Drain both tasks first so nothing actuates a handle cleanup released.
    cancel.cancel();
    let _ = signal_task.await;
    let _ = manual_task.await;
    supervisor.shutdown().await;
    info!("Program terminated.");
}

/// Builds the shared session context and its supervisor.
async fn init(session_config: SessionConfig) -> Supervisor {
    let vehicle: Arc<dyn VehicleActuator> = Arc::new(SimulatedVehicle::new());
    if let Some(battery) = vehicle.battery().await {
        info!("Vehicle battery: {battery}%");
        if battery < LOW_BATTERY_PERCENT {
            warn!("Low battery! Please charge before flying.");
        }
    }
    let context = Arc::new(SessionContext::new(session_config, vehicle));
    Supervisor::new(context)
}

/// Connects the sample source for this session.
///
/// The live telemetry inlet is a collaborator wired in by deployment; the
/// built-in default is the synthetic generator, which stands behind the same
/// trait.
fn connect_source(session_config: &SessionConfig) -> Box<dyn SampleSource> {
    info!("No live telemetry inlet configured, using synthetic source");
    Box::new(SyntheticSource::new(session_config.axis_of_interest))
}

fn print_instructions() {
    info!("=== EMG Flight Control Ready ===");
    info!("  't' - Takeoff");
    info!("  'l' - Land");
    info!("  'r' - Toggle clockwise rotation");
    info!("  'R' - Toggle counter-clockwise rotation");
    info!("  'q' - Quit program");
    info!("EMG drives forward/backward while airborne");
    info!("================================");
}
