use super::{ActuationDispatcher, ManualController, ManualInput, SessionContext};
use crate::signal::{classify, SampleSource, SignalSmoother, SourceError};
use crate::{error, info, sig, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::time::interval;

/// Owns the lifecycle of the two control tasks and the shutdown path.
///
/// The signal task pulls samples with a bounded wait and runs the smoother,
/// classifier and dispatcher synchronously per sample; the manual task polls
/// operator input at a fixed frame rate. Both observe the shared
/// cancellation token within one poll interval. Cleanup lands the vehicle if
/// airborne and releases the handle, exactly once, from whichever caller
/// gets there first.
pub struct Supervisor {
    context: Arc<SessionContext>,
    cleaned_up: AtomicBool,
}

impl Supervisor {
    pub fn new(context: Arc<SessionContext>) -> Self {
        Self { context, cleaned_up: AtomicBool::new(false) }
    }

    pub fn context(&self) -> &Arc<SessionContext> { &self.context }

    /// Continuous-signal task: source → smoother → classifier → dispatcher.
    pub async fn run_signal_task(&self, mut source: Box<dyn SampleSource>) {
        let config = self.context.config();
        let mut smoother = SignalSmoother::new(config, source.channel_count());
        let mut dispatcher = ActuationDispatcher::new(Arc::clone(&self.context));
        let mut lost_reported = false;

        info!("Signal task started ({} channel stream)", source.channel_count());
        while !self.context.is_cancelled() {
            match source.next(config.sample_poll_timeout).await {
                Ok(Some(sample)) => {
                    lost_reported = false;
                    sig!("Received data: {:?}", sample.channels());
                    let smoothed = smoother.observe(&sample);
                    let (intent, intensity) = classify(smoothed, config.threshold);
                    let vector = dispatcher.dispatch(intent, intensity).await;
                    sig!("{intent} (intensity {intensity:.2}) -> {vector}");
                }
                // Idle tick, re-poll so cancellation is observed promptly.
                Ok(None) => {}
                Err(SourceError::ConnectionLost) => {
                    if !lost_reported {
                        warn!("Sample source connection lost, polling continues");
                        lost_reported = true;
                    }
                }
            }
        }
        info!("Signal task stopped");
    }

    /// Discrete-input task: fixed-rate frames of held operator commands.
    pub async fn run_manual_task(&self, mut input: Box<dyn ManualInput>) {
        let mut controller = ManualController::new(Arc::clone(&self.context));
        let mut frame = interval(self.context.config().input_frame_interval);
        let cancel = self.context.cancel_token();

        info!("Manual input task started");
        loop {
            tokio::select! {
                () = cancel.cancelled() => break,
                _ = frame.tick() => {
                    let held = input.poll();
                    controller.apply_frame(&held).await;
                }
            }
        }
        info!("Manual input task stopped");
    }

    /// Orderly cleanup: land if airborne, then release the vehicle handle.
    ///
    /// Idempotent and safe to invoke from either task or the top-level
    /// interrupt handler; only the first caller performs the actions.
    pub async fn shutdown(&self) {
        if self.cleaned_up.swap(true, Ordering::SeqCst) {
            return;
        }
        self.context.cancel_token().cancel();
        info!("Shutting down...");
        if self.context.flight_state().is_airborne() {
            match self.context.vehicle().land().await {
                Ok(()) => self.context.set_flight_state(super::FlightState::Grounded),
                Err(e) => error!("Landing on shutdown failed: {e}"),
            }
        }
        if let Err(e) = self.context.vehicle().end().await {
            error!("Releasing vehicle handle failed: {e}");
        }
    }
}
