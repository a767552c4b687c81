use super::{Sample, SlidingWindow};
use crate::config::SessionConfig;

/// Smooths the axis-of-interest of incoming samples over a sliding window.
///
/// Raw single-channel sources are additionally divided by the configured
/// normalization divisor to bring sensor amplitude into joystick range;
/// multi-channel joystick-shaped sources arrive already in ±1 and are taken
/// as-is. The configured polarity sign is applied at ingestion, so a sensor
/// whose convention is "negative on flex" is a config fact, not a transform
/// scattered through the loop.
pub struct SignalSmoother {
    window: SlidingWindow,
    axis: usize,
    scale: f32,
}

impl SignalSmoother {
    pub fn new(config: &SessionConfig, channel_count: usize) -> Self {
        let divisor = if channel_count == 1 { config.norm_divisor } else { 1.0 };
        Self {
            window: SlidingWindow::new(config.window_size),
            axis: config.axis_of_interest,
            scale: config.polarity / divisor,
        }
    }

    /// Ingests one sample and returns the smoothed scalar. Pure function of
    /// smoother state and input; the window is the only mutation.
    pub fn observe(&mut self, sample: &Sample) -> f32 {
        self.window.push(sample.channel(self.axis) * self.scale);
        self.window.mean()
    }
}
