use super::{Sample, SampleSource, SourceError};
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::time::{Duration, Instant};

/// Synthetic two-channel sample generator for sessions without a live inlet.
///
/// Emits a slow sinusoid on the axis of interest (period roughly twelve
/// seconds, amplitude 0.7) plus small uniform noise on the other channel, at
/// a fixed cadence. Stands behind the same [`SampleSource`] trait as the
/// live inlet, so the control loop carries no simulation branch.
pub struct SyntheticSource {
    start: Instant,
    next_due: Instant,
    axis: usize,
}

impl SyntheticSource {
    const CHANNELS: usize = 2;
    const CADENCE: Duration = Duration::from_millis(200);
    const AMPLITUDE: f32 = 0.7;
    const ANGULAR_FREQ: f32 = 0.5;

    pub fn new(axis_of_interest: usize) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            next_due: now,
            axis: axis_of_interest.min(Self::CHANNELS - 1),
        }
    }
}

#[async_trait]
impl SampleSource for SyntheticSource {
    async fn next(&mut self, timeout: Duration) -> Result<Option<Sample>, SourceError> {
        // The next emission may lie beyond this poll window; that is an
        // idle tick for the caller, same as a quiet live inlet.
        let until_due = self.next_due.saturating_duration_since(Instant::now());
        if until_due > timeout {
            tokio::time::sleep(timeout).await;
            return Ok(None);
        }
        tokio::time::sleep(until_due).await;
        self.next_due += Self::CADENCE;
        let elapsed = self.start.elapsed().as_secs_f32();
        let wave = (elapsed * Self::ANGULAR_FREQ).sin() * Self::AMPLITUDE;
        let noise = rand::rng().random_range(-0.1..=0.1);
        let mut channels = vec![0.0; Self::CHANNELS];
        channels[self.axis] = wave;
        channels[1 - self.axis] = noise;
        Ok(Some(Sample::new(channels, Utc::now())))
    }

    fn channel_count(&self) -> usize { Self::CHANNELS }
}
