use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped telemetry sample with a fixed channel shape.
///
/// The channel count is decided once at stream connect time; every sample of
/// a session carries the same number of channels, so the hot path never
/// branches on shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    channels: Vec<f32>,
    timestamp: DateTime<Utc>,
}

impl Sample {
    pub fn new(channels: Vec<f32>, timestamp: DateTime<Utc>) -> Self {
        Self { channels, timestamp }
    }

    /// Convenience constructor stamping the sample with the current time.
    pub fn now(channels: Vec<f32>) -> Self {
        Self::new(channels, Utc::now())
    }

    pub fn channels(&self) -> &[f32] { &self.channels }

    pub fn channel_count(&self) -> usize { self.channels.len() }

    /// Value at the given channel index, `0.0` if out of range. Shape is
    /// validated at session start, so the fallback is never hit in a
    /// correctly configured session.
    pub fn channel(&self, idx: usize) -> f32 {
        self.channels.get(idx).copied().unwrap_or(0.0)
    }

    pub fn timestamp(&self) -> DateTime<Utc> { self.timestamp }
}
