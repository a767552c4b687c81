use crate::fatal;
use serde::{Deserialize, Serialize};
use std::{env, fmt, time::Duration};

/// Immutable per-session configuration for the control loop.
///
/// Every field can be overridden through an environment variable at startup;
/// unset variables fall back to the defaults below. The struct is validated
/// exactly once against the discovered channel count before any task spawns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Channel index within a sample used to derive control intent.
    pub axis_of_interest: usize,
    /// Capacity of the smoothing window.
    pub window_size: usize,
    /// Symmetric dead-zone threshold around zero.
    pub threshold: f32,
    /// Maximum vehicle speed, scaled by intent intensity.
    pub max_speed: i32,
    /// Divisor bringing raw single-channel EMG amplitude into joystick range.
    pub norm_divisor: f32,
    /// Sensor polarity sign (+1.0 or -1.0), calibration-dependent.
    pub polarity: f32,
    /// Minimum interval between two actuation sends.
    pub min_command_interval: Duration,
    /// Timeout for a single sample pull from the source.
    pub sample_poll_timeout: Duration,
    /// Frame interval for manual input polling.
    pub input_frame_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            axis_of_interest: 0,
            window_size: 10,
            threshold: 0.2,
            max_speed: 30,
            norm_divisor: 500.0,
            polarity: 1.0,
            min_command_interval: Duration::from_millis(50),
            sample_poll_timeout: Duration::from_millis(100),
            input_frame_interval: Duration::from_millis(50),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    AxisOutOfRange { axis: usize, channels: usize },
    EmptyWindow,
    NonPositiveSpeed,
    BadThreshold,
    BadPolarity,
    BadDivisor,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AxisOutOfRange { axis, channels } => {
                write!(f, "axis of interest {axis} out of range for {channels}-channel stream")
            }
            ConfigError::EmptyWindow => write!(f, "smoothing window size must be at least 1"),
            ConfigError::NonPositiveSpeed => write!(f, "max speed must be in 1..=100"),
            ConfigError::BadThreshold => write!(f, "dead-zone threshold must be positive"),
            ConfigError::BadPolarity => write!(f, "polarity must be +1.0 or -1.0"),
            ConfigError::BadDivisor => write!(f, "normalization divisor must be positive"),
        }
    }
}

impl SessionConfig {
    /// Builds the session configuration from environment variables,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let def = Self::default();
        Self {
            axis_of_interest: env_parse("PILOT_AXIS", def.axis_of_interest),
            window_size: env_parse("PILOT_WINDOW_SIZE", def.window_size),
            threshold: env_parse("PILOT_THRESHOLD", def.threshold),
            max_speed: env_parse("PILOT_MAX_SPEED", def.max_speed),
            norm_divisor: env_parse("PILOT_NORM_DIVISOR", def.norm_divisor),
            polarity: env_parse("PILOT_POLARITY", def.polarity),
            min_command_interval: Duration::from_millis(env_parse(
                "PILOT_MIN_COMMAND_INTERVAL_MS",
                def.min_command_interval.as_millis() as u64,
            )),
            sample_poll_timeout: Duration::from_millis(env_parse(
                "PILOT_SAMPLE_TIMEOUT_MS",
                def.sample_poll_timeout.as_millis() as u64,
            )),
            input_frame_interval: Duration::from_millis(env_parse(
                "PILOT_INPUT_FRAME_MS",
                def.input_frame_interval.as_millis() as u64,
            )),
        }
    }

    /// Validates the configuration against the channel count discovered at
    /// stream connect time. Any failure here aborts the session before any
    /// task is spawned.
    pub fn validate(&self, channel_count: usize) -> Result<(), ConfigError> {
        if self.axis_of_interest >= channel_count {
            return Err(ConfigError::AxisOutOfRange {
                axis: self.axis_of_interest,
                channels: channel_count,
            });
        }
        if self.window_size == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.max_speed <= 0 || self.max_speed > 100 {
            return Err(ConfigError::NonPositiveSpeed);
        }
        if self.threshold <= 0.0 {
            return Err(ConfigError::BadThreshold);
        }
        if self.polarity != 1.0 && self.polarity != -1.0 {
            return Err(ConfigError::BadPolarity);
        }
        if self.norm_divisor <= 0.0 {
            return Err(ConfigError::BadDivisor);
        }
        Ok(())
    }

    /// Like [`Self::validate`] but aborts the process on failure.
    pub fn validate_or_die(&self, channel_count: usize) {
        if let Err(e) = self.validate(channel_count) {
            fatal!("Invalid session configuration: {e}");
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
