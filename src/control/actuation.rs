use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// Range accepted by the vehicle on every axis.
pub const AXIS_LIMIT: i32 = 100;

/// One complete 4-axis command as sent to the vehicle.
///
/// Pitch carries the EMG-derived forward/backward component, yaw the manual
/// rotation; roll and throttle stay 0 in this design. Values are clamped to
/// the vehicle's accepted range at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActuationVector {
    pub roll: i32,
    pub pitch: i32,
    pub yaw: i32,
    pub throttle: i32,
}

impl ActuationVector {
    pub const ZERO: ActuationVector =
        ActuationVector { roll: 0, pitch: 0, yaw: 0, throttle: 0 };

    pub fn new(roll: i32, pitch: i32, yaw: i32, throttle: i32) -> Self {
        Self {
            roll: roll.clamp(-AXIS_LIMIT, AXIS_LIMIT),
            pitch: pitch.clamp(-AXIS_LIMIT, AXIS_LIMIT),
            yaw: yaw.clamp(-AXIS_LIMIT, AXIS_LIMIT),
            throttle: throttle.clamp(-AXIS_LIMIT, AXIS_LIMIT),
        }
    }

    pub fn is_zero(self) -> bool { self == Self::ZERO }
}

impl fmt::Display for ActuationVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(r: {}, p: {}, y: {}, t: {})",
            self.roll, self.pitch, self.yaw, self.throttle
        )
    }
}

/// Published per-axis values shared between the two tasks.
///
/// The signal task is the only pitch writer, the manual task the only yaw
/// writer; each composes the other's last published axis into its own
/// complete vector send. Plain atomics give the per-poll visibility this
/// needs without a lock.
#[derive(Debug, Default)]
pub struct SharedAxes {
    pitch: AtomicI32,
    yaw: AtomicI32,
}

impl SharedAxes {
    pub fn new() -> Self { Self::default() }

    pub fn set_pitch(&self, pitch: i32) { self.pitch.store(pitch, Ordering::SeqCst); }

    pub fn pitch(&self) -> i32 { self.pitch.load(Ordering::SeqCst) }

    pub fn set_yaw(&self, yaw: i32) { self.yaw.store(yaw, Ordering::SeqCst); }

    pub fn yaw(&self) -> i32 { self.yaw.load(Ordering::SeqCst) }
}
