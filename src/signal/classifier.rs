use strum_macros::Display;

/// Tri-state operator intent derived from the smoothed signal.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Forward,
    Backward,
    Hover,
}

/// Maps a smoothed scalar to an intent and a normalized intensity in [0,1].
///
/// The dead-zone is symmetric and open: a value exactly on the threshold
/// still resolves to `Hover`, only strictly larger magnitudes drive motion.
/// Total and deterministic, never fails.
pub fn classify(smoothed: f32, threshold: f32) -> (Intent, f32) {
    if smoothed > threshold {
        (Intent::Forward, smoothed.min(1.0))
    } else if smoothed < -threshold {
        (Intent::Backward, smoothed.abs().min(1.0))
    } else {
        (Intent::Hover, 0.0)
    }
}
