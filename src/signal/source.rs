use super::Sample;
use async_trait::async_trait;
use std::time::Duration;
use strum_macros::Display;

/// Failures a sample source can report.
///
/// A timeout is not one of them: the pull contract returns `Ok(None)` when no
/// sample arrives within the window, and the loop simply re-polls.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SourceError {
    /// The collaborator signalled the stream is gone. The signal task treats
    /// this like a sustained timeout and keeps polling; reconnection policy
    /// lives with the collaborator, not here.
    ConnectionLost,
}

/// A lazy, infinite, non-restartable sequence of timestamped samples.
///
/// Implemented by the live telemetry inlet and by [`super::SyntheticSource`];
/// the control loop is agnostic to which one it is handed.
#[async_trait]
pub trait SampleSource: Send {
    /// Pulls the next sample, waiting at most `timeout`. `Ok(None)` on
    /// timeout, which is an idle tick rather than an error.
    async fn next(&mut self, timeout: Duration) -> Result<Option<Sample>, SourceError>;

    /// Channel count of this stream, fixed for the whole session.
    fn channel_count(&self) -> usize;
}
