mod classifier;
mod sample;
mod smoother;
mod source;
mod synthetic;
mod window;

#[cfg(test)]
mod tests;

pub use classifier::{classify, Intent};
pub use sample::Sample;
pub use smoother::SignalSmoother;
pub use source::{SampleSource, SourceError};
pub use synthetic::SyntheticSource;
pub use window::SlidingWindow;
