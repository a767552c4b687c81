use std::collections::VecDeque;

/// Fixed-capacity FIFO window over scalar values.
///
/// The window is filled with zeros at creation, so the mean is defined from
/// the first push on and early samples are damped towards neutral instead of
/// dominating the output. Invariant: `len() == capacity` always.
pub struct SlidingWindow {
    buf: VecDeque<f32>,
    capacity: usize,
}

impl SlidingWindow {
    /// Creates a new zero-filled window. `capacity` must be at least 1,
    /// which session config validation guarantees.
    pub fn new(capacity: usize) -> Self {
        let mut buf = VecDeque::with_capacity(capacity);
        buf.extend(std::iter::repeat_n(0.0, capacity));
        Self { buf, capacity }
    }

    /// Pushes a value to the back of the window, evicting the oldest.
    pub fn push(&mut self, value: f32) {
        self.buf.pop_front();
        self.buf.push_back(value);
    }

    /// Arithmetic mean over the whole window.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> f32 {
        self.buf.iter().sum::<f32>() / self.capacity as f32
    }

    pub fn capacity(&self) -> usize { self.capacity }
}
