use std::time::Instant;

/// Monotonic elapsed-time measurement.
///
/// Backed by `std::time::Instant`, a steady clock: elapsed readings are
/// monotonic even across wall-clock adjustments. A fresh timer starts
/// measuring at construction.
///
/// # Examples
///
/// ```
/// # use diagkit::Timer;
/// let mut timer = Timer::new();
/// let ns = timer.elapsed_nsecs();
/// assert!(ns >= 0.0);
///
/// // Read and restart in one call.
/// let lap = timer.elapsed_msecs_reset();
/// assert!(lap >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Captures a new start instant.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since the last reset.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Milliseconds since the last reset.
    pub fn elapsed_msecs(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e3
    }

    /// Nanoseconds since the last reset.
    pub fn elapsed_nsecs(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e9
    }

    /// Reads elapsed seconds, then resets. The reset happens only after
    /// the elapsed value is captured.
    pub fn elapsed_secs_reset(&mut self) -> f64 {
        let elapsed = self.elapsed_secs();
        self.reset();
        elapsed
    }

    /// Reads elapsed milliseconds, then resets.
    pub fn elapsed_msecs_reset(&mut self) -> f64 {
        let elapsed = self.elapsed_msecs();
        self.reset();
        elapsed
    }

    /// Reads elapsed nanoseconds, then resets.
    pub fn elapsed_nsecs_reset(&mut self) -> f64 {
        let elapsed = self.elapsed_nsecs();
        self.reset();
        elapsed
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
