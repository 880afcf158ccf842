//! Wall-clock timing for match batches
//!
//! A small stopwatch used purely to report elapsed time around a batch of
//! matcher calls; it never influences matching itself.

use std::time::Instant;

/// Millisecond-resolution stopwatch
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    pub fn start_new() -> Self {
        Stopwatch { start: Instant::now() }
    }

    /// Restart timing from now
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Elapsed wall-clock time in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Elapsed milliseconds, then restart
    pub fn elapsed_ms_and_reset(&mut self) -> f64 {
        let ms = self.elapsed_ms();
        self.reset();
        ms
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start_new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_elapsed_is_monotonic() {
        let watch = Stopwatch::start_new();
        let first = watch.elapsed_ms();
        std::thread::sleep(Duration::from_millis(5));
        let second = watch.elapsed_ms();
        assert!(second >= first);
        assert!(second >= 5.0);
    }

    #[test]
    fn test_reset_restarts_timing() {
        let mut watch = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(5));
        let before = watch.elapsed_ms_and_reset();
        let after = watch.elapsed_ms();
        assert!(before >= 5.0);
        assert!(after < before);
    }
}
