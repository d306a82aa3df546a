//! Wall-clock timing of verification runs

use std::time::{Duration, Instant};

/// Stopwatch started when a run begins
///
/// ```ignore
/// use bindcheck_application::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// verifier.verify(&module, &[], &[])?;
/// reporter.succeeded("app", timer.elapsed());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    started_at: Instant,
}

impl TimedOperation {
    /// Start the stopwatch now
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Time since [`start`](Self::start)
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Whole milliseconds since [`start`](Self::start)
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }
}
