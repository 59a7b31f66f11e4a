//! Simulated processing delay

use std::thread;
use std::time::Duration;

/// How long the simulated upscale takes.
pub const SIMULATED_WORK: Duration = Duration::from_secs(2);

/// Something that blocks the caller for a given duration
pub trait Pause {
    /// Block until `duration` has elapsed. Not cancellable.
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread with `std::thread::sleep`
pub struct ThreadSleepPause;

impl ThreadSleepPause {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadSleepPause {
    fn default() -> Self {
        Self::new()
    }
}

impl Pause for ThreadSleepPause {
    fn pause(&mut self, duration: Duration) {
        tracing::debug!(?duration, "sleeping");
        thread::sleep(duration);
    }
}
