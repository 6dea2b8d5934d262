//! Elapsed-time logging for a named stage.
//!
//! ```rust
//! use keeplast::timer::Timer;
//!
//! let lines = Timer::new("parse").time(|| vec!["ls", "make"]);
//! assert_eq!(lines.len(), 2);
//! ```

use log::Level;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct Timer {
    name: String,
    level: Level,
    decimals: usize,
    threshold: Duration,
}

impl Timer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: Level::Debug,
            decimals: 0,
            threshold: Duration::from_secs(0),
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Number of decimals the elapsed seconds are rounded to.
    pub fn decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Only log when the stage took at least this long.
    pub fn threshold(mut self, threshold: Duration) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn start(self) -> TimerGuard {
        TimerGuard {
            timer: self,
            start: Instant::now(),
        }
    }

    pub fn time<F, R>(self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.start();
        f()
    }

    fn should_log(&self, elapsed: Duration) -> bool {
        elapsed >= self.threshold
    }
}

#[must_use = "the stage is timed until the guard is dropped"]
pub struct TimerGuard {
    timer: Timer,
    start: Instant,
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if self.timer.should_log(elapsed) {
            log::log!(
                self.timer.level,
                "{} ran in {} seconds",
                self.timer.name,
                format_elapsed(elapsed, self.timer.decimals)
            );
        }
    }
}

pub fn format_elapsed(elapsed: Duration, decimals: usize) -> String {
    format!("{:.*}", decimals, elapsed.as_secs_f64())
}
