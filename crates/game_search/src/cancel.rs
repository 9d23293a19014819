//! Cooperative cancellation and move-time limits.
//!
//! The search never gets preempted. It polls a shared flag before each
//! sibling move and unwinds on its own once the flag is seen.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared stop flag for a running search.
///
/// This is cheap to clone and safe to hand to another thread (an interrupt
/// handler, a UI, or the adapter itself). `is_cancelled()` is a relaxed
/// atomic load, so polling it between sibling moves costs next to nothing.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the running search to stop at its next poll point.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Clear the flag. The engine does this at the start of every search.
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Deadline for a single search, checked every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct SearchClock {
    start: Instant,
    time_limit: Option<Duration>,
    /// How often to read the clock (in nodes). Reading it every node is wasteful.
    check_interval: u64,
    /// Node count at which the clock is next due
    next_check: u64,
}

impl SearchClock {
    /// Start a clock now.
    ///
    /// # Arguments
    /// * `time_limit` - Maximum time allowed for the search (None = infinite)
    /// * `check_interval` - Node interval between clock reads (0 is treated as 1)
    pub fn start(time_limit: Option<Duration>, check_interval: u64) -> Self {
        Self {
            start: Instant::now(),
            time_limit,
            check_interval: check_interval.max(1),
            next_check: 0,
        }
    }

    /// Clock without a limit. `expired` never fires.
    pub fn unlimited() -> Self {
        Self::start(None, 1024)
    }

    /// Returns true once at least `check_interval` nodes have passed since
    /// the previous check. Polls land between subtrees, so `nodes` may jump.
    #[inline]
    pub fn should_check_time(&mut self, nodes: u64) -> bool {
        if self.time_limit.is_none() || nodes < self.next_check {
            return false;
        }
        self.next_check = nodes + self.check_interval;
        true
    }

    /// Reads the clock and reports whether the limit has passed.
    pub fn expired(&self) -> bool {
        self.time_limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

#[cfg(test)]
#[path = "cancel_tests.rs"]
mod cancel_tests;
