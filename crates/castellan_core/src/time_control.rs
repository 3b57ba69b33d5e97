//! Search limits and a shareable stop flag.
//!
//! A search is bounded by depth and optionally by wall-clock time. The
//! [`TimeControl`] handle can be cloned into another thread to stop a running
//! search early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Clock checks happen once per this many nodes. Every node clones a full
/// position, so the interval stays small.
const CLOCK_INTERVAL: u64 = 256;

/// Bounds for a single search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Plies to search from the root.
    pub depth: u8,
    /// Wall-clock budget, if any.
    pub move_time: Option<Duration>,
    pub control: TimeControl,
}

impl SearchLimits {
    /// Depth-bounded search with no deadline.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            control: TimeControl::new(None),
        }
    }

    /// Depth-bounded search that also stops after `move_time`.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            control: TimeControl::new(Some(move_time)),
        }
    }

    /// Replaces the stop handle so a caller can keep a clone of it.
    pub fn with_control(mut self, control: TimeControl) -> Self {
        self.control = control;
        self
    }

    /// True once the search should unwind.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.control.is_stopped()
    }

    /// Starts the clock on the shared handle.
    pub fn start(&self) {
        self.control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// Stop flag plus optional deadline, shared by every clone.
#[derive(Debug, Clone, Default)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    started: Arc<Mutex<Option<Instant>>>,
    limit: Option<Duration>,
}

impl TimeControl {
    /// A fresh handle with an optional deadline, counted from `start`.
    pub fn new(limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            started: Arc::new(Mutex::new(None)),
            limit,
        }
    }

    /// Starts the clock. A stop raised earlier stays in force, so a caller
    /// may cancel a search before it begins.
    pub fn start(&self) {
        *self.started.lock().unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
    }

    /// Raises the stop flag for every clone of this handle.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// True once [`stop`](Self::stop) was called or the deadline passed.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag once the deadline has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.limit
            && self.elapsed() >= limit
            && self.has_started()
        {
            self.stop();
            return true;
        }
        false
    }

    /// True on the nodes where a search should call [`check_time`](Self::check_time).
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes.is_multiple_of(CLOCK_INTERVAL)
    }

    /// Time since [`start`](Self::start); zero before the clock runs.
    pub fn elapsed(&self) -> Duration {
        self.started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Time left before the deadline; `None` without a limit.
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn has_started(&self) -> bool {
        self.started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
