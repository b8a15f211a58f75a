//! Pending-line queue shared between producers and the drain worker

use parking_lot::Mutex;
use std::collections::VecDeque;

/// Queue size at which producers are throttled. A backpressure trigger, not
/// a hard cap: lines above the threshold are still accepted.
pub const BACKPRESSURE_THRESHOLD: usize = 100_000;

/// FIFO buffer of rendered log lines awaiting the drain worker.
///
/// Only two operations exist: [`push`](LogQueue::push) and the atomic
/// swap-drain [`take_all`](LogQueue::take_all). The worker never pops items
/// one by one under the lock; it swaps the whole pending batch out and
/// writes outside the lock.
pub struct LogQueue {
    lines: Mutex<VecDeque<String>>,
    threshold: usize,
}

impl LogQueue {
    pub fn new(threshold: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            threshold,
        }
    }

    /// Append a line, preserving arrival order across producers.
    ///
    /// Returns true when the queue is at or above the backpressure
    /// threshold after the push; the caller is expected to throttle.
    pub fn push(&self, line: String) -> bool {
        let mut lines = self.lines.lock();
        lines.push_back(line);
        lines.len() >= self.threshold
    }

    /// Swap out every pending line in one lock acquisition.
    pub fn take_all(&self) -> VecDeque<String> {
        let mut lines = self.lines.lock();
        std::mem::take(&mut *lines)
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}
