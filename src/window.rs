// =============================================================================
// ImbalanceWindow — bounded FIFO of recent imbalance samples
// =============================================================================
//
// The only state the engine carries across observations.  Strict FIFO: the
// newest sample is appended at the back and the oldest is evicted from the
// front whenever the configured capacity is exceeded, so insertion order is
// recency order.  One window per engine instance — never shared.
// =============================================================================

use std::collections::VecDeque;

/// Minimum number of samples required before percentile ranking is
/// meaningful.  Fixed, not configurable.
pub const MIN_SAMPLES: usize = 10;

/// Bounded FIFO buffer of the most recent imbalance samples, oldest-first.
#[derive(Debug, Clone)]
pub struct ImbalanceWindow {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl ImbalanceWindow {
    /// Create an empty window that retains at most `capacity` samples.
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append `sample` at the newest end, then evict from the oldest end
    /// until the window is back within capacity.
    pub fn push(&mut self, sample: f64) {
        self.samples.push_back(sample);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Change the retention bound at runtime.  If the new capacity is smaller
    /// than the current history, the oldest samples are evicted immediately
    /// so the invariant `len() <= capacity` holds before the next push.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Current retention bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether enough history has accumulated for ranking (see
    /// [`MIN_SAMPLES`]).
    pub fn has_min_history(&self) -> bool {
        self.samples.len() >= MIN_SAMPLES
    }

    /// Read-only view of the samples, oldest-first.
    ///
    /// Takes `&mut self` because the ring may need to be made contiguous
    /// before it can be exposed as a single slice.
    pub fn contents(&mut self) -> &[f64] {
        self.samples.make_contiguous();
        let (head, _) = self.samples.as_slices();
        head
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_within_capacity_keeps_everything() {
        let mut win = ImbalanceWindow::new(5);
        for i in 0..5 {
            win.push(i as f64);
        }
        assert_eq!(win.len(), 5);
        assert_eq!(win.contents(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn push_over_capacity_evicts_oldest() {
        let mut win = ImbalanceWindow::new(3);
        for i in 0..7 {
            win.push(i as f64);
        }
        // After 7 pushes into capacity 3, the oldest remaining element is the
        // (7 - 3)-th originally inserted.
        assert_eq!(win.len(), 3);
        assert_eq!(win.contents(), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn len_never_exceeds_capacity() {
        let mut win = ImbalanceWindow::new(8);
        for i in 0..100 {
            win.push(i as f64 * 0.01);
            assert!(win.len() <= win.capacity());
        }
    }

    #[test]
    fn shrink_capacity_evicts_from_front() {
        let mut win = ImbalanceWindow::new(10);
        for i in 0..10 {
            win.push(i as f64);
        }
        win.set_capacity(4);
        assert_eq!(win.len(), 4);
        assert_eq!(win.contents(), &[6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn grow_capacity_keeps_history() {
        let mut win = ImbalanceWindow::new(3);
        for i in 0..3 {
            win.push(i as f64);
        }
        win.set_capacity(10);
        assert_eq!(win.len(), 3);
        for i in 3..8 {
            win.push(i as f64);
        }
        assert_eq!(win.len(), 8);
        assert_eq!(win.contents()[0], 0.0);
    }

    #[test]
    fn min_history_gate() {
        let mut win = ImbalanceWindow::new(50);
        for i in 0..MIN_SAMPLES - 1 {
            win.push(i as f64 * 0.1);
            assert!(!win.has_min_history());
        }
        win.push(0.9);
        assert!(win.has_min_history());
    }

    #[test]
    fn contents_is_oldest_first_after_wraparound() {
        let mut win = ImbalanceWindow::new(4);
        for i in 0..9 {
            win.push(i as f64);
        }
        assert_eq!(win.contents(), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn empty_window() {
        let mut win = ImbalanceWindow::new(5);
        assert!(win.is_empty());
        assert_eq!(win.len(), 0);
        assert!(win.contents().is_empty());
        assert!(!win.has_min_history());
    }
}
