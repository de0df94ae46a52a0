use std::collections::VecDeque;

/// Default number of samples kept per series (one minute at a 1 s tick).
pub const DEFAULT_CAPACITY: usize = 60;

/// Fixed-capacity rolling history of samples — one per chart series.
///
/// Insertion order is time order. Pushing past capacity evicts exactly the
/// oldest sample, so `len() <= capacity()` always holds.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples:  VecDeque<f32>,
    capacity: usize,
}

impl RollingWindow {
    /// A capacity of zero is bumped to one; an empty chart series is useless.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Push a new sample, evicting the oldest if over capacity.
    pub fn push(&mut self, value: f32) {
        self.samples.push_back(value);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Samples oldest-first.
    pub fn values(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent sample, if any.
    pub fn latest(&self) -> Option<f32> {
        self.samples.back().copied()
    }

    /// Largest sample in the window (`0.0` when empty).
    pub fn max(&self) -> f32 {
        self.samples.iter().copied().fold(0.0, f32::max)
    }

    /// Average of all samples in the history window.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_one_pushes_evict_the_first() {
        let mut window = RollingWindow::default();
        for v in 0..=60 {
            window.push(v as f32);
        }
        let expected: Vec<f32> = (1..=60).map(|v| v as f32).collect();
        assert_eq!(window.values(), expected);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut window = RollingWindow::new(5);
        for n in 0..23u32 {
            window.push(n as f32);
            assert!(window.len() <= 5);
            // always the most recent min(n+1, 5) pushes, oldest first
            let start = (n + 1).saturating_sub(5);
            let expected: Vec<f32> = (start..=n).map(|v| v as f32).collect();
            assert_eq!(window.values(), expected);
        }
    }

    #[test]
    fn zero_capacity_holds_one_sample() {
        let mut window = RollingWindow::new(0);
        window.push(1.0);
        window.push(2.0);
        assert_eq!(window.capacity(), 1);
        assert_eq!(window.values(), vec![2.0]);
    }

    #[test]
    fn empty_window_stats() {
        let window = RollingWindow::new(3);
        assert!(window.is_empty());
        assert_eq!(window.latest(), None);
        assert_eq!(window.max(), 0.0);
        assert_eq!(window.average(), 0.0);
    }

    #[test]
    fn stats_follow_contents() {
        let mut window = RollingWindow::new(3);
        for v in [4.0, 8.0, 2.0, 6.0] {
            window.push(v);
        }
        assert_eq!(window.latest(), Some(6.0));
        assert_eq!(window.max(), 8.0);
        assert!((window.average() - 16.0 / 3.0).abs() < 1e-6);
    }
}
