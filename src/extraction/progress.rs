//! Progress thresholds for long extraction runs.
//!
//! Each extraction run owns its tracker, so repeated or concurrent runs
//! never share threshold state.

/// Emits a notification whenever progress crosses the next multiple of the
/// configured step, and always at 100%.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    step: f64,
    last_reported: f64,
}

impl ProgressTracker {
    pub fn new(step_percent: u32) -> Self {
        let step = f64::from(step_percent.max(1));
        Self {
            step,
            last_reported: -step,
        }
    }

    /// Record that `current` of `total` items are done (1-based).
    ///
    /// Returns the completion percentage when a notification is due.
    pub fn observe(&mut self, current: usize, total: usize) -> Option<f64> {
        if total == 0 {
            return None;
        }

        let percent = current as f64 * 100.0 / total as f64;
        if percent >= self.last_reported + self.step || current == total {
            self.last_reported = (percent / self.step).floor() * self.step;
            Some(percent)
        } else {
            None
        }
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PROGRESS_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reported(tracker: &mut ProgressTracker, total: usize) -> Vec<f64> {
        (1..=total)
            .filter_map(|i| tracker.observe(i, total))
            .collect()
    }

    #[test]
    fn test_five_percent_steps() {
        let mut tracker = ProgressTracker::new(5);
        let points = reported(&mut tracker, 100);

        assert_eq!(points.len(), 21);
        assert_eq!(points[0], 1.0);
        assert_eq!(points[1], 5.0);
        assert_eq!(points[20], 100.0);
    }

    #[test]
    fn test_always_reports_completion() {
        let mut tracker = ProgressTracker::new(50);
        let points = reported(&mut tracker, 3);
        assert_eq!(points.last().copied(), Some(100.0));
    }

    #[test]
    fn test_small_total() {
        let mut tracker = ProgressTracker::new(5);
        let points = reported(&mut tracker, 3);
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_empty_total_is_silent() {
        let mut tracker = ProgressTracker::default();
        assert_eq!(tracker.observe(0, 0), None);
    }

    #[test]
    fn test_fresh_trackers_are_independent() {
        let mut first = ProgressTracker::new(5);
        let _ = reported(&mut first, 40);

        let mut second = ProgressTracker::new(5);
        assert_eq!(second.observe(1, 40), Some(2.5));
    }
}
