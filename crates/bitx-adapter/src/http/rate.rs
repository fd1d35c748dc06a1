/*
[INPUT]:  Dispatch timestamps from the request routine
[OUTPUT]: Rolling count of requests made in the last window
[POS]:    HTTP layer - advisory client-side call rate
[UPDATE]: When changing the window or how throttled calls are counted
*/

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Window the exchange applies its per-minute request budget over
pub const DEFAULT_RATE_WINDOW: Duration = Duration::from_secs(60);

/// Counts requests dispatched within a sliding time window.
///
/// The count is advisory: nothing here delays or rejects a request.
#[derive(Debug)]
pub struct CallRateTracker {
    window: Duration,
    stamps: Mutex<VecDeque<Instant>>,
}

impl CallRateTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            stamps: Mutex::new(VecDeque::new()),
        }
    }

    /// Window length
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a dispatch happening now and return its stamp
    pub fn record(&self) -> Instant {
        self.record_at(Instant::now())
    }

    /// Remove one previously recorded stamp, searching from the newest end.
    ///
    /// Returns `false` when the stamp already aged out of the window.
    pub fn forget(&self, stamp: Instant) -> bool {
        let mut stamps = self.stamps.lock().unwrap_or_else(PoisonError::into_inner);
        match stamps.iter().rposition(|recorded| *recorded == stamp) {
            Some(index) => {
                stamps.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of requests recorded within the window
    pub fn count(&self) -> usize {
        self.count_at(Instant::now())
    }

    pub(crate) fn record_at(&self, now: Instant) -> Instant {
        let mut stamps = self.stamps.lock().unwrap_or_else(PoisonError::into_inner);
        prune(&mut stamps, now, self.window);
        stamps.push_back(now);
        now
    }

    pub(crate) fn count_at(&self, now: Instant) -> usize {
        let mut stamps = self.stamps.lock().unwrap_or_else(PoisonError::into_inner);
        prune(&mut stamps, now, self.window);
        stamps.len()
    }
}

impl Default for CallRateTracker {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_WINDOW)
    }
}

// Stamps are pushed in dispatch order, so expired ones sit at the front.
fn prune(stamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    let Some(cutoff) = now.checked_sub(window) else {
        return;
    };
    while stamps.front().is_some_and(|stamp| *stamp < cutoff) {
        stamps.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = CallRateTracker::default();
        assert_eq!(tracker.count(), 0);
        assert_eq!(tracker.window(), Duration::from_secs(60));
    }

    #[test]
    fn test_record_counts_within_window() {
        let tracker = CallRateTracker::default();
        tracker.record();
        tracker.record();
        tracker.record();
        assert_eq!(tracker.count(), 3);
    }

    #[test]
    fn test_old_stamps_age_out() {
        let tracker = CallRateTracker::new(Duration::from_secs(60));
        let start = Instant::now();

        tracker.record_at(start);
        tracker.record_at(start + Duration::from_secs(30));
        tracker.record_at(start + Duration::from_secs(59));

        assert_eq!(tracker.count_at(start + Duration::from_secs(60)), 3);
        assert_eq!(tracker.count_at(start + Duration::from_secs(61)), 2);
        assert_eq!(tracker.count_at(start + Duration::from_secs(95)), 1);
        assert_eq!(tracker.count_at(start + Duration::from_secs(200)), 0);
    }

    #[test]
    fn test_forget_removes_single_matching_stamp() {
        let tracker = CallRateTracker::default();
        let start = Instant::now();
        let first = tracker.record_at(start);
        let second = tracker.record_at(start + Duration::from_millis(5));
        tracker.record_at(start + Duration::from_millis(5));

        assert!(tracker.forget(second));
        assert_eq!(tracker.count_at(start + Duration::from_secs(1)), 2);

        assert!(tracker.forget(first));
        assert_eq!(tracker.count_at(start + Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_forget_unknown_stamp_is_noop() {
        let tracker = CallRateTracker::default();
        let start = Instant::now();
        tracker.record_at(start);

        assert!(!tracker.forget(start + Duration::from_secs(1)));
        assert_eq!(tracker.count_at(start), 1);
    }
}
