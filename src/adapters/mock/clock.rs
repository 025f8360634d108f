//! Manually driven clock for testing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::traits::Clock;

/// Clock frozen at a given Unix time until moved.
///
/// Clones share the same time, so a test can keep a handle while the code
/// under test owns another.
#[derive(Debug, Clone, Default)]
pub struct FixedClock {
    now: Arc<AtomicU64>,
}

impl FixedClock {
    pub fn new(unix_time: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(unix_time)),
        }
    }

    /// Jump to an absolute time.
    pub fn set(&self, unix_time: u64) {
        self.now.store(unix_time, Ordering::SeqCst);
    }

    /// Move forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn unix_time(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_time() {
        let clock = FixedClock::new(100);
        let handle = clock.clone();
        handle.advance(30);
        assert_eq!(clock.unix_time(), 130);
        handle.set(0);
        assert_eq!(clock.unix_time(), 0);
    }

    #[test]
    fn test_default_is_epoch() {
        assert_eq!(FixedClock::default().unix_time(), 0);
    }
}
