//! Wall clock adapter.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::traits::Clock;

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_time(&self) -> u64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs(),
            Err(err) => {
                tracing::warn!("System clock is before the Unix epoch: {}", err);
                0
            }
        }
    }
}
