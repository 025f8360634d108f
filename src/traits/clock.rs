//! Clock trait abstraction.

/// Source of the current time.
///
/// # Example
///
/// ```
/// use imagemap::adapters::mock::FixedClock;
/// use imagemap::traits::Clock;
///
/// let clock = FixedClock::new(59);
/// clock.advance(1);
/// assert_eq!(clock.unix_time(), 60);
/// ```
pub trait Clock: Send + Sync {
    /// Seconds since the Unix epoch.
    fn unix_time(&self) -> u64;
}
