//! Auto-repeat clicks while a button is held.
//!
//! Pressing a momentary area with multi-click enabled fires one click
//! immediately, then keeps firing on a shrinking interval until the press
//! ends. The repeating part runs as a spawned tokio task that is aborted
//! as soon as the button leaves the Pressed state.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::events::{ButtonEvent, ClickEvent};
use crate::color::Rgb;

/// Interval before the second click.
pub const DEFAULT_INITIAL_MS: u64 = 500;
/// Amount the interval shrinks after each click.
pub const DEFAULT_STEP_MS: u64 = 20;
/// Shortest interval.
pub const DEFAULT_FLOOR_MS: u64 = 10;

/// Decaying repeat timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RepeatScheduleMs", into = "RepeatScheduleMs")]
pub struct RepeatSchedule {
    initial: Duration,
    step: Duration,
    floor: Duration,
}

impl RepeatSchedule {
    /// Build a schedule. The floor is at least one millisecond and the
    /// initial interval is never below the floor.
    pub fn new(initial: Duration, step: Duration, floor: Duration) -> Self {
        let floor = floor.max(Duration::from_millis(1));
        Self {
            initial: initial.max(floor),
            step,
            floor,
        }
    }

    pub fn from_millis(initial: u64, step: u64, floor: u64) -> Self {
        Self::new(
            Duration::from_millis(initial),
            Duration::from_millis(step),
            Duration::from_millis(floor),
        )
    }

    pub fn initial(&self) -> Duration {
        self.initial
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn floor(&self) -> Duration {
        self.floor
    }

    /// Interval that follows `current`.
    pub fn next(&self, current: Duration) -> Duration {
        current.saturating_sub(self.step).max(self.floor)
    }

    /// Endless sequence of waits between clicks.
    pub fn intervals(&self) -> Intervals {
        Intervals {
            schedule: *self,
            current: self.initial,
        }
    }
}

impl Default for RepeatSchedule {
    fn default() -> Self {
        Self::from_millis(DEFAULT_INITIAL_MS, DEFAULT_STEP_MS, DEFAULT_FLOOR_MS)
    }
}

/// Map-file form of [`RepeatSchedule`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RepeatScheduleMs {
    #[serde(default = "default_initial")]
    initial_ms: u64,
    #[serde(default = "default_step")]
    step_ms: u64,
    #[serde(default = "default_floor")]
    floor_ms: u64,
}

fn default_initial() -> u64 {
    DEFAULT_INITIAL_MS
}

fn default_step() -> u64 {
    DEFAULT_STEP_MS
}

fn default_floor() -> u64 {
    DEFAULT_FLOOR_MS
}

impl From<RepeatScheduleMs> for RepeatSchedule {
    fn from(ms: RepeatScheduleMs) -> Self {
        Self::from_millis(ms.initial_ms, ms.step_ms, ms.floor_ms)
    }
}

impl From<RepeatSchedule> for RepeatScheduleMs {
    fn from(schedule: RepeatSchedule) -> Self {
        Self {
            initial_ms: schedule.initial.as_millis() as u64,
            step_ms: schedule.step.as_millis() as u64,
            floor_ms: schedule.floor.as_millis() as u64,
        }
    }
}

/// Iterator returned by [`RepeatSchedule::intervals`]. Never ends.
#[derive(Debug, Clone)]
pub struct Intervals {
    schedule: RepeatSchedule,
    current: Duration,
}

impl Iterator for Intervals {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let interval = self.current;
        self.current = self.schedule.next(interval);
        Some(interval)
    }
}

/// Handle to a running repeat task. Dropping it aborts the task.
#[derive(Debug)]
pub struct RepeatDriver {
    key: Rgb,
    handle: JoinHandle<()>,
}

impl RepeatDriver {
    /// Fire the first click now and spawn the task that fires the rest.
    ///
    /// The task stops on its own if the receiving side of `events_tx` is
    /// dropped.
    pub fn start(
        runtime: &Handle,
        schedule: RepeatSchedule,
        events_tx: mpsc::UnboundedSender<ButtonEvent>,
        click: ClickEvent,
    ) -> Self {
        let key = click.area.chroma_key();
        let first_sent = events_tx.send(ButtonEvent::Clicked(click.clone())).is_ok();

        let handle = runtime.spawn(async move {
            if !first_sent {
                return;
            }
            tracing::debug!("Repeat driver started for {}", key);

            let mut clicks: u64 = 1;
            for interval in schedule.intervals() {
                tokio::time::sleep(interval).await;
                if events_tx.send(ButtonEvent::Clicked(click.clone())).is_err() {
                    tracing::debug!("Event channel closed, stopping repeat driver");
                    break;
                }
                clicks += 1;
                tracing::trace!("Repeat click {} for {} (next wait {:?})", clicks, key, schedule.next(interval));
            }
        });

        Self { key, handle }
    }

    /// Key of the area being repeated.
    pub fn key(&self) -> Rgb {
        self.key
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the task.
    pub fn stop(self) {
        tracing::debug!("Repeat driver stopped for {}", self.key);
        // Drop aborts
    }
}

impl Drop for RepeatDriver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
