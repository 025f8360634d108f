//! Pointer scripts.
//!
//! A script is a JSON array of steps, replayed against a button in order:
//!
//! ```json
//! [
//!   { "action": "move", "x": 10, "y": 10 },
//!   { "action": "down", "button": "left", "x": 10, "y": 10 },
//!   { "action": "wait", "ms": 1200 },
//!   { "action": "up", "button": "left", "x": 10, "y": 10 },
//!   { "action": "leave" }
//! ]
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::button::{ButtonEvent, ImageMapButton, PointerEvent};
use crate::error::ConfigError;

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ReplayStep {
    Move(PointerEvent),
    Down(PointerEvent),
    Up(PointerEvent),
    Leave,
    /// Let time pass so repeat clicks can fire.
    Wait { ms: u64 },
    /// Enable or disable the whole control.
    Enable { enabled: bool },
}

/// Events produced by one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub step: usize,
    pub events: Vec<ButtonEvent>,
}

/// Parse a script file.
pub fn load_script(path: &Path) -> Result<Vec<ReplayStep>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply `steps` to `button`, collecting the events each step caused.
///
/// Must run inside a tokio runtime so multi-click areas can repeat.
pub async fn replay(
    button: &mut ImageMapButton,
    events: &mut mpsc::UnboundedReceiver<ButtonEvent>,
    steps: &[ReplayStep],
) -> Vec<StepOutcome> {
    // Setup noise (key map installed, areas added) is not part of the script
    while events.try_recv().is_ok() {}

    let mut outcomes = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        tracing::debug!("Replay step {}: {:?}", index, step);
        match step {
            ReplayStep::Move(ev) => button.mouse_move(*ev),
            ReplayStep::Down(ev) => button.mouse_down(*ev),
            ReplayStep::Up(ev) => button.mouse_up(*ev),
            ReplayStep::Leave => button.mouse_leave(),
            ReplayStep::Wait { ms } => tokio::time::sleep(Duration::from_millis(*ms)).await,
            ReplayStep::Enable { enabled } => button.set_enabled(*enabled),
        }

        let mut produced = Vec::new();
        while let Ok(event) = events.try_recv() {
            produced.push(event);
        }
        outcomes.push(StepOutcome {
            step: index,
            events: produced,
        });
    }
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_json() {
        let steps: Vec<ReplayStep> = serde_json::from_str(
            r#"[
                {"action": "move", "x": 1, "y": 2},
                {"action": "down", "button": "left", "clicks": 1, "x": 1, "y": 2},
                {"action": "wait", "ms": 50},
                {"action": "enable", "enabled": false},
                {"action": "leave"}
            ]"#,
        )
        .unwrap();

        assert_eq!(steps[0], ReplayStep::Move(PointerEvent::at(1, 2)));
        assert_eq!(steps[1], ReplayStep::Down(PointerEvent::left(1, 2)));
        assert_eq!(steps[2], ReplayStep::Wait { ms: 50 });
        assert_eq!(steps[3], ReplayStep::Enable { enabled: false });
        assert_eq!(steps[4], ReplayStep::Leave);
    }

    #[test]
    fn test_unknown_action_rejected() {
        let result: Result<Vec<ReplayStep>, _> = serde_json::from_str(r#"[{"action": "hover"}]"#);
        assert!(result.is_err());
    }
}
