#![forbid(unsafe_code)]

//! Key-press front end for the capture phase.
//!
//! The [`Navigator`] is what an input layer calls on every key press: it
//! maps the key to a [`Direction`], runs the capture phase from the scene's
//! active node and, if no waypoint stopped the event, bubbles it as a plain
//! key-down through `on_key_down` handlers.

use waypoint_core::{Direction, KeyDownEvent, KeyEvent, NavConfig, Result};

use crate::capture::{CaptureOutcome, event_capture_phase_with};
use crate::scene::Scene;

/// Result of [`Navigator::handle_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyOutcome {
    /// What the capture phase did.
    pub capture: CaptureOutcome,
    /// The event after capture and bubbling.
    pub event: KeyDownEvent,
}

impl KeyOutcome {
    /// Whether anything (a waypoint or a key-down handler) consumed the key.
    #[must_use]
    pub fn handled(&self) -> bool {
        self.event.has_stop_propagation()
    }
}

/// Drives directional navigation from raw key presses.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    config: NavConfig,
}

impl Navigator {
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self {
            config: config.validated(),
        }
    }

    /// Navigator configured from `WAYPOINT_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(NavConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Handle one key press against `scene`.
    pub fn handle_key(&self, scene: &mut Scene, key: KeyEvent) -> Result<KeyOutcome> {
        let direction = Direction::from_key(&key, &self.config);
        let start = scene.active();
        let mut event = KeyDownEvent::new(key, direction).with_target(start);

        let capture = event_capture_phase_with(scene, start, direction, &mut event, &self.config)?;

        if !event.has_stop_propagation()
            && let Some(target) = start
        {
            scene.bubble_key_down(target, &mut event);
        }
        Ok(KeyOutcome { capture, event })
    }
}
