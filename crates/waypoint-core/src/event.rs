#![forbid(unsafe_code)]

//! Canonical key and focus event types.
//!
//! # Design Notes
//!
//! - [`KeyEvent`] is the raw key press delivered by the input layer.
//! - [`KeyDownEvent`] is the propagating wrapper the navigation engine
//!   mutates: the capture phase stops it, and if it survives it bubbles
//!   through `on_key_down` handlers.
//! - [`FocusEvent`] is produced by focus/blur dispatch. `focus` and `blur`
//!   go to the target only; `focus-in` and `focus-out` bubble.
//! - Propagation state can only be set, never cleared, once a handler has
//!   stopped an event.

use bitflags::bitflags;
use std::fmt;

use crate::direction::Direction;
use crate::id::NodeId;

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with default modifiers and Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Key codes the navigation layer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// Key-down event travelling through the capture and bubble phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDownEvent {
    /// The raw key press.
    pub key: KeyEvent,
    /// Direction the key maps to ([`Direction::None`] if it doesn't).
    pub direction: Direction,
    /// Node the event was raised on (the active node, if any).
    pub target: Option<NodeId>,
    /// Node whose handler is currently running.
    pub current_target: Option<NodeId>,
    stopped: bool,
    forwarded: bool,
}

impl KeyDownEvent {
    /// Create an unstopped event.
    #[must_use]
    pub fn new(key: KeyEvent, direction: Direction) -> Self {
        Self {
            key,
            direction,
            target: None,
            current_target: None,
            stopped: false,
            forwarded: false,
        }
    }

    /// Builder: set the target node.
    #[must_use]
    pub fn with_target(mut self, target: Option<NodeId>) -> Self {
        self.target = target;
        self.current_target = target;
        self
    }

    /// Stop the event from reaching further handlers.
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    /// Whether propagation was stopped.
    #[inline]
    #[must_use]
    pub fn has_stop_propagation(&self) -> bool {
        self.stopped
    }

    /// Record that at least one waypoint deferred a candidate upward.
    pub fn mark_forwarded(&mut self) {
        self.forwarded = true;
    }

    /// Whether a waypoint forwarded this event during the capture phase.
    #[inline]
    #[must_use]
    pub fn was_forwarded(&self) -> bool {
        self.forwarded
    }
}

/// Kind of focus notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusEventKind {
    /// Delivered to the node that gained focus.
    Focus,
    /// Delivered to the node that lost focus.
    Blur,
    /// Bubbles from the node that gained focus.
    FocusIn,
    /// Bubbles from the node that lost focus.
    FocusOut,
}

impl FocusEventKind {
    /// Whether this kind walks up through ancestors.
    #[must_use]
    pub const fn bubbles(self) -> bool {
        matches!(self, FocusEventKind::FocusIn | FocusEventKind::FocusOut)
    }

    /// Event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FocusEventKind::Focus => "focus",
            FocusEventKind::Blur => "blur",
            FocusEventKind::FocusIn => "focus-in",
            FocusEventKind::FocusOut => "focus-out",
        }
    }
}

impl fmt::Display for FocusEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Focus notification dispatched to node handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusEvent {
    pub kind: FocusEventKind,
    /// Node whose focus state changed.
    pub target: NodeId,
    /// Node whose handler is currently running.
    pub current_target: NodeId,
    stopped: bool,
}

impl FocusEvent {
    #[must_use]
    pub fn new(kind: FocusEventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            stopped: false,
        }
    }

    /// Derive the bubbling follow-up event (`focus` → `focus-in`,
    /// `blur` → `focus-out`) with fresh propagation state.
    #[must_use]
    pub fn bubbling(&self) -> Self {
        let kind = match self.kind {
            FocusEventKind::Focus | FocusEventKind::FocusIn => FocusEventKind::FocusIn,
            FocusEventKind::Blur | FocusEventKind::FocusOut => FocusEventKind::FocusOut,
        };
        Self::new(kind, self.target)
    }

    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    #[inline]
    #[must_use]
    pub fn has_stop_propagation(&self) -> bool {
        self.stopped
    }
}
