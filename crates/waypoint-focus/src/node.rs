#![forbid(unsafe_code)]

//! Node payloads inserted into a [`Scene`](crate::Scene).

use std::fmt;

use waypoint_core::{FocusEvent, FocusEventKind, KeyDownEvent};

use crate::waypoint::Waypoint;

/// Handler for a focus notification.
pub type FocusHandler = Box<dyn FnMut(&mut FocusEvent)>;

/// Handler for a key-down that survived the capture phase.
pub type KeyDownHandler = Box<dyn FnMut(&mut KeyDownEvent)>;

/// Event handlers attached to a node.
///
/// Handlers only see the event, never the scene, so they cannot mutate the
/// tree while a walk is in progress.
#[derive(Default)]
pub(crate) struct Handlers {
    on_focus: Option<FocusHandler>,
    on_blur: Option<FocusHandler>,
    on_focus_in: Option<FocusHandler>,
    on_focus_out: Option<FocusHandler>,
    pub(crate) on_key_down: Option<KeyDownHandler>,
}

impl Handlers {
    pub(crate) fn focus_handler(&mut self, kind: FocusEventKind) -> Option<&mut FocusHandler> {
        match kind {
            FocusEventKind::Focus => self.on_focus.as_mut(),
            FocusEventKind::Blur => self.on_blur.as_mut(),
            FocusEventKind::FocusIn => self.on_focus_in.as_mut(),
            FocusEventKind::FocusOut => self.on_focus_out.as_mut(),
        }
    }

    fn slot(&mut self, kind: FocusEventKind) -> &mut Option<FocusHandler> {
        match kind {
            FocusEventKind::Focus => &mut self.on_focus,
            FocusEventKind::Blur => &mut self.on_blur,
            FocusEventKind::FocusIn => &mut self.on_focus_in,
            FocusEventKind::FocusOut => &mut self.on_focus_out,
        }
    }
}

/// A visual node before it is inserted into a scene.
///
/// A node with a waypoint is a navigation decision point. A node that is
/// neither focusable nor a waypoint holder is transparent to navigation.
#[derive(Default)]
pub struct Node {
    pub(crate) label: Option<String>,
    pub(crate) focusable: bool,
    pub(crate) waypoint: Option<Box<dyn Waypoint>>,
    pub(crate) handlers: Handlers,
}

impl Node {
    /// A plain, non-focusable container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A focusable leaf.
    #[must_use]
    pub fn focusable() -> Self {
        Self::new().with_focusable(true)
    }

    /// Builder: set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: set focusable flag.
    #[must_use]
    pub fn with_focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    /// Builder: attach a waypoint. The node owns it from now on.
    #[must_use]
    pub fn with_waypoint(mut self, waypoint: impl Waypoint) -> Self {
        self.waypoint = Some(Box::new(waypoint));
        self
    }

    /// Builder: attach an already boxed waypoint.
    #[must_use]
    pub fn with_boxed_waypoint(mut self, waypoint: Box<dyn Waypoint>) -> Self {
        self.waypoint = Some(waypoint);
        self
    }

    #[must_use]
    pub fn on_focus(self, handler: impl FnMut(&mut FocusEvent) + 'static) -> Self {
        self.on(FocusEventKind::Focus, handler)
    }

    #[must_use]
    pub fn on_blur(self, handler: impl FnMut(&mut FocusEvent) + 'static) -> Self {
        self.on(FocusEventKind::Blur, handler)
    }

    #[must_use]
    pub fn on_focus_in(self, handler: impl FnMut(&mut FocusEvent) + 'static) -> Self {
        self.on(FocusEventKind::FocusIn, handler)
    }

    #[must_use]
    pub fn on_focus_out(self, handler: impl FnMut(&mut FocusEvent) + 'static) -> Self {
        self.on(FocusEventKind::FocusOut, handler)
    }

    #[must_use]
    pub fn on_key_down(mut self, handler: impl FnMut(&mut KeyDownEvent) + 'static) -> Self {
        self.handlers.on_key_down = Some(Box::new(handler));
        self
    }

    /// Builder: attach a handler for any focus event kind.
    #[must_use]
    pub fn on(mut self, kind: FocusEventKind, handler: impl FnMut(&mut FocusEvent) + 'static) -> Self {
        *self.handlers.slot(kind) = Some(Box::new(handler));
        self
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("label", &self.label)
            .field("focusable", &self.focusable)
            .field("waypoint", &self.waypoint)
            .finish_non_exhaustive()
    }
}
