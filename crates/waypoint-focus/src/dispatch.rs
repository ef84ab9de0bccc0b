#![forbid(unsafe_code)]

//! Focus and blur dispatch.
//!
//! `focus` and `blur` are delivered to the target node only. Unless the
//! target's handler stops them, a `focus-in` / `focus-out` event then
//! bubbles from the target up through its ancestors, stopping as soon as a
//! handler calls `stop_propagation`.

use waypoint_core::{FocusEvent, FocusEventKind, KeyDownEvent, NodeId};

use crate::scene::Scene;

impl Scene {
    /// Give focus to `id`.
    ///
    /// No-op (returns `false`) if the node is unknown, not focusable, or
    /// already focused. Otherwise the previously active node is blurred
    /// first, then `focus` and `focus-in` are dispatched.
    pub fn focus(&mut self, id: NodeId) -> bool {
        let Some(slot) = self.slot(id) else {
            return false;
        };
        if !slot.node.focusable || slot.has_focus {
            return false;
        }
        if let Some(previous) = self.active
            && previous != id
        {
            self.blur(previous);
        }

        self.active = Some(id);
        if let Some(slot) = self.slot_mut(id) {
            slot.has_focus = true;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.change", kind = "focus", node = %id);

        self.dispatch_with_bubble(FocusEvent::new(FocusEventKind::Focus, id));
        true
    }

    /// Take focus away from `id`.
    ///
    /// No-op (returns `false`) unless the node currently has focus.
    pub fn blur(&mut self, id: NodeId) -> bool {
        let Some(slot) = self.slot_mut(id) else {
            return false;
        };
        if !slot.has_focus {
            return false;
        }
        slot.has_focus = false;
        if self.active == Some(id) {
            self.active = None;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus.change", kind = "blur", node = %id);

        self.dispatch_with_bubble(FocusEvent::new(FocusEventKind::Blur, id));
        true
    }

    /// Bubble a key-down event from `from` up to the root through
    /// `on_key_down` handlers.
    pub fn bubble_key_down(&mut self, from: NodeId, event: &mut KeyDownEvent) {
        let mut node = Some(from);
        while let Some(current) = node {
            if event.has_stop_propagation() {
                break;
            }
            event.current_target = Some(current);
            if let Some(handler) = self
                .slot_mut(current)
                .and_then(|slot| slot.node.handlers.on_key_down.as_mut())
            {
                handler(event);
            }
            node = self.parent(current);
        }
    }

    fn dispatch_with_bubble(&mut self, mut event: FocusEvent) {
        let target = event.target;
        self.invoke(target, &mut event);
        if !event.has_stop_propagation() {
            let mut follow = event.bubbling();
            self.bubble(target, &mut follow);
        }
    }

    fn bubble(&mut self, from: NodeId, event: &mut FocusEvent) {
        let mut node = Some(from);
        while let Some(current) = node {
            event.current_target = current;
            self.invoke(current, event);
            if event.has_stop_propagation() {
                break;
            }
            node = self.parent(current);
        }
    }

    fn invoke(&mut self, id: NodeId, event: &mut FocusEvent) {
        if let Some(handler) = self
            .slot_mut(id)
            .and_then(|slot| slot.node.handlers.focus_handler(event.kind))
        {
            handler(event);
        }
    }
}
