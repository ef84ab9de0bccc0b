#![forbid(unsafe_code)]

//! Scene arena: the node tree navigation walks over.
//!
//! Nodes live in a flat arena indexed by [`NodeId`]. Children are owned by
//! their parent's slot list; the parent link is a plain id used for upward
//! walks only, so there are no ownership cycles.
//!
//! # Invariants
//!
//! 1. The root always exists and has no parent.
//! 2. Every live non-root node appears exactly once in its parent's
//!    `children`.
//! 3. At most one node has focus, and it is the scene's active node.
//! 4. Removed ids are never reused, so stale handles stay stale.
//!
//! Waypoint callbacks receive `&Scene` and therefore cannot mutate the tree
//! they are navigating.

use waypoint_core::{NavError, NodeId, Result};

use crate::node::Node;
use crate::waypoint::Waypoint;

pub(crate) struct Slot {
    pub(crate) node: Node,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) has_focus: bool,
}

impl Slot {
    fn new(node: Node, parent: Option<NodeId>) -> Self {
        Self {
            node,
            parent,
            children: Vec::new(),
            has_focus: false,
        }
    }
}

/// Tree of nodes plus the single active-focus pointer.
pub struct Scene {
    slots: Vec<Option<Slot>>,
    live: usize,
    id_limit: u32,
    pub(crate) active: Option<NodeId>,
}

impl Scene {
    /// Create a scene with a plain root container.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root(Node::new().with_label("root"))
    }

    /// Create a scene with a custom root node.
    #[must_use]
    pub fn with_root(root: Node) -> Self {
        Self {
            slots: vec![Some(Slot::new(root, None))],
            live: 1,
            id_limit: u32::MAX,
            active: None,
        }
    }

    /// Cap the number of ids this scene will ever hand out, root included.
    ///
    /// Ids are never reused, so removals do not free capacity. Once the
    /// cap is reached `insert` fails instead of wrapping.
    #[must_use]
    pub fn with_id_limit(mut self, limit: u32) -> Self {
        self.id_limit = limit.max(1);
        self
    }

    /// The root node.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::from_raw(0)
    }

    /// The node holding input focus, if any.
    #[inline]
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Number of live nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live
    }

    /// Whether `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// Append `node` as the last child of `parent`.
    pub fn insert(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        if !self.contains(parent) {
            return Err(NavError::UnknownNode { node: parent });
        }
        let id = self.push_slot(node, Some(parent))?;
        if let Some(slot) = self.slot_mut(parent) {
            slot.children.push(id);
        }
        Ok(id)
    }

    /// Remove `id` and its whole subtree, dropping their waypoints.
    ///
    /// If focus lives inside the subtree it is blurred first, so blur and
    /// focus-out handlers still run while the nodes exist.
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        if !self.contains(id) {
            return Err(NavError::UnknownNode { node: id });
        }
        if id == self.root() {
            return Err(NavError::invalid("the scene root cannot be removed"));
        }
        if let Some(active) = self.active
            && (active == id || self.is_descendant(active, id))
        {
            self.blur(active);
        }
        if let Some(parent) = self.parent(id)
            && let Some(slot) = self.slot_mut(parent)
        {
            slot.children.retain(|&child| child != id);
        }

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(slot) = self.slots.get_mut(next.index()).and_then(Option::take) {
                stack.extend(slot.children);
                self.live -= 1;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slot(id).and_then(|slot| slot.parent)
    }

    /// Children in order. Empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.slot(id) {
            Some(slot) => &slot.children,
            None => &[],
        }
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&node| self.parent(node))
    }

    /// Whether `node` sits strictly below `ancestor`.
    #[must_use]
    pub fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(node).any(|candidate| candidate == ancestor)
    }

    #[must_use]
    pub fn is_focusable(&self, id: NodeId) -> bool {
        self.slot(id).is_some_and(|slot| slot.node.focusable)
    }

    #[must_use]
    pub fn has_focus(&self, id: NodeId) -> bool {
        self.slot(id).is_some_and(|slot| slot.has_focus)
    }

    /// Whether `id` or any of its descendants has focus.
    #[must_use]
    pub fn contains_focus(&self, id: NodeId) -> bool {
        self.active
            .is_some_and(|active| active == id || self.is_descendant(active, id))
    }

    #[must_use]
    pub fn has_waypoint(&self, id: NodeId) -> bool {
        self.waypoint(id).is_some()
    }

    #[must_use]
    pub fn waypoint(&self, id: NodeId) -> Option<&dyn Waypoint> {
        self.slot(id).and_then(|slot| slot.node.waypoint.as_deref())
    }

    #[must_use]
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.slot(id).and_then(|slot| slot.node.label.as_deref())
    }

    /// Find the first node (pre-order) with the given label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self.label(id) == Some(label) {
                return Some(id);
            }
            stack.extend(self.children(id).iter().rev().copied());
        }
        None
    }

    /// Change whether `id` can take focus. A focused node that loses
    /// focusability is blurred.
    pub fn set_focusable(&mut self, id: NodeId, focusable: bool) -> Result<()> {
        let slot = self
            .slot_mut(id)
            .ok_or(NavError::UnknownNode { node: id })?;
        slot.node.focusable = focusable;
        if !focusable && slot.has_focus {
            self.blur(id);
        }
        Ok(())
    }

    /// Replace the waypoint on `id`, returning the previous one.
    pub fn set_waypoint(
        &mut self,
        id: NodeId,
        waypoint: Option<Box<dyn Waypoint>>,
    ) -> Result<Option<Box<dyn Waypoint>>> {
        let slot = self
            .slot_mut(id)
            .ok_or(NavError::UnknownNode { node: id })?;
        Ok(std::mem::replace(&mut slot.node.waypoint, waypoint))
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<&Slot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    pub(crate) fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn push_slot(&mut self, node: Node, parent: Option<NodeId>) -> Result<NodeId> {
        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|&index| index < self.id_limit)
            .ok_or_else(|| NavError::invalid("scene arena exhausted"))?;
        self.slots.push(Some(Slot::new(node, parent)));
        self.live += 1;
        Ok(NodeId::from_raw(index))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("nodes", &self.live)
            .field("active", &self.active)
            .finish()
    }
}
