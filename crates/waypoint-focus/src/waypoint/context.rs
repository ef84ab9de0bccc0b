#![forbid(unsafe_code)]

//! Contexts handed to waypoint callbacks.

use waypoint_core::{Direction, NodeId};

/// Decision a waypoint reports from [`Waypoint::navigate`](super::Waypoint::navigate).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// End the capture walk without moving focus.
    Stop,
    /// Decline; ask the next ancestor waypoint.
    Pass,
    /// Claim the move; focus goes to the selected node.
    Move,
    /// Offer the selected node but let an outer waypoint override it.
    Defer,
}

/// Per-waypoint navigation request.
///
/// The walker resets one context per waypoint it consults. Only the state
/// left behind when `navigate` returns matters: the last of
/// [`stop`](Self::stop), [`pass`](Self::pass), [`move_to`](Self::move_to)
/// or [`defer`](Self::defer) wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigateContext {
    owner: NodeId,
    direction: Direction,
    command: Option<NavCommand>,
    selected: Option<NodeId>,
}

impl NavigateContext {
    #[must_use]
    pub fn new(owner: NodeId, direction: Direction) -> Self {
        Self {
            owner,
            direction,
            command: None,
            selected: None,
        }
    }

    /// Re-target the context at another waypoint owner and clear the decision.
    pub fn reset(&mut self, owner: NodeId, direction: Direction) -> &mut Self {
        self.owner = owner;
        self.direction = direction;
        self.command = None;
        self.selected = None;
        self
    }

    /// Node whose waypoint is being asked.
    #[inline]
    #[must_use]
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    #[inline]
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The decision so far, `None` if the waypoint has not decided.
    #[inline]
    #[must_use]
    pub fn command(&self) -> Option<NavCommand> {
        self.command
    }

    /// Candidate chosen by `move_to` or `defer`.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn stop(&mut self) {
        self.command = Some(NavCommand::Stop);
        self.selected = None;
    }

    pub fn pass(&mut self) {
        self.command = Some(NavCommand::Pass);
        self.selected = None;
    }

    pub fn move_to(&mut self, node: NodeId) {
        self.command = Some(NavCommand::Move);
        self.selected = Some(node);
    }

    pub fn defer(&mut self, node: NodeId) {
        self.command = Some(NavCommand::Defer);
        self.selected = Some(node);
    }
}

/// Request to descend from a waypoint holder to one of its focal nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolveContext {
    /// Node whose waypoint is resolving.
    pub owner: NodeId,
    /// Node focus is travelling through. When it is not inside `owner`'s
    /// subtree, focus is entering from outside and edge rules apply.
    pub pending: Option<NodeId>,
    /// Direction of the navigation that led here.
    pub direction: Direction,
}

impl ResolveContext {
    #[must_use]
    pub fn new(owner: NodeId, pending: Option<NodeId>, direction: Direction) -> Self {
        Self {
            owner,
            pending,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_call_wins() {
        let a = NodeId::from_raw(1);
        let mut cx = NavigateContext::new(NodeId::from_raw(0), Direction::Right);
        cx.defer(a);
        cx.stop();
        assert_eq!(cx.command(), Some(NavCommand::Stop));
        assert_eq!(cx.selected(), None);
        cx.move_to(a);
        assert_eq!(cx.command(), Some(NavCommand::Move));
        assert_eq!(cx.selected(), Some(a));
    }

    #[test]
    fn reset_clears_decision() {
        let mut cx = NavigateContext::new(NodeId::from_raw(0), Direction::Right);
        cx.defer(NodeId::from_raw(3));
        cx.reset(NodeId::from_raw(5), Direction::Up);
        assert_eq!(cx.owner(), NodeId::from_raw(5));
        assert_eq!(cx.direction(), Direction::Up);
        assert_eq!(cx.command(), None);
        assert_eq!(cx.selected(), None);
    }
}
