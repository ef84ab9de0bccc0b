#![forbid(unsafe_code)]

//! Waypoints: node-attached controllers that decide where focus goes.
//!
//! A waypoint is asked twice during a navigation:
//!
//! 1. **navigate** (capture phase, bottom-up): given the direction, report a
//!    [`NavCommand`] and, for `Move`/`Defer`, a candidate node.
//! 2. **resolve** (top-down): when the chosen candidate is itself a waypoint
//!    holder, pick which of its focal nodes should actually receive focus.
//!
//! Both callbacks get a shared `&Scene`; any state a waypoint keeps between
//! calls lives in `Cell`s on the waypoint itself.

mod context;
mod fixed_list;

use std::any::Any;
use std::fmt;

use waypoint_core::{NavError, NodeId, Result};

use crate::scene::Scene;

pub use context::{NavCommand, NavigateContext, ResolveContext};
pub use fixed_list::{EntryPolicy, FixedListWaypoint};

/// Focus-group controller attached to a node.
pub trait Waypoint: fmt::Debug + Any {
    /// Decide what to do for `cx.direction()` and record it on `cx`.
    ///
    /// Returning `Ok(())` without setting a command is a protocol error.
    fn navigate(&self, scene: &Scene, cx: &mut NavigateContext) -> Result<()>;

    /// Return the node focus should descend to. It must be focusable or hold
    /// a waypoint itself.
    fn resolve(&self, scene: &Scene, cx: &ResolveContext) -> Result<NodeId>;

    /// Downcast hook for inspecting concrete waypoint state.
    fn as_any(&self) -> &dyn Any;
}

/// Build a fixed-list waypoint from a `"horizontal"` / `"vertical"` tag.
pub fn create_waypoint(tag: &str) -> Result<Box<dyn Waypoint>> {
    Ok(Box::new(FixedListWaypoint::from_tag(tag)?))
}

/// Nodes a waypoint on `owner` moves between.
///
/// One entry per direct child: the first node, in depth-first pre-order,
/// that is focusable or holds a waypoint. The search does not descend below
/// such a node. Children with no eligible node contribute nothing.
///
/// Computed fresh on every call; an empty path is a configuration error.
pub fn focal_path(scene: &Scene, owner: NodeId) -> Result<Vec<NodeId>> {
    let children = scene.children(owner);
    let mut path = Vec::with_capacity(children.len());
    let mut stack = Vec::new();
    for &child in children {
        stack.clear();
        stack.push(child);
        while let Some(node) = stack.pop() {
            if scene.is_focusable(node) || scene.has_waypoint(node) {
                path.push(node);
                break;
            }
            stack.extend(scene.children(node).iter().rev().copied());
        }
    }
    if path.is_empty() {
        return Err(NavError::EmptyFocalPath { owner });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn focal_path_takes_first_eligible_per_child() {
        let mut scene = Scene::new();
        let owner = scene
            .insert(scene.root(), Node::new().with_waypoint(FixedListWaypoint::horizontal()))
            .unwrap();
        let direct = scene.insert(owner, Node::focusable()).unwrap();
        let wrapper = scene.insert(owner, Node::new()).unwrap();
        let inner = scene.insert(wrapper, Node::new()).unwrap();
        let deep = scene.insert(inner, Node::focusable()).unwrap();
        let _sibling = scene.insert(wrapper, Node::focusable()).unwrap();
        let _empty = scene.insert(owner, Node::new()).unwrap();

        assert_eq!(focal_path(&scene, owner).unwrap(), vec![direct, deep]);
    }

    #[test]
    fn focal_path_stops_at_waypoint_holders() {
        let mut scene = Scene::new();
        let owner = scene.insert(scene.root(), Node::new()).unwrap();
        let row = scene
            .insert(owner, Node::new().with_waypoint(FixedListWaypoint::horizontal()))
            .unwrap();
        let _cell = scene.insert(row, Node::focusable()).unwrap();
        assert_eq!(focal_path(&scene, owner).unwrap(), vec![row]);
    }

    #[test]
    fn empty_focal_path_is_an_error() {
        let mut scene = Scene::new();
        let owner = scene.insert(scene.root(), Node::new()).unwrap();
        let _plain = scene.insert(owner, Node::new()).unwrap();
        assert_eq!(
            focal_path(&scene, owner).unwrap_err(),
            NavError::EmptyFocalPath { owner }
        );
    }

    #[test]
    fn create_waypoint_rejects_bad_tag() {
        let err = create_waypoint("diagonal").unwrap_err();
        assert_eq!(
            err,
            NavError::InvalidWaypointTag {
                tag: "diagonal".into()
            }
        );
        let ok = create_waypoint("vertical").unwrap();
        let fixed = ok.as_any().downcast_ref::<FixedListWaypoint>().unwrap();
        assert_eq!(fixed.axis(), waypoint_core::Axis::Vertical);
    }
}
