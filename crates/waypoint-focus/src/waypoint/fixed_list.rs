#![forbid(unsafe_code)]

//! Fixed-list waypoint: linear focus traversal along one axis.
//!
//! # Algorithm
//!
//! **navigate**
//! 1. Map the direction to a step along the axis (-1, +1, or 0).
//! 2. Orthogonal direction (step 0): `pass`.
//! 3. If the focal index was never synced, look for the focal node that
//!    contains focus and adopt its position (best effort).
//! 4. `next = index + step` against a freshly computed focal path:
//!    - interior: claim it with `move_to`;
//!    - before the first / after the last node: clamp and `defer` the edge
//!      node so an outer waypoint can take the move across groups.
//!
//! **resolve**
//! 1. Start from the remembered index.
//! 2. When focus arrives from outside the owner's subtree along the axis,
//!    enter at the near edge (DOWN/RIGHT enter first, UP/LEFT enter last).
//! 3. Unsynced falls back to the first node.
//!
//! # Invariants
//!
//! - The focal index is only an index into the path computed in the same
//!   call; the path itself is never cached.
//! - Interior steps are claimed, boundary steps are deferred.

use std::any::Any;
use std::cell::Cell;

use waypoint_core::{Axis, Direction, NavError, NodeId, Result};

use super::{NavigateContext, ResolveContext, Waypoint, focal_path};
use crate::scene::Scene;

/// How [`FixedListWaypoint::resolve`] treats focus entering from outside
/// along the axis it does not manage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryPolicy {
    /// Re-enter at the remembered position (first node if never synced).
    #[default]
    Remember,
    /// Treat orthogonal entry as an unknown direction and fail.
    Strict,
}

/// Waypoint managing a horizontal or vertical list of focal nodes.
#[derive(Debug)]
pub struct FixedListWaypoint {
    axis: Axis,
    entry: EntryPolicy,
    /// Position in the focal path; `None` until first synced.
    focal_index: Cell<Option<usize>>,
}

impl FixedListWaypoint {
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            entry: EntryPolicy::default(),
            focal_index: Cell::new(None),
        }
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    #[must_use]
    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Parse `"horizontal"` or `"vertical"`; anything else is an error
    /// naming the offending tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    #[must_use]
    pub fn with_entry_policy(mut self, entry: EntryPolicy) -> Self {
        self.entry = entry;
        self
    }

    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    #[must_use]
    pub fn entry_policy(&self) -> EntryPolicy {
        self.entry
    }

    #[inline]
    #[must_use]
    pub fn focal_index(&self) -> Option<usize> {
        self.focal_index.get()
    }

    pub fn set_focal_index(&self, index: Option<usize>) {
        self.focal_index.set(index);
    }

    /// Forget the remembered position; the next navigate re-syncs.
    pub fn unsync(&self) {
        self.focal_index.set(None);
    }

    fn sync(&self, scene: &Scene, path: &[NodeId]) {
        if let Some(index) = path.iter().position(|&node| scene.contains_focus(node)) {
            self.focal_index.set(Some(index));
        }
    }

    /// Edge index for focus entering from outside, `None` to keep the
    /// remembered index.
    fn entry_index(&self, direction: Direction, len: usize) -> Result<Option<usize>> {
        let last = len - 1;
        match (self.axis, direction) {
            (Axis::Vertical, Direction::Down) | (Axis::Horizontal, Direction::Right) => Ok(Some(0)),
            (Axis::Vertical, Direction::Up) | (Axis::Horizontal, Direction::Left) => {
                Ok(Some(last))
            }
            (_, Direction::None) => Err(self.unknown_direction(direction)),
            _ => match self.entry {
                EntryPolicy::Remember => Ok(None),
                EntryPolicy::Strict => Err(self.unknown_direction(direction)),
            },
        }
    }

    fn unknown_direction(&self, direction: Direction) -> NavError {
        NavError::UnknownDirection {
            direction,
            axis: self.axis,
        }
    }
}

impl Waypoint for FixedListWaypoint {
    fn navigate(&self, scene: &Scene, cx: &mut NavigateContext) -> Result<()> {
        let offset = self.axis.offset(cx.direction());
        if offset == 0 {
            cx.pass();
            return Ok(());
        }

        let path = focal_path(scene, cx.owner())?;
        if self.focal_index.get().is_none() {
            self.sync(scene, &path);
        }

        let last = path.len() - 1;
        let current = self.focal_index.get().map_or(-1, |index| index as isize);
        let next = current + offset;
        if next < 0 {
            self.focal_index.set(Some(0));
            cx.defer(path[0]);
        } else if next as usize > last {
            self.focal_index.set(Some(last));
            cx.defer(path[last]);
        } else {
            let next = next as usize;
            self.focal_index.set(Some(next));
            cx.move_to(path[next]);
        }
        Ok(())
    }

    fn resolve(&self, scene: &Scene, cx: &ResolveContext) -> Result<NodeId> {
        let path = focal_path(scene, cx.owner)?;
        let mut index = self.focal_index.get();

        if let Some(pending) = cx.pending
            && !scene.is_descendant(pending, cx.owner)
            && let Some(entry) = self.entry_index(cx.direction, path.len())?
        {
            index = Some(entry);
        }

        // The path may have shrunk since the index was stored.
        let index = index.unwrap_or(0).min(path.len() - 1);
        self.focal_index.set(Some(index));
        Ok(path[index])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
