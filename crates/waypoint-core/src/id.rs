#![forbid(unsafe_code)]

//! Stable handles into a scene arena.

use std::fmt;

/// Handle to a node stored in a scene arena.
///
/// Handles are plain indices: they never own the node and never keep it
/// alive. A handle whose node was removed is simply stale, and every scene
/// lookup treats it as absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Build a handle from a raw arena index.
    #[inline]
    #[must_use]
    pub const fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// Raw arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
