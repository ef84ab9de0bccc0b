#![forbid(unsafe_code)]

//! Navigation error model.
//!
//! Every error here is fatal to the navigation call that raised it. Nothing
//! in the engine catches or retries: a mismatch between how a scene was built
//! and how its waypoints are configured should fail loudly during
//! development. Soft no-ops (a `None` direction, a failed focus sync,
//! focusing an already focused node) are not errors and never show up here.

use thiserror::Error;

use crate::direction::{Axis, Direction};
use crate::id::NodeId;

pub type Result<T> = std::result::Result<T, NavError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("invalid waypoint tag: \"{tag}\" (expected \"horizontal\" or \"vertical\")")]
    InvalidWaypointTag { tag: String },

    #[error("waypoint on {owner} has no focusable or waypoint descendants")]
    EmptyFocalPath { owner: NodeId },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("waypoint on {owner} returned without setting a command")]
    CommandNotSet { owner: NodeId },

    #[error("resolve must return a focus receiver, got {node}")]
    NotAFocusReceiver { node: NodeId },

    #[error("navigation candidate {node} is neither focusable nor a waypoint")]
    CandidateNotFocusable { node: NodeId },

    #[error("unknown direction: entering {axis} waypoint moving {direction}")]
    UnknownDirection { direction: Direction, axis: Axis },

    #[error("resolve from {start} did not reach a focusable node within {depth} steps")]
    ResolveDepthExceeded { start: NodeId, depth: usize },
}

/// Broad class of a [`NavError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The scene or a waypoint was set up wrong.
    Configuration,
    /// A waypoint implementation broke the navigate/resolve contract.
    Protocol,
}

impl NavError {
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::InvalidWaypointTag { .. }
            | Self::EmptyFocalPath { .. }
            | Self::InvalidArgument { .. }
            | Self::UnknownNode { .. } => ErrorClass::Configuration,
            Self::CommandNotSet { .. }
            | Self::NotAFocusReceiver { .. }
            | Self::CandidateNotFocusable { .. }
            | Self::UnknownDirection { .. }
            | Self::ResolveDepthExceeded { .. } => ErrorClass::Protocol,
        }
    }

    /// Error type label for logs.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidWaypointTag { .. } => "invalid_tag",
            Self::EmptyFocalPath { .. } => "empty_focal_path",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::UnknownNode { .. } => "unknown_node",
            Self::CommandNotSet { .. } => "command_not_set",
            Self::NotAFocusReceiver { .. } => "not_a_focus_receiver",
            Self::CandidateNotFocusable { .. } => "candidate_not_focusable",
            Self::UnknownDirection { .. } => "unknown_direction",
            Self::ResolveDepthExceeded { .. } => "resolve_depth_exceeded",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_constructor_wraps_message() {
        let err = NavError::invalid("boom");
        assert_eq!(err.to_string(), "invalid argument: boom");
        assert_eq!(err.class(), ErrorClass::Configuration);
    }

    #[test]
    fn protocol_errors_are_classified() {
        let err = NavError::NotAFocusReceiver {
            node: NodeId::from_raw(4),
        };
        assert_eq!(err.class(), ErrorClass::Protocol);
        assert_eq!(err.error_type(), "not_a_focus_receiver");
        assert!(err.to_string().contains("#4"));
    }

    #[test]
    fn unknown_direction_names_both_sides() {
        let err = NavError::UnknownDirection {
            direction: Direction::Down,
            axis: Axis::Horizontal,
        };
        assert_eq!(
            err.to_string(),
            "unknown direction: entering horizontal waypoint moving down"
        );
    }
}
