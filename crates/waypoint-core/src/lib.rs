#![forbid(unsafe_code)]

//! Core: directions, node handles, propagating events, errors and configuration.
//!
//! # Role in Waypoint
//! `waypoint-core` is the input layer. It owns the value types that every
//! other part of the navigation engine consumes: the [`Direction`] raised by
//! a key press, the [`NodeId`] handle into a scene arena, the propagating
//! [`KeyDownEvent`] and [`FocusEvent`], and the [`NavError`] taxonomy.
//!
//! # How it fits in the system
//! `waypoint-focus` builds the scene arena, waypoints and the capture-phase
//! walker on top of these types. Nothing here knows about the scene tree,
//! so the input layer can be driven and tested on its own.

pub mod config;
pub mod direction;
pub mod error;
pub mod event;
pub mod id;
pub mod logging;

pub use config::NavConfig;
pub use direction::{Axis, Direction};
pub use error::{ErrorClass, NavError, Result};
pub use event::{
    FocusEvent, FocusEventKind, KeyCode, KeyDownEvent, KeyEvent, KeyEventKind, Modifiers,
};
pub use id::NodeId;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
