#![forbid(unsafe_code)]

//! Directional focus navigation over a scene tree.
//!
//! # Role in Waypoint
//! `waypoint-focus` owns the scene arena and everything that moves focus
//! around in it:
//!
//! - [`Scene`] / [`Node`]: the tree, the single active-focus pointer, and
//!   `focus` / `blur` dispatch with bubbling `focus-in` / `focus-out`.
//! - [`Waypoint`]: a node-attached focus-group controller.
//!   [`FixedListWaypoint`] handles one-dimensional lists; nesting a vertical
//!   list of horizontal rows gives a grid.
//! - [`event_capture_phase`]: walks up from the focused node asking each
//!   waypoint what to do, then resolves down to a focusable leaf.
//! - [`Navigator`]: maps key presses to directions and drives the above.
//!
//! # Example
//!
//! ```
//! use waypoint_focus::{FixedListWaypoint, KeyCode, KeyEvent, Navigator, Node, Scene};
//!
//! let mut scene = Scene::new();
//! let row = scene
//!     .insert(scene.root(), Node::new().with_waypoint(FixedListWaypoint::horizontal()))
//!     .unwrap();
//! let a = scene.insert(row, Node::focusable()).unwrap();
//! let b = scene.insert(row, Node::focusable()).unwrap();
//! scene.focus(a);
//!
//! Navigator::default()
//!     .handle_key(&mut scene, KeyEvent::new(KeyCode::Right))
//!     .unwrap();
//! assert_eq!(scene.active(), Some(b));
//! ```
//!
//! # Preconditions
//! The whole capture → resolve → focus sequence runs synchronously inside
//! one call. Waypoints only ever see `&Scene` and handlers only see their
//! event, so the tree cannot change mid-walk.

pub mod capture;
mod dispatch;
pub mod navigator;
pub mod node;
pub mod scene;
pub mod waypoint;

pub use capture::{CaptureOutcome, event_capture_phase, event_capture_phase_with};
pub use navigator::{KeyOutcome, Navigator};
pub use node::{FocusHandler, KeyDownHandler, Node};
pub use scene::Scene;
pub use waypoint::{
    EntryPolicy, FixedListWaypoint, NavCommand, NavigateContext, ResolveContext, Waypoint,
    create_waypoint, focal_path,
};

pub use waypoint_core::{
    Axis, Direction, ErrorClass, FocusEvent, FocusEventKind, KeyCode, KeyDownEvent, KeyEvent,
    KeyEventKind, Modifiers, NavConfig, NavError, NodeId, Result,
};
