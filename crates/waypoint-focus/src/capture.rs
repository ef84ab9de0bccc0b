#![forbid(unsafe_code)]

//! Capture-phase walker.
//!
//! # Algorithm
//!
//! 1. Walk from the start node up to the root. Every node with a waypoint
//!    is asked to `navigate`:
//!    - `Stop`: drop any deferred candidate, stop the event, end the walk.
//!    - `Pass`: keep walking.
//!    - `Move`: take the candidate, stop the event, end the walk.
//!    - `Defer`: take the candidate as best-so-far, mark the event
//!      forwarded, keep walking so an outer waypoint may override it.
//! 2. A forwarded walk that nobody stopped still counts as handled: the
//!    event is stopped.
//! 3. A candidate holding a waypoint is resolved downward until a
//!    focusable node is reached; that node receives focus.
//!
//! With no candidate and no stop, the event is left untouched so the
//! caller can bubble it as a plain key-down.

use waypoint_core::{Direction, KeyDownEvent, NavConfig, NavError, NodeId, Result};

use crate::scene::Scene;
use crate::waypoint::{NavCommand, NavigateContext, ResolveContext};

/// What a capture-phase call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// `Direction::None` or no start node: nothing was inspected.
    Ignored,
    /// No waypoint acted; the event may bubble.
    Unhandled,
    /// A waypoint stopped the event without moving focus.
    Stopped,
    /// Focus was given to `target` (which may equal `previous` at an edge).
    Focused {
        previous: Option<NodeId>,
        target: NodeId,
    },
}

/// Run the capture phase with the default configuration.
pub fn event_capture_phase(
    scene: &mut Scene,
    start: Option<NodeId>,
    direction: Direction,
    event: &mut KeyDownEvent,
) -> Result<CaptureOutcome> {
    event_capture_phase_with(scene, start, direction, event, &NavConfig::default())
}

/// Run the capture phase from `start` in `direction`.
///
/// Configuration and protocol errors are returned as-is; focus is not
/// touched when an error occurs.
pub fn event_capture_phase_with(
    scene: &mut Scene,
    start: Option<NodeId>,
    direction: Direction,
    event: &mut KeyDownEvent,
    config: &NavConfig,
) -> Result<CaptureOutcome> {
    if direction.is_none() {
        return Ok(CaptureOutcome::Ignored);
    }
    let Some(start) = start else {
        return Ok(CaptureOutcome::Ignored);
    };
    if !scene.contains(start) {
        return Err(NavError::UnknownNode { node: start });
    }

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("nav.capture", direction = %direction, start = %start).entered();

    let Some(candidate) = capture_walk(scene, start, direction, event)? else {
        return Ok(if event.has_stop_propagation() {
            CaptureOutcome::Stopped
        } else {
            CaptureOutcome::Unhandled
        });
    };

    let target = resolve_candidate(scene, candidate, direction, config.max_resolve_depth)?;
    let previous = scene.active();
    scene.focus(target);
    Ok(CaptureOutcome::Focused { previous, target })
}

fn capture_walk(
    scene: &Scene,
    start: NodeId,
    direction: Direction,
    event: &mut KeyDownEvent,
) -> Result<Option<NodeId>> {
    let mut cx = NavigateContext::new(start, direction);
    let mut candidate = None;
    let mut forwarded = false;

    let mut node = Some(start);
    while let Some(current) = node {
        if let Some(waypoint) = scene.waypoint(current) {
            waypoint.navigate(scene, cx.reset(current, direction))?;

            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "nav.waypoint",
                owner = %current,
                command = ?cx.command(),
                selected = ?cx.selected()
            );

            match cx.command() {
                Some(NavCommand::Stop) => {
                    candidate = None;
                    event.stop_propagation();
                }
                Some(NavCommand::Pass) => {}
                Some(NavCommand::Move) => {
                    candidate = Some(selected(scene, &cx)?);
                    event.stop_propagation();
                }
                Some(NavCommand::Defer) => {
                    candidate = Some(selected(scene, &cx)?);
                    forwarded = true;
                    event.mark_forwarded();
                }
                None => return Err(NavError::CommandNotSet { owner: current }),
            }
            if event.has_stop_propagation() {
                break;
            }
        }
        node = scene.parent(current);
    }

    if forwarded && !event.has_stop_propagation() {
        event.stop_propagation();
    }
    Ok(candidate)
}

/// The node picked by `move_to`/`defer`, checked against the scene.
fn selected(scene: &Scene, cx: &NavigateContext) -> Result<NodeId> {
    match cx.selected() {
        Some(node) if scene.contains(node) => Ok(node),
        Some(node) => Err(NavError::invalid(format!(
            "waypoint on {} selected unknown node {node}",
            cx.owner()
        ))),
        None => Err(NavError::invalid(format!(
            "waypoint on {} chose {:?} without a node",
            cx.owner(),
            cx.command()
        ))),
    }
}

/// Descend from `candidate` to a focusable node.
pub(crate) fn resolve_candidate(
    scene: &Scene,
    candidate: NodeId,
    direction: Direction,
    max_depth: usize,
) -> Result<NodeId> {
    if !scene.has_waypoint(candidate) {
        if scene.is_focusable(candidate) {
            return Ok(candidate);
        }
        return Err(NavError::CandidateNotFocusable { node: candidate });
    }

    let mut target = candidate;
    let mut depth = 0;
    loop {
        let Some(waypoint) = scene.waypoint(target) else {
            return Err(NavError::NotAFocusReceiver { node: target });
        };
        let next = waypoint.resolve(scene, &ResolveContext::new(target, Some(target), direction))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "nav.resolve", owner = %target, next = %next, depth);

        if !scene.is_focusable(next) && !scene.has_waypoint(next) {
            return Err(NavError::NotAFocusReceiver { node: next });
        }
        target = next;
        depth += 1;
        if scene.is_focusable(target) {
            return Ok(target);
        }
        if depth >= max_depth {
            return Err(NavError::ResolveDepthExceeded {
                start: candidate,
                depth,
            });
        }
    }
}
