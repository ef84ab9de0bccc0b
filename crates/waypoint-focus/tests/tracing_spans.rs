#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Tracing output of the capture phase.
//!
//! Verify that a navigation produces one `nav.capture` span carrying the
//! direction and start node, and that waypoint decisions, resolution steps
//! and focus changes are logged as events inside it.
//!
//! Run:
//!   cargo test -p waypoint-focus --features tracing --test tracing_spans

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use waypoint_focus::{
    Direction, FixedListWaypoint, KeyCode, KeyDownEvent, KeyEvent, Node, Scene,
    event_capture_phase,
};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedSpan {
    name: String,
    fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
struct CapturedEvent {
    message: String,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

#[derive(Default, Clone)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureHandle {
    fn spans(&self) -> Vec<CapturedSpan> {
        self.spans.lock().unwrap().clone()
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    fn events_named(&self, message: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.message == message)
            .collect()
    }
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

struct NavCapture(CaptureHandle);

impl<S> tracing_subscriber::Layer<S> for NavCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.0.spans.lock().unwrap().push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        let message = fields.get("message").cloned().unwrap_or_default();
        let parent_span_name = ctx
            .current_span()
            .id()
            .and_then(|id| ctx.span(id))
            .map(|span_ref| span_ref.name().to_string());

        self.0.events.lock().unwrap().push(CapturedEvent {
            message,
            fields,
            parent_span_name,
        });
    }
}

fn with_captured<F>(f: F) -> CaptureHandle
where
    F: FnOnce(),
{
    let handle = CaptureHandle::default();
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(NavCapture(handle.clone()));
    tracing::subscriber::with_default(subscriber, f);
    handle
}

fn press(scene: &mut Scene, direction: Direction) {
    let mut event = KeyDownEvent::new(KeyEvent::new(KeyCode::Right), direction);
    let start = scene.active();
    event_capture_phase(scene, start, direction, &mut event).unwrap();
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn capture_span_carries_direction_and_start() {
    let mut scene = Scene::new();
    let group = scene
        .insert(scene.root(), Node::new().with_waypoint(FixedListWaypoint::horizontal()))
        .unwrap();
    let a = scene.insert(group, Node::focusable()).unwrap();
    scene.insert(group, Node::focusable()).unwrap();
    scene.focus(a);

    let handle = with_captured(|| press(&mut scene, Direction::Right));

    let spans = handle.spans();
    let capture: Vec<_> = spans.iter().filter(|s| s.name == "nav.capture").collect();
    assert_eq!(capture.len(), 1, "spans: {spans:?}");
    assert_eq!(capture[0].fields.get("direction").map(String::as_str), Some("right"));
    assert_eq!(capture[0].fields.get("start"), Some(&a.to_string()));
}

#[test]
fn waypoint_and_focus_events_nest_under_capture() {
    let mut scene = Scene::new();
    let group = scene
        .insert(scene.root(), Node::new().with_waypoint(FixedListWaypoint::horizontal()))
        .unwrap();
    let a = scene.insert(group, Node::focusable()).unwrap();
    let b = scene.insert(group, Node::focusable()).unwrap();
    scene.focus(a);

    let handle = with_captured(|| press(&mut scene, Direction::Right));

    let decisions = handle.events_named("nav.waypoint");
    assert_eq!(decisions.len(), 1);
    assert_eq!(decisions[0].fields.get("owner"), Some(&group.to_string()));
    assert_eq!(decisions[0].parent_span_name.as_deref(), Some("nav.capture"));

    let changes = handle.events_named("focus.change");
    let kinds: Vec<_> = changes
        .iter()
        .map(|e| (e.fields["kind"].clone(), e.fields["node"].clone()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("blur".to_string(), a.to_string()),
            ("focus".to_string(), b.to_string()),
        ]
    );
    assert!(
        changes
            .iter()
            .all(|e| e.parent_span_name.as_deref() == Some("nav.capture"))
    );
}

#[test]
fn resolve_steps_are_logged() {
    let mut scene = Scene::new();
    let grid = scene
        .insert(scene.root(), Node::new().with_waypoint(FixedListWaypoint::vertical()))
        .unwrap();
    let mut first = Vec::new();
    for _ in 0..2 {
        let row = scene
            .insert(grid, Node::new().with_waypoint(FixedListWaypoint::horizontal()))
            .unwrap();
        first.push(scene.insert(row, Node::focusable()).unwrap());
    }
    scene.focus(first[0]);

    let handle = with_captured(|| press(&mut scene, Direction::Down));

    let steps = handle.events_named("nav.resolve");
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].fields.get("next"), Some(&first[1].to_string()));
    assert_eq!(steps[0].fields.get("depth").map(String::as_str), Some("0"));
}

#[test]
fn ignored_keys_open_no_span() {
    let mut scene = Scene::new();
    let a = scene.insert(scene.root(), Node::focusable()).unwrap();
    scene.focus(a);

    let handle = with_captured(|| press(&mut scene, Direction::None));
    assert!(handle.spans().iter().all(|s| s.name != "nav.capture"));
    assert!(handle.events().is_empty());
}
