use std::cell::RefCell;
use std::rc::Rc;

use lightbox_common::{
    decode_metadata, FetchError, FetchPolicy, KeyBinding, KeyBindingSlot, NavAction, Phase, PhotoRecord,
    PhotoViewer, SizedImage, SourceResolver, Viewport,
};
use serde_json::{json, Value};

/// Resolver that records every call it receives
#[derive(Default)]
struct RecordingResolver {
    calls: RefCell<Vec<(String, Viewport)>>,
}

impl SourceResolver for RecordingResolver {
    fn resolve(&self, record: &PhotoRecord, viewport: Viewport) -> Option<String> {
        self.calls
            .borrow_mut()
            .push((record.id().to_string(), viewport));
        SizedImage::default().resolve(record, viewport)
    }
}

fn photo_doc(id: &str) -> Result<Value, FetchError> {
    Ok(json!({
        "title": format!("photo {id}"),
        "file": { "url": format!("//images.example.net/{id}.jpg") },
    }))
}

/// Host callbacks, as seen from the outside
#[derive(Default)]
struct Host {
    events: Rc<RefCell<Vec<String>>>,
}

impl Host {
    fn bind(&self, slot: &KeyBindingSlot, name: &'static str) -> KeyBinding {
        let events = self.events.clone();
        slot.install(move |action| {
            let label = match action {
                NavAction::Next => "next",
                NavAction::Prev => "prev",
                NavAction::Close => "close",
            };
            events.borrow_mut().push(format!("{name}:{label}"));
        })
    }

    fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }
}

#[test]
fn test_empty_until_first_successful_fetch() {
    let mut viewer = PhotoViewer::default();
    assert!(viewer.surface().is_none());

    let req = viewer.request("a".into()).unwrap();
    assert!(viewer.surface().is_none());

    let image = viewer.commit_metadata(
        req,
        Err(FetchError::Network("offline".into())),
        Viewport::new(800, 600),
        &SizedImage::default(),
    );
    assert!(image.is_none());
    assert!(viewer.surface().is_none());
    assert_eq!(viewer.phase(), Phase::Empty);

    let req = viewer.request("b".into()).unwrap();
    let _ = viewer.commit_metadata(
        req,
        Ok(json!("just a string")),
        Viewport::new(800, 600),
        &SizedImage::default(),
    );
    assert!(viewer.surface().is_none());
}

#[test]
fn test_record_and_source_describe_same_id() {
    let resolver = RecordingResolver::default();
    let mut viewer = PhotoViewer::default();

    for id in ["a", "b", "c"] {
        let req = viewer.request(id.into()).unwrap();
        let _ = viewer.commit_metadata(req, photo_doc(id), Viewport::new(640, 480), &resolver);

        let record = viewer.record().unwrap();
        assert_eq!(record.id().as_str(), id);
        assert_eq!(
            viewer.source(),
            Some(format!("https://images.example.net/{id}.jpg?w=640&h=480").as_str())
        );
    }

    let resolved: Vec<String> = resolver.calls.borrow().iter().map(|(id, _)| id.clone()).collect();
    assert_eq!(resolved, vec!["a", "b", "c"]);
}

#[test]
fn test_load_signal_at_most_once_per_source() {
    let mut viewer = PhotoViewer::default();
    let mut loads = Vec::new();

    let req = viewer.request("a".into()).unwrap();
    let image = viewer
        .commit_metadata(req, photo_doc("a"), Viewport::new(10, 10), &SizedImage::default())
        .unwrap();
    loads.extend(viewer.commit_image(image, Viewport::new(10, 10)));

    // Same id again is not refetched
    assert!(viewer.request("a".into()).is_none());

    // A different id resolving to the same source produces no new preload
    let same_source = |_: &PhotoRecord, _: Viewport| Some("https://images.example.net/a.jpg?w=10&h=10".to_string());
    let req = viewer.request("a-copy".into()).unwrap();
    assert!(viewer
        .commit_metadata(req, photo_doc("a-copy"), Viewport::new(10, 10), &same_source)
        .is_none());

    assert_eq!(loads, vec![Viewport::new(10, 10)]);
}

#[test]
fn test_navigation_keys() {
    let slot = KeyBindingSlot::new();
    let host = Host::default();
    let _binding = host.bind(&slot, "viewer");

    slot.dispatch_key("ArrowRight");
    assert_eq!(host.events(), vec!["viewer:next"]);
    slot.dispatch_key("ArrowLeft");
    assert_eq!(host.events(), vec!["viewer:next", "viewer:prev"]);
    slot.dispatch_key("Escape");
    assert_eq!(host.events(), vec!["viewer:next", "viewer:prev", "viewer:close"]);

    for key in ["Enter", " ", "ArrowUp", "ArrowDown", "a", "Shift"] {
        assert_eq!(slot.dispatch_key(key), None);
    }
    assert_eq!(host.events().len(), 3);
}

#[test]
fn test_second_mount_replaces_first_binding() {
    let slot = KeyBindingSlot::new();
    let host = Host::default();
    let first = host.bind(&slot, "first");
    let _second = host.bind(&slot, "second");

    slot.dispatch_key("ArrowRight");
    assert_eq!(host.events(), vec!["second:next"]);

    // Unmounting the first instance must not unbind the second
    drop(first);
    slot.dispatch_key("Escape");
    assert_eq!(host.events(), vec!["second:next", "second:close"]);
}

#[test]
fn test_scenario_a_load_reports_viewport() {
    let resolver = RecordingResolver::default();
    let mut viewer = PhotoViewer::default();
    let viewport = Viewport::new(1920, 1080);

    let req = viewer.request("abc123".into()).unwrap();
    assert_eq!(req.id().as_str(), "abc123");
    let image = viewer
        .commit_metadata(req, Ok(json!({"title": "x", "url": "/img/abc123.jpg"})), viewport, &resolver)
        .unwrap();

    assert_eq!(
        resolver.calls.borrow().as_slice(),
        &[("abc123".to_string(), viewport)]
    );
    assert_eq!(image.source(), "/img/abc123.jpg?w=1920&h=1080");
    assert_eq!(viewer.record().unwrap().title(), Some("x"));

    assert_eq!(viewer.commit_image(image, viewport), Some(Viewport::new(1920, 1080)));
    assert_eq!(viewer.phase(), Phase::ImageLoaded);
}

#[test]
fn test_scenario_b_missing_photo_stays_empty() {
    let mut viewer = PhotoViewer::default();
    let req = viewer.request("missing".into()).unwrap();
    let outcome = decode_metadata(404, b"<html><body>Not Found</body></html>");
    assert_eq!(outcome, Err(FetchError::Status(404)));
    let image = viewer.commit_metadata(
        req,
        outcome,
        Viewport::new(1920, 1080),
        &SizedImage::default(),
    );

    assert!(image.is_none());
    assert!(viewer.surface().is_none());
    assert_eq!(viewer.phase(), Phase::Empty);
}

#[test]
fn test_scenario_c_escape_after_load() {
    let slot = KeyBindingSlot::new();
    let host = Host::default();
    let _binding = host.bind(&slot, "viewer");

    let mut viewer = PhotoViewer::default();
    let req = viewer.request("abc123".into()).unwrap();
    let image = viewer
        .commit_metadata(req, photo_doc("abc123"), Viewport::new(1, 1), &SizedImage::default())
        .unwrap();
    let _ = viewer.commit_image(image, Viewport::new(1, 1));

    assert_eq!(slot.dispatch_key("Escape"), Some(NavAction::Close));
    assert_eq!(host.events(), vec!["viewer:close"]);
}

#[test]
fn test_scenario_d_last_resolved_wins() {
    let mut viewer = PhotoViewer::new(FetchPolicy::LastResolvedWins);
    let vp = Viewport::new(1920, 1080);

    let first = viewer.request("abc123".into()).unwrap();
    let second = viewer.request("def456".into()).unwrap();

    let _ = viewer.commit_metadata(second, photo_doc("def456"), vp, &SizedImage::default());
    assert_eq!(viewer.record().unwrap().id().as_str(), "def456");

    // The earlier request resolves last and overwrites the newer one
    let image = viewer.commit_metadata(first, photo_doc("abc123"), vp, &SizedImage::default());
    assert!(image.is_some());
    assert_eq!(viewer.record().unwrap().id().as_str(), "abc123");
    assert_eq!(
        viewer.source(),
        Some("https://images.example.net/abc123.jpg?w=1920&h=1080")
    );
    assert_eq!(viewer.requested().unwrap().as_str(), "def456");
}

#[test]
fn test_scenario_d_latest_request_wins() {
    let mut viewer = PhotoViewer::new(FetchPolicy::LatestRequestWins);
    let vp = Viewport::new(1920, 1080);

    let first = viewer.request("abc123".into()).unwrap();
    let second = viewer.request("def456".into()).unwrap();

    let _ = viewer.commit_metadata(second, photo_doc("def456"), vp, &SizedImage::default());
    let image = viewer.commit_metadata(first, photo_doc("abc123"), vp, &SizedImage::default());

    assert!(image.is_none());
    assert_eq!(viewer.record().unwrap().id().as_str(), "def456");
}
