//! Integration tests for the DOM helpers against the in-memory host
//!
//! These tests cover:
//! 1. Mount-aware measurement (detached nodes never report coordinates)
//! 2. Scroll fallbacks for quirks-mode documents
//! 3. Class spec handling on element class lists
//! 4. Root custom properties
//! 5. Listener registry lifecycle across a component teardown

use reinhardt_dom::testing::{MockDocument, MockRange};
use reinhardt_dom::{
	ListenerError, ListenerRegistry, Rect, RectTarget, UnknownHandlePolicy, add_classes,
	bounding_rect, computed_style, document_scroll_left, document_scroll_top, is_mounted,
	pixel_ratio, prevent_default, remove_classes, remove_root_style_properties,
	set_root_style_properties, window_height,
};
use rstest::{fixture, rstest};
use std::cell::Cell;
use std::rc::Rc;

#[fixture]
fn doc() -> MockDocument {
	let doc = MockDocument::new();
	doc.set_device_pixel_ratio(Some(2.0));
	doc.set_inner_height(Some(900.0));
	doc
}

#[rstest]
fn test_detached_rects_are_equal_but_independent(doc: MockDocument) {
	let el = doc.create_element("div");
	let mut first = bounding_rect(&doc, RectTarget::Node(&el));
	let second = bounding_rect(&doc, RectTarget::Node(&el));

	first.width = 99.0;

	assert_ne!(first, second);
	assert_eq!(second, Rect::ZERO);
	assert_eq!(bounding_rect(&doc, RectTarget::Node(&el)), Rect::ZERO);
}

#[rstest]
fn test_rect_follows_mount_state(doc: MockDocument) {
	let el = doc.create_element("div");
	let native = Rect::from_origin_size(8.0, 16.0, 100.0, 50.0);
	doc.set_rect(&el, native);
	let body = doc.body().unwrap();

	doc.append_child(&body, &el).unwrap();
	assert_eq!(bounding_rect(&doc, RectTarget::Node(&el)), native);

	doc.remove_child(&el);
	assert!(!is_mounted(&doc, &el));
	assert_eq!(bounding_rect(&doc, RectTarget::Node(&el)), Rect::ZERO);
}

#[rstest]
fn test_range_is_measured_without_mount_check(doc: MockDocument) {
	let range = MockRange {
		rect: Rect::from_origin_size(1.0, 2.0, 3.0, 4.0),
	};
	assert_eq!(bounding_rect(&doc, RectTarget::Range(&range)), range.rect);
}

#[rstest]
fn test_document_is_always_mounted() {
	let doc = MockDocument::without_root();
	assert!(is_mounted(&doc, &doc.document()));
}

#[rstest]
fn test_viewport_reads(doc: MockDocument) {
	assert_eq!(pixel_ratio(&doc), 2.0);
	assert_eq!(window_height(&doc), 900);

	doc.set_device_pixel_ratio(None);
	assert_eq!(pixel_ratio(&doc), 1.0);
}

#[rstest]
fn test_scroll_prefers_root(doc: MockDocument) {
	doc.set_root_scroll(300.0, 12.0);
	doc.set_body_scroll(5.0, 5.0);
	assert_eq!(document_scroll_top(&doc), 300.0);
	assert_eq!(document_scroll_left(&doc), 12.0);
}

#[rstest]
fn test_scroll_falls_back_to_body(doc: MockDocument) {
	doc.set_body_scroll(42.0, 7.0);
	assert_eq!(document_scroll_top(&doc), 42.0);
	assert_eq!(document_scroll_left(&doc), 7.0);
}

#[rstest]
fn test_scroll_without_elements_is_zero() {
	let doc = MockDocument::without_root();
	assert_eq!(document_scroll_top(&doc), 0.0);
	assert_eq!(document_scroll_left(&doc), 0.0);
}

#[rstest]
fn test_computed_style_reads_element(doc: MockDocument) {
	let el = doc.create_element("p");
	doc.set_style(&el, "display", "flex");
	let style = computed_style(&doc, &el).unwrap();
	assert_eq!(style.property_value("display"), "flex");
	assert_eq!(style.property_value("color"), "");
}

#[rstest]
#[case(None)]
#[case(Some(""))]
#[case(Some("   "))]
fn test_class_noops(doc: MockDocument, #[case] spec: Option<&str>) {
	let el = doc.create_element("div");
	let classes = doc.class_list(&el);
	add_classes(&classes, spec).unwrap();
	assert!(classes.tokens().is_empty());
}

#[rstest]
fn test_class_spec_with_extra_whitespace(doc: MockDocument) {
	let el = doc.create_element("div");
	add_classes(&doc.class_list(&el), Some("a  b")).unwrap();

	let classes = doc.class_list(&el);
	assert!(classes.contains("a"));
	assert!(classes.contains("b"));

	remove_classes(&classes, Some(" b ")).unwrap();
	assert_eq!(doc.class_list(&el).tokens(), vec!["a"]);
}

#[rstest]
fn test_root_properties_roundtrip(doc: MockDocument) {
	set_root_style_properties(&doc, [("--x", "1px"), ("--gutter", "8px")]).unwrap();
	assert_eq!(doc.root_style_property("--x").as_deref(), Some("1px"));

	remove_root_style_properties(&doc, ["--x", "--gutter"]).unwrap();
	assert!(doc.root_style().is_empty());
}

#[rstest]
fn test_prevent_default_on_plain_object() {
	assert!(!prevent_default(&serde_json::json!({})));
}

#[rstest]
fn test_handler_can_prevent_default(doc: MockDocument) {
	let form = doc.create_element("form");
	let mut listeners = ListenerRegistry::new();
	listeners
		.add(&form, "submit", |event| {
			prevent_default(&event);
		}, false)
		.unwrap();

	let event = doc.dispatch(&form, "submit");
	assert!(event.default_prevented());
}

#[rstest]
fn test_remove_one_listener_keeps_others(doc: MockDocument) {
	let el = doc.create_element("button");
	let clicks = Rc::new(Cell::new(0));
	let focuses = Rc::new(Cell::new(0));

	let mut listeners = ListenerRegistry::new();
	let click = {
		let clicks = Rc::clone(&clicks);
		listeners
			.add(&el, "click", move |_| clicks.set(clicks.get() + 1), false)
			.unwrap()
	};
	{
		let focuses = Rc::clone(&focuses);
		listeners
			.add(&el, "focus", move |_| focuses.set(focuses.get() + 1), true)
			.unwrap();
	}
	assert_eq!(listeners.len(), 2);

	listeners.remove(click).unwrap();
	assert_eq!(listeners.len(), 1);

	doc.dispatch(&el, "click");
	doc.dispatch(&el, "focus");
	assert_eq!(clicks.get(), 0);
	assert_eq!(focuses.get(), 1);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn test_remove_all_silences_every_handler(doc: MockDocument, #[case] count: usize) {
	let targets: Vec<_> = (0..count).map(|_| doc.create_element("li")).collect();
	let hits = Rc::new(Cell::new(0));

	let mut listeners = ListenerRegistry::new();
	for target in &targets {
		let hits = Rc::clone(&hits);
		listeners
			.add(target, "click", move |_| hits.set(hits.get() + 1), false)
			.unwrap();
	}
	assert_eq!(listeners.len(), count);

	listeners.remove_all();

	assert_eq!(listeners.len(), 0);
	for target in &targets {
		doc.dispatch(target, "click");
		assert_eq!(doc.listener_count(target), 0);
	}
	assert_eq!(hits.get(), 0);
}

#[rstest]
fn test_handle_from_other_registry(doc: MockDocument) {
	let el = doc.create_element("button");
	let mut owner = ListenerRegistry::new();
	let mut strict = ListenerRegistry::new();
	let mut lenient = ListenerRegistry::with_policy(UnknownHandlePolicy::Ignore);

	let handle = owner.add(&el, "click", |_| {}, false).unwrap();

	assert_eq!(strict.remove(handle), Err(ListenerError::UnknownHandle(handle)));
	assert_eq!(lenient.remove(handle), Ok(()));
	assert!(owner.contains(handle));
	assert_eq!(doc.listener_count(&el), 1);
}

#[rstest]
fn test_handler_removing_itself_during_dispatch(doc: MockDocument) {
	use std::cell::RefCell;

	let el = doc.create_element("button");
	let listeners = Rc::new(RefCell::new(ListenerRegistry::new()));
	let own_handle = Rc::new(Cell::new(None));
	let hits = Rc::new(Cell::new(0));

	let handle = {
		let listeners_in_handler = Rc::clone(&listeners);
		let own_handle = Rc::clone(&own_handle);
		let hits = Rc::clone(&hits);
		listeners
			.borrow_mut()
			.add(&el, "click", move |_| {
				hits.set(hits.get() + 1);
				if let Some(handle) = own_handle.get() {
					listeners_in_handler.borrow_mut().remove(handle).unwrap();
				}
			}, false)
			.unwrap()
	};
	own_handle.set(Some(handle));

	doc.dispatch(&el, "click");
	doc.dispatch(&el, "click");

	assert_eq!(hits.get(), 1);
	assert!(listeners.borrow().is_empty());
}

#[rstest]
fn test_handler_removing_sibling_during_dispatch(doc: MockDocument) {
	use std::cell::RefCell;

	let el = doc.create_element("button");
	let listeners = Rc::new(RefCell::new(ListenerRegistry::new()));
	let sibling = Rc::new(Cell::new(None));
	let sibling_hits = Rc::new(Cell::new(0));

	{
		let listeners_in_handler = Rc::clone(&listeners);
		let sibling = Rc::clone(&sibling);
		listeners
			.borrow_mut()
			.add(&el, "click", move |_| {
				if let Some(handle) = sibling.take() {
					listeners_in_handler.borrow_mut().remove(handle).unwrap();
				}
			}, false)
			.unwrap();
	}
	let handle = {
		let sibling_hits = Rc::clone(&sibling_hits);
		listeners
			.borrow_mut()
			.add(&el, "click", move |_| sibling_hits.set(sibling_hits.get() + 1), false)
			.unwrap()
	};
	sibling.set(Some(handle));

	doc.dispatch(&el, "click");

	assert_eq!(sibling_hits.get(), 0);
	assert_eq!(doc.listener_count(&el), 1);
	assert_eq!(listeners.borrow().len(), 1);
}
