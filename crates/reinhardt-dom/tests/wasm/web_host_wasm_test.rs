//! Browser tests for `WebHost`
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/reinhardt-dom

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use reinhardt_dom::{
	ListenerRegistry, Rect, RectTarget, WebHost, add_classes, bounding_rect, is_mounted,
	pixel_ratio, prevent_default, prevent_default_js, remove_classes, set_root_style_properties,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> WebHost {
	WebHost::new().unwrap()
}

fn create(host: &WebHost, tag: &str) -> Element {
	host.document().create_element(tag).unwrap()
}

#[wasm_bindgen_test]
fn test_document_is_mounted() {
	let host = host();
	let node: &Node = host.document().as_ref();
	assert!(is_mounted(&host, node));
}

#[wasm_bindgen_test]
fn test_detached_element_measures_zero() {
	let host = host();
	let el = create(&host, "div");
	let node: &Node = el.as_ref();
	assert!(!is_mounted(&host, node));
	assert_eq!(bounding_rect(&host, RectTarget::Node(node)), Rect::ZERO);
}

#[wasm_bindgen_test]
fn test_mounted_element_measures_native_rect() {
	let host = host();
	let el = create(&host, "div");
	el.set_attribute("style", "width: 40px; height: 20px;").unwrap();
	let body = host.document().body().unwrap();
	body.append_child(&el).unwrap();

	let rect = bounding_rect(&host, RectTarget::Node(el.as_ref()));
	assert_eq!(rect.width, 40.0);
	assert_eq!(rect.height, 20.0);

	body.remove_child(&el).unwrap();
}

#[wasm_bindgen_test]
fn test_pixel_ratio_is_positive() {
	assert!(pixel_ratio(&host()) > 0.0);
}

#[wasm_bindgen_test]
fn test_class_list_helpers() {
	let host = host();
	let el = create(&host, "div");
	let classes = el.class_list();

	add_classes(&classes, Some("a  b")).unwrap();
	assert!(classes.contains("a"));
	assert!(classes.contains("b"));

	remove_classes(&classes, Some("a")).unwrap();
	assert!(!classes.contains("a"));
}

#[wasm_bindgen_test]
fn test_root_custom_property() {
	let host = host();
	set_root_style_properties(&host, [("--x", "1px")]).unwrap();

	let root = host.document().document_element().unwrap();
	let style = host.window().get_computed_style(&root).unwrap().unwrap();
	assert_eq!(style.get_property_value("--x").unwrap().trim(), "1px");
}

#[wasm_bindgen_test]
fn test_registry_add_remove() {
	let host = host();
	let el = create(&host, "button");
	let hits = Rc::new(Cell::new(0));

	let mut listeners = ListenerRegistry::new();
	let handle = {
		let hits = Rc::clone(&hits);
		listeners
			.add(&el, "click", move |_| hits.set(hits.get() + 1), false)
			.unwrap()
	};

	el.dispatch_event(&Event::new("click").unwrap()).unwrap();
	assert_eq!(hits.get(), 1);

	listeners.remove(handle).unwrap();
	el.dispatch_event(&Event::new("click").unwrap()).unwrap();
	assert_eq!(hits.get(), 1);
	assert!(listeners.is_empty());
}

#[wasm_bindgen_test]
fn test_prevent_default_variants() {
	let event = Event::new("submit").unwrap();
	assert!(prevent_default(&event));
	assert!(!prevent_default_js(&js_sys::Object::new().into()));
	assert!(!prevent_default_js(&JsValue::NULL));
}
