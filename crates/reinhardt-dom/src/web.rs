//! Browser host backed by `web-sys`
//!
//! Only compiled for `wasm32`. [`WebHost`] captures `window` and `document`
//! once and implements [`DomHost`] on top of them; the `ListenerTarget`
//! impls route subscriptions through `addEventListener`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CssStyleDeclaration, Document, DomRect, Element, HtmlElement, Node, Range, Window};

use crate::error::{DomError, DomResult};
use crate::host::{DomHost, Rect};
use crate::listener::{DetachFn, ListenerTarget};

/// [`DomHost`] over the live browser window.
#[derive(Debug, Clone)]
pub struct WebHost {
	window: Window,
	document: Document,
}

impl WebHost {
	/// Captures the global `window` and its `document`.
	///
	/// # Errors
	///
	/// Fails outside a browser main thread, where either is missing.
	pub fn new() -> DomResult<Self> {
		let window = web_sys::window().ok_or(DomError::MissingWindow)?;
		let document = window.document().ok_or(DomError::MissingDocument)?;
		Ok(Self { window, document })
	}

	/// The captured window.
	pub fn window(&self) -> &Window {
		&self.window
	}

	/// The captured document.
	pub fn document(&self) -> &Document {
		&self.document
	}

	fn root_style(&self) -> DomResult<CssStyleDeclaration> {
		let root = self
			.document
			.document_element()
			.ok_or(DomError::MissingRootElement)?;
		let root = root
			.dyn_into::<HtmlElement>()
			.map_err(|_| DomError::MissingRootElement)?;
		Ok(root.style())
	}
}

fn rect_from(dom_rect: &DomRect) -> Rect {
	Rect {
		top: dom_rect.top(),
		right: dom_rect.right(),
		bottom: dom_rect.bottom(),
		left: dom_rect.left(),
		width: dom_rect.width(),
		height: dom_rect.height(),
	}
}

impl DomHost for WebHost {
	type Node = Node;
	type Range = Range;
	type Style = CssStyleDeclaration;

	fn computed_style(&self, element: &Node) -> DomResult<CssStyleDeclaration> {
		let element = element
			.dyn_ref::<Element>()
			.ok_or(DomError::MissingComputedStyle)?;
		self.window
			.get_computed_style(element)?
			.ok_or(DomError::MissingComputedStyle)
	}

	fn is_document(&self, node: &Node) -> bool {
		node.is_same_node(Some(AsRef::<Node>::as_ref(&self.document)))
	}

	fn parent_node(&self, node: &Node) -> Option<Node> {
		node.parent_node()
	}

	fn root_contains(&self, node: &Node) -> bool {
		self.document
			.document_element()
			.is_some_and(|root| root.contains(Some(node)))
	}

	fn node_rect(&self, node: &Node) -> Rect {
		match node.dyn_ref::<Element>() {
			Some(element) => rect_from(&element.get_bounding_client_rect()),
			None => {
				tracing::trace!(node_type = node.node_type(), "non-element node has no rect");
				Rect::ZERO
			}
		}
	}

	fn range_rect(&self, range: &Range) -> Rect {
		rect_from(&range.get_bounding_client_rect())
	}

	fn device_pixel_ratio(&self) -> Option<f64> {
		let present = js_sys::Reflect::has(&self.window, &"devicePixelRatio".into()).unwrap_or(false);
		present.then(|| self.window.device_pixel_ratio())
	}

	fn inner_height(&self) -> Option<f64> {
		self.window.inner_height().ok().and_then(|value| value.as_f64())
	}

	fn root_scroll_top(&self) -> Option<f64> {
		self.document
			.document_element()
			.map(|root| f64::from(root.scroll_top()))
	}

	fn body_scroll_top(&self) -> Option<f64> {
		self.document
			.body()
			.map(|body| f64::from(body.scroll_top()))
	}

	fn root_scroll_left(&self) -> Option<f64> {
		self.document
			.document_element()
			.map(|root| f64::from(root.scroll_left()))
	}

	fn body_scroll_left(&self) -> Option<f64> {
		self.document
			.body()
			.map(|body| f64::from(body.scroll_left()))
	}

	fn set_root_style_property(&self, name: &str, value: &str) -> DomResult<()> {
		self.root_style()?.set_property(name, value)?;
		Ok(())
	}

	fn remove_root_style_property(&self, name: &str) -> DomResult<()> {
		self.root_style()?.remove_property(name)?;
		Ok(())
	}
}

fn subscribe_native(
	target: &web_sys::EventTarget,
	event_name: &str,
	handler: Box<dyn FnMut(web_sys::Event) + 'static>,
	use_capture: bool,
) -> DomResult<DetachFn> {
	let closure = Closure::<dyn FnMut(web_sys::Event)>::wrap(handler);
	target.add_event_listener_with_callback_and_bool(
		event_name,
		closure.as_ref().unchecked_ref(),
		use_capture,
	)?;

	let target = target.clone();
	let event_name = event_name.to_string();
	Ok(Box::new(move || {
		let removed = target.remove_event_listener_with_callback_and_bool(
			&event_name,
			closure.as_ref().unchecked_ref(),
			use_capture,
		);
		if let Err(err) = removed {
			tracing::warn!(event = %event_name, error = ?err, "removeEventListener failed");
		}
		// Dropping the closure invalidates the JS function.
		drop(closure);
	}))
}

macro_rules! impl_listener_target {
	($($ty:ty),* $(,)?) => {
		$(
			impl ListenerTarget for $ty {
				type Event = web_sys::Event;

				fn subscribe(
					&self,
					event_name: &str,
					handler: Box<dyn FnMut(web_sys::Event) + 'static>,
					use_capture: bool,
				) -> DomResult<DetachFn> {
					subscribe_native(
						AsRef::<web_sys::EventTarget>::as_ref(self),
						event_name,
						handler,
						use_capture,
					)
				}
			}
		)*
	};
}

impl_listener_target!(
	web_sys::EventTarget,
	Node,
	Element,
	HtmlElement,
	Document,
	Window,
);
