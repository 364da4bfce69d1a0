//! In-memory DOM host for tests
//!
//! [`MockDocument`] implements [`DomHost`] over a tiny node tree with
//! settable geometry and scroll state, an inline root style, per-node class
//! lists and a synchronous [`dispatch`](MockDocument::dispatch). It lets the
//! helpers be exercised on native targets without a browser.
//!
//! ## Example
//!
//! ```
//! use reinhardt_dom::testing::MockDocument;
//! use reinhardt_dom::{ListenerRegistry, is_mounted};
//!
//! let doc = MockDocument::new();
//! let button = doc.create_element("button");
//! assert!(!is_mounted(&doc, &button));
//!
//! doc.append_child(&doc.body().unwrap(), &button).unwrap();
//! assert!(is_mounted(&doc, &button));
//!
//! let mut listeners = ListenerRegistry::new();
//! listeners.add(&button, "click", |_| {}, false).unwrap();
//! assert_eq!(doc.listener_count(&button), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::class_list::ClassList;
use crate::error::{DomError, DomResult};
use crate::event::{Cancelable, EventLike};
use crate::host::{DomHost, Rect};
use crate::listener::{DetachFn, ListenerTarget};

const DOCUMENT_ID: usize = 0;

type SharedHandler = Rc<RefCell<Box<dyn FnMut(MockEvent) + 'static>>>;

struct NodeData {
	tag: String,
	parent: Option<usize>,
	rect: Rect,
	style: BTreeMap<String, String>,
	class_list: MockClassList,
}

impl NodeData {
	fn new(tag: &str, parent: Option<usize>) -> Self {
		Self {
			tag: tag.to_string(),
			parent,
			rect: Rect::ZERO,
			style: BTreeMap::new(),
			class_list: MockClassList::new(),
		}
	}
}

struct MockListener {
	id: u64,
	node: usize,
	event: String,
	capture: bool,
	handler: SharedHandler,
}

#[derive(Default)]
struct ScrollState {
	top: f64,
	left: f64,
}

struct MockDom {
	nodes: Vec<NodeData>,
	root: Option<usize>,
	body: Option<usize>,
	device_pixel_ratio: Option<f64>,
	inner_height: Option<f64>,
	root_scroll: ScrollState,
	body_scroll: ScrollState,
	root_style: Vec<(String, String)>,
	listeners: Vec<MockListener>,
	next_listener: u64,
}

impl MockDom {
	fn contains(&self, ancestor: usize, node: usize) -> bool {
		let mut current = Some(node);
		while let Some(id) = current {
			if id == ancestor {
				return true;
			}
			current = self.nodes[id].parent;
		}
		false
	}
}

/// In-memory document implementing [`DomHost`].
///
/// Cloning yields another handle to the same document.
#[derive(Clone)]
pub struct MockDocument {
	dom: Rc<RefCell<MockDom>>,
}

impl fmt::Debug for MockDocument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let dom = self.dom.borrow();
		f.debug_struct("MockDocument")
			.field("nodes", &dom.nodes.len())
			.field("listeners", &dom.listeners.len())
			.finish()
	}
}

impl Default for MockDocument {
	fn default() -> Self {
		Self::new()
	}
}

impl MockDocument {
	/// Creates a document with `<html>` and `<body>` in place.
	pub fn new() -> Self {
		let doc = Self::without_root();
		{
			let mut dom = doc.dom.borrow_mut();
			dom.nodes.push(NodeData::new("html", Some(DOCUMENT_ID)));
			dom.nodes.push(NodeData::new("body", Some(1)));
			dom.root = Some(1);
			dom.body = Some(2);
		}
		doc
	}

	/// Creates a bare document with no root element.
	pub fn without_root() -> Self {
		let dom = MockDom {
			nodes: vec![NodeData::new("#document", None)],
			root: None,
			body: None,
			device_pixel_ratio: None,
			inner_height: None,
			root_scroll: ScrollState::default(),
			body_scroll: ScrollState::default(),
			root_style: Vec::new(),
			listeners: Vec::new(),
			next_listener: 0,
		};
		Self {
			dom: Rc::new(RefCell::new(dom)),
		}
	}

	fn owns(&self, node: &MockNode) -> bool {
		Rc::ptr_eq(&node.dom, &self.dom)
	}

	fn node(&self, id: usize) -> MockNode {
		MockNode {
			id,
			dom: Rc::clone(&self.dom),
		}
	}

	/// The document node.
	pub fn document(&self) -> MockNode {
		self.node(DOCUMENT_ID)
	}

	/// The `<html>` element, if present.
	pub fn root_element(&self) -> Option<MockNode> {
		let root = self.dom.borrow().root;
		root.map(|id| self.node(id))
	}

	/// The `<body>` element, if present.
	pub fn body(&self) -> Option<MockNode> {
		let body = self.dom.borrow().body;
		body.map(|id| self.node(id))
	}

	/// Creates a detached element.
	pub fn create_element(&self, tag: &str) -> MockNode {
		let mut dom = self.dom.borrow_mut();
		dom.nodes.push(NodeData::new(tag, None));
		let id = dom.nodes.len() - 1;
		drop(dom);
		self.node(id)
	}

	/// Moves `child` under `parent`.
	///
	/// # Errors
	///
	/// Fails like `HierarchyRequestError` when either node belongs to another
	/// document, or when `parent` is `child` or one of its descendants.
	pub fn append_child(&self, parent: &MockNode, child: &MockNode) -> DomResult<()> {
		if !self.owns(parent) || !self.owns(child) {
			return Err(DomError::Js(
				"HierarchyRequestError: node belongs to another document".to_string(),
			));
		}
		let mut dom = self.dom.borrow_mut();
		if dom.contains(child.id, parent.id) {
			return Err(DomError::Js(
				"HierarchyRequestError: new parent is a descendant of the child".to_string(),
			));
		}
		dom.nodes[child.id].parent = Some(parent.id);
		Ok(())
	}

	/// Detaches `node` from its parent.
	pub fn remove_child(&self, node: &MockNode) {
		self.dom.borrow_mut().nodes[node.id].parent = None;
	}

	/// Sets the rect `node_rect` reports for `node`.
	pub fn set_rect(&self, node: &MockNode, rect: Rect) {
		self.dom.borrow_mut().nodes[node.id].rect = rect;
	}

	/// Sets a computed style property on `node`.
	pub fn set_style(&self, node: &MockNode, name: &str, value: &str) {
		self.dom.borrow_mut().nodes[node.id]
			.style
			.insert(name.to_string(), value.to_string());
	}

	/// Returns the class list of `node`. Mutations are visible to the document.
	pub fn class_list(&self, node: &MockNode) -> MockClassList {
		self.dom.borrow().nodes[node.id].class_list.clone()
	}

	/// Sets `devicePixelRatio`; `None` removes the feature.
	pub fn set_device_pixel_ratio(&self, ratio: Option<f64>) {
		self.dom.borrow_mut().device_pixel_ratio = ratio;
	}

	/// Sets `innerHeight`.
	pub fn set_inner_height(&self, height: Option<f64>) {
		self.dom.borrow_mut().inner_height = height;
	}

	/// Sets the root element's scroll offsets.
	pub fn set_root_scroll(&self, top: f64, left: f64) {
		self.dom.borrow_mut().root_scroll = ScrollState { top, left };
	}

	/// Sets the body element's scroll offsets.
	pub fn set_body_scroll(&self, top: f64, left: f64) {
		self.dom.borrow_mut().body_scroll = ScrollState { top, left };
	}

	/// Reads a property from the root inline style.
	pub fn root_style_property(&self, name: &str) -> Option<String> {
		self.dom
			.borrow()
			.root_style
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.clone())
	}

	/// Returns the root inline style in insertion order.
	pub fn root_style(&self) -> Vec<(String, String)> {
		self.dom.borrow().root_style.clone()
	}

	/// Returns the number of listeners attached to `node`.
	pub fn listener_count(&self, node: &MockNode) -> usize {
		self.dom
			.borrow()
			.listeners
			.iter()
			.filter(|listener| listener.node == node.id)
			.count()
	}

	/// Fires `event_name` at `node`, capture listeners first.
	///
	/// Returns the dispatched event so callers can inspect it.
	pub fn dispatch(&self, node: &MockNode, event_name: &str) -> MockEvent {
		let event = MockEvent::new(event_name);
		let handlers: Vec<(u64, SharedHandler)> = {
			let dom = self.dom.borrow();
			let matching = dom
				.listeners
				.iter()
				.filter(|l| l.node == node.id && l.event == event_name);
			let (capture, bubble): (Vec<_>, Vec<_>) = matching.partition(|l| l.capture);
			capture
				.into_iter()
				.chain(bubble)
				.map(|l| (l.id, Rc::clone(&l.handler)))
				.collect()
		};
		for (id, handler) in handlers {
			// An earlier handler may have detached this one.
			let attached = self.dom.borrow().listeners.iter().any(|l| l.id == id);
			if !attached {
				continue;
			}
			let mut handler = handler.borrow_mut();
			(*handler)(event.clone());
		}
		event
	}
}

impl DomHost for MockDocument {
	type Node = MockNode;
	type Range = MockRange;
	type Style = MockComputedStyle;

	fn computed_style(&self, element: &MockNode) -> DomResult<MockComputedStyle> {
		if element.id == DOCUMENT_ID {
			return Err(DomError::MissingComputedStyle);
		}
		let properties = element.data(|data| data.style.clone());
		Ok(MockComputedStyle { properties })
	}

	fn is_document(&self, node: &MockNode) -> bool {
		node.id == DOCUMENT_ID && Rc::ptr_eq(&node.dom, &self.dom)
	}

	fn parent_node(&self, node: &MockNode) -> Option<MockNode> {
		node.data(|data| data.parent).map(|id| MockNode {
			id,
			dom: Rc::clone(&node.dom),
		})
	}

	fn root_contains(&self, node: &MockNode) -> bool {
		if !self.owns(node) {
			return false;
		}
		let dom = self.dom.borrow();
		match dom.root {
			Some(root) => dom.contains(root, node.id),
			None => false,
		}
	}

	fn node_rect(&self, node: &MockNode) -> Rect {
		node.data(|data| data.rect)
	}

	fn range_rect(&self, range: &MockRange) -> Rect {
		range.rect
	}

	fn device_pixel_ratio(&self) -> Option<f64> {
		self.dom.borrow().device_pixel_ratio
	}

	fn inner_height(&self) -> Option<f64> {
		self.dom.borrow().inner_height
	}

	fn root_scroll_top(&self) -> Option<f64> {
		let dom = self.dom.borrow();
		dom.root.map(|_| dom.root_scroll.top)
	}

	fn body_scroll_top(&self) -> Option<f64> {
		let dom = self.dom.borrow();
		dom.body.map(|_| dom.body_scroll.top)
	}

	fn root_scroll_left(&self) -> Option<f64> {
		let dom = self.dom.borrow();
		dom.root.map(|_| dom.root_scroll.left)
	}

	fn body_scroll_left(&self) -> Option<f64> {
		let dom = self.dom.borrow();
		dom.body.map(|_| dom.body_scroll.left)
	}

	fn set_root_style_property(&self, name: &str, value: &str) -> DomResult<()> {
		let mut dom = self.dom.borrow_mut();
		if dom.root.is_none() {
			return Err(DomError::MissingRootElement);
		}
		let value = value.to_string();
		match dom.root_style.iter().position(|(key, _)| key == name) {
			Some(index) => dom.root_style[index].1 = value,
			None => dom.root_style.push((name.to_string(), value)),
		}
		Ok(())
	}

	fn remove_root_style_property(&self, name: &str) -> DomResult<()> {
		let mut dom = self.dom.borrow_mut();
		if dom.root.is_none() {
			return Err(DomError::MissingRootElement);
		}
		dom.root_style.retain(|(key, _)| key != name);
		Ok(())
	}
}

/// Node handle into a [`MockDocument`].
#[derive(Clone)]
pub struct MockNode {
	id: usize,
	dom: Rc<RefCell<MockDom>>,
}

impl MockNode {
	/// Tag name, `#document` for the document node.
	pub fn tag(&self) -> String {
		self.data(|data| data.tag.clone())
	}

	fn data<R>(&self, f: impl FnOnce(&NodeData) -> R) -> R {
		f(&self.dom.borrow().nodes[self.id])
	}
}

impl PartialEq for MockNode {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && Rc::ptr_eq(&self.dom, &other.dom)
	}
}

impl Eq for MockNode {}

impl fmt::Debug for MockNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MockNode")
			.field("id", &self.id)
			.field("tag", &self.tag())
			.finish()
	}
}

impl ListenerTarget for MockNode {
	type Event = MockEvent;

	fn subscribe(
		&self,
		event_name: &str,
		handler: Box<dyn FnMut(MockEvent) + 'static>,
		use_capture: bool,
	) -> DomResult<DetachFn> {
		let mut dom = self.dom.borrow_mut();
		let id = dom.next_listener;
		dom.next_listener += 1;
		dom.listeners.push(MockListener {
			id,
			node: self.id,
			event: event_name.to_string(),
			capture: use_capture,
			handler: Rc::new(RefCell::new(handler)),
		});

		let weak: Weak<RefCell<MockDom>> = Rc::downgrade(&self.dom);
		Ok(Box::new(move || {
			if let Some(dom) = weak.upgrade() {
				dom.borrow_mut().listeners.retain(|l| l.id != id);
			}
		}))
	}
}

/// A range with a fixed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MockRange {
	/// Rect reported for the range.
	pub rect: Rect,
}

/// Snapshot of the style properties set on a mock node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MockComputedStyle {
	properties: BTreeMap<String, String>,
}

impl MockComputedStyle {
	/// `getPropertyValue`; empty string when unset.
	pub fn property_value(&self, name: &str) -> &str {
		self.properties.get(name).map(String::as_str).unwrap_or("")
	}
}

/// A class list with `DOMTokenList`-like semantics.
#[derive(Debug, Clone, Default)]
pub struct MockClassList {
	tokens: Rc<RefCell<Vec<String>>>,
	rejected: Rc<RefCell<Vec<String>>>,
}

impl MockClassList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a list holding `tokens`.
	pub fn from_tokens<I, S>(tokens: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let list = Self::new();
		list.tokens
			.borrow_mut()
			.extend(tokens.into_iter().map(Into::into));
		list
	}

	/// Makes later mutations with `token` fail.
	pub fn reject(&self, token: &str) {
		self.rejected.borrow_mut().push(token.to_string());
	}

	/// Current tokens in insertion order.
	pub fn tokens(&self) -> Vec<String> {
		self.tokens.borrow().clone()
	}

	/// Returns true if `token` is present.
	pub fn contains(&self, token: &str) -> bool {
		self.tokens.borrow().iter().any(|t| t == token)
	}

	fn validate(&self, token: &str) -> DomResult<()> {
		if token.is_empty() {
			return Err(DomError::Js("SyntaxError: empty token".to_string()));
		}
		if token.chars().any(char::is_whitespace) {
			return Err(DomError::Js(format!(
				"InvalidCharacterError: '{}' contains whitespace",
				token
			)));
		}
		if self.rejected.borrow().iter().any(|t| t == token) {
			return Err(DomError::Js(format!("rejected token '{}'", token)));
		}
		Ok(())
	}
}

impl ClassList for MockClassList {
	fn add_class(&self, token: &str) -> DomResult<()> {
		self.validate(token)?;
		if !self.contains(token) {
			self.tokens.borrow_mut().push(token.to_string());
		}
		Ok(())
	}

	fn remove_class(&self, token: &str) -> DomResult<()> {
		self.validate(token)?;
		self.tokens.borrow_mut().retain(|t| t != token);
		Ok(())
	}

	fn toggle_class(&self, token: &str) -> DomResult<bool> {
		if self.contains(token) {
			self.remove_class(token)?;
			Ok(false)
		} else {
			self.add_class(token)?;
			Ok(true)
		}
	}
}

struct MockEventState {
	event_type: String,
	default_prevented: Cell<bool>,
}

/// A cancelable event. Clones share their state.
#[derive(Clone)]
pub struct MockEvent {
	state: Rc<MockEventState>,
}

impl MockEvent {
	/// Creates an event of the given type.
	pub fn new(event_type: &str) -> Self {
		Self {
			state: Rc::new(MockEventState {
				event_type: event_type.to_string(),
				default_prevented: Cell::new(false),
			}),
		}
	}

	/// The event type.
	pub fn event_type(&self) -> &str {
		&self.state.event_type
	}

	/// Returns true once `preventDefault` has been called.
	pub fn default_prevented(&self) -> bool {
		self.state.default_prevented.get()
	}
}

impl fmt::Debug for MockEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MockEvent")
			.field("event_type", &self.event_type())
			.field("default_prevented", &self.default_prevented())
			.finish()
	}
}

impl Cancelable for MockEvent {
	fn cancel_default(&self) {
		self.state.default_prevented.set(true);
	}
}

impl EventLike for MockEvent {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		Some(self)
	}
}
