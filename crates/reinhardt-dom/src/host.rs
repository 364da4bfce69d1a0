//! Host abstraction
//!
//! The helpers in this crate never touch a global `window`. Everything they
//! read or write goes through a [`DomHost`], which is [`WebHost`] in the
//! browser and [`MockDocument`] in tests.
//!
//! [`WebHost`]: crate::web::WebHost
//! [`MockDocument`]: crate::testing::MockDocument

use serde::{Deserialize, Serialize};

use crate::error::DomResult;

/// An axis-aligned rectangle snapshot, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	/// Distance from the viewport top to the top edge.
	pub top: f64,
	/// Distance from the viewport left to the right edge.
	pub right: f64,
	/// Distance from the viewport top to the bottom edge.
	pub bottom: f64,
	/// Distance from the viewport left to the left edge.
	pub left: f64,
	/// Width of the rectangle.
	pub width: f64,
	/// Height of the rectangle.
	pub height: f64,
}

impl Rect {
	/// Zero-sized rectangle at the origin.
	pub const ZERO: Rect = Rect {
		top: 0.0,
		right: 0.0,
		bottom: 0.0,
		left: 0.0,
		width: 0.0,
		height: 0.0,
	};

	/// Builds a rectangle from its origin and size.
	pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			top,
			right: left + width,
			bottom: top + height,
			left,
			width,
			height,
		}
	}

	/// Returns true if every field is zero.
	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}
}

/// What a bounding rect is requested for.
///
/// The caller decides once whether it holds a range or a node.
#[derive(Debug)]
pub enum RectTarget<'a, N, R> {
	/// A text/selection range. Always measured.
	Range(&'a R),
	/// A tree node. Measured only when mounted.
	Node(&'a N),
}

/// The document/window capability the helpers run against.
///
/// Implementations only delegate; policy (mount checks, fallbacks) lives in
/// [`geometry`](crate::geometry) and [`style`](crate::style).
pub trait DomHost {
	/// Tree node handle. The document itself is also a node.
	type Node;
	/// Text/selection range handle.
	type Range;
	/// Live computed-style view.
	type Style;

	/// Returns the computed style of `element`.
	fn computed_style(&self, element: &Self::Node) -> DomResult<Self::Style>;

	/// Returns true if `node` is the document.
	fn is_document(&self, node: &Self::Node) -> bool;

	/// Returns the parent of `node`, if any.
	fn parent_node(&self, node: &Self::Node) -> Option<Self::Node>;

	/// Returns true if the root element contains `node` (inclusive).
	fn root_contains(&self, node: &Self::Node) -> bool;

	/// Native bounding rect of a node.
	fn node_rect(&self, node: &Self::Node) -> Rect;

	/// Native bounding rect of a range.
	fn range_rect(&self, range: &Self::Range) -> Rect;

	/// `devicePixelRatio`, or `None` when the host lacks the feature.
	fn device_pixel_ratio(&self) -> Option<f64>;

	/// `innerHeight` of the window, if reported.
	fn inner_height(&self) -> Option<f64>;

	/// `scrollTop` of the root element, if there is one.
	fn root_scroll_top(&self) -> Option<f64>;

	/// `scrollTop` of the body element, if there is one.
	fn body_scroll_top(&self) -> Option<f64>;

	/// `scrollLeft` of the root element, if there is one.
	fn root_scroll_left(&self) -> Option<f64>;

	/// `scrollLeft` of the body element, if there is one.
	fn body_scroll_left(&self) -> Option<f64>;

	/// Sets a property on the root element's inline style.
	fn set_root_style_property(&self, name: &str, value: &str) -> DomResult<()>;

	/// Removes a property from the root element's inline style.
	fn remove_root_style_property(&self, name: &str) -> DomResult<()>;
}
