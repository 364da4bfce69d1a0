//! Geometry and measurement helpers
//!
//! Thin reads of style, layout and scroll state. Measuring a detached node
//! yields [`Rect::ZERO`] instead of failing.

use crate::error::DomResult;
use crate::host::{DomHost, Rect, RectTarget};

/// Returns the live computed style of `element`.
pub fn computed_style<H: DomHost + ?Sized>(host: &H, element: &H::Node) -> DomResult<H::Style> {
	host.computed_style(element)
}

/// Returns true if `node` is the document, or its parent sits inside the
/// document's root element.
pub fn is_mounted<H: DomHost + ?Sized>(host: &H, node: &H::Node) -> bool {
	if host.is_document(node) {
		return true;
	}
	match host.parent_node(node) {
		Some(parent) => host.root_contains(&parent),
		None => false,
	}
}

/// Returns the bounding rect of a range or a mounted node.
///
/// Unmounted nodes get a zeroed rectangle.
pub fn bounding_rect<H: DomHost + ?Sized>(
	host: &H,
	target: RectTarget<'_, H::Node, H::Range>,
) -> Rect {
	match target {
		RectTarget::Range(range) => host.range_rect(range),
		RectTarget::Node(node) if is_mounted(host, node) => host.node_rect(node),
		RectTarget::Node(_) => {
			tracing::trace!("measuring detached node, returning zero rect");
			Rect::ZERO
		}
	}
}

/// Returns the device pixel ratio, or `1.0` if the host does not report one.
pub fn pixel_ratio<H: DomHost + ?Sized>(host: &H) -> f64 {
	host.device_pixel_ratio().unwrap_or(1.0)
}

/// Returns the viewport height in whole pixels.
pub fn window_height<H: DomHost + ?Sized>(host: &H) -> u32 {
	host.inner_height()
		.filter(|h| h.is_finite() && *h > 0.0)
		.map(|h| h as u32)
		.unwrap_or(0)
}

/// Returns the document's vertical scroll offset.
pub fn document_scroll_top<H: DomHost + ?Sized>(host: &H) -> f64 {
	prefer_root(host.root_scroll_top(), || host.body_scroll_top())
}

/// Returns the document's horizontal scroll offset.
pub fn document_scroll_left<H: DomHost + ?Sized>(host: &H) -> f64 {
	prefer_root(host.root_scroll_left(), || host.body_scroll_left())
}

// Quirks-mode documents scroll the body, leaving the root at zero.
fn prefer_root(root: Option<f64>, body: impl FnOnce() -> Option<f64>) -> f64 {
	match root {
		Some(value) if is_truthy(value) => value,
		_ => body().filter(|v| is_truthy(*v)).unwrap_or(0.0),
	}
}

fn is_truthy(value: f64) -> bool {
	value != 0.0 && !value.is_nan()
}
