//! Error types for DOM helpers and the listener registry.

use thiserror::Error;

use crate::listener::ListenerHandle;

/// Result type for DOM host operations.
pub type DomResult<T> = Result<T, DomError>;

/// Errors raised by a [`DomHost`](crate::DomHost) implementation.
///
/// Measurement helpers never produce these for detached nodes; they only
/// surface when the platform itself is unavailable or throws.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DomError {
	/// No global `window` object.
	#[error("window is not available")]
	MissingWindow,

	/// The window has no `document`.
	#[error("document is not available")]
	MissingDocument,

	/// The document has no root element.
	#[error("document has no root element")]
	MissingRootElement,

	/// `getComputedStyle` returned nothing for the element.
	#[error("computed style is not available for this element")]
	MissingComputedStyle,

	/// A platform call threw; the payload is the stringified exception.
	#[error("platform call failed: {0}")]
	Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		Self::Js(
			value
				.as_string()
				.unwrap_or_else(|| format!("{:?}", value)),
		)
	}
}

/// Errors raised by [`ListenerRegistry`](crate::ListenerRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ListenerError {
	/// The handle is not tracked by this registry.
	#[error("unknown listener handle: {0}")]
	UnknownHandle(ListenerHandle),

	/// The target rejected the subscription.
	#[error("failed to subscribe to '{event}': {source}")]
	Subscribe {
		/// Event name passed to `add`.
		event: String,
		/// Underlying host error.
		#[source]
		source: DomError,
	},
}
