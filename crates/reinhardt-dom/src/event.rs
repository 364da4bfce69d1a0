//! Defensive event helpers
//!
//! Input libraries sometimes hand out synthetic events that are plain data
//! with no `preventDefault`. [`prevent_default`] accepts both kinds.

/// An event whose default action can be cancelled.
pub trait Cancelable {
	/// Cancels the default action.
	fn cancel_default(&self);
}

/// Any event-like value handlers may receive.
pub trait EventLike {
	/// Returns the cancel capability, if this value carries one.
	fn as_cancelable(&self) -> Option<&dyn Cancelable>;
}

/// Calls `preventDefault` on `event` if it supports it.
///
/// Returns true when the default action was cancelled.
pub fn prevent_default<E: EventLike + ?Sized>(event: &E) -> bool {
	match event.as_cancelable() {
		Some(cancelable) => {
			cancelable.cancel_default();
			true
		}
		None => false,
	}
}

/// Plain data events, e.g. deserialized from a gesture library payload.
impl EventLike for serde_json::Value {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		None
	}
}

impl EventLike for () {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		None
	}
}

impl<E: EventLike + ?Sized> EventLike for &E {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		(**self).as_cancelable()
	}
}

impl<E: EventLike> EventLike for Option<E> {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		self.as_ref().and_then(EventLike::as_cancelable)
	}
}

#[cfg(target_arch = "wasm32")]
impl Cancelable for web_sys::Event {
	fn cancel_default(&self) {
		self.prevent_default();
	}
}

#[cfg(target_arch = "wasm32")]
impl EventLike for web_sys::Event {
	fn as_cancelable(&self) -> Option<&dyn Cancelable> {
		Some(self)
	}
}

/// Calls `preventDefault` on an arbitrary JS value if it has one.
///
/// Returns true when the method existed and was called without throwing.
#[cfg(target_arch = "wasm32")]
pub fn prevent_default_js(value: &wasm_bindgen::JsValue) -> bool {
	use wasm_bindgen::JsCast;

	if !value.is_object() {
		return false;
	}
	let Ok(method) = js_sys::Reflect::get(value, &"preventDefault".into()) else {
		return false;
	};
	match method.dyn_into::<js_sys::Function>() {
		Ok(function) => function.call0(value).is_ok(),
		Err(_) => false,
	}
}
