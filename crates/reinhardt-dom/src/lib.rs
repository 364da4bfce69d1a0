//! Reinhardt DOM - host-injected DOM helpers
//!
//! Small, stateless helpers over browser DOM measurement and mutation APIs,
//! plus a registry that tracks event subscriptions for bulk teardown.
//!
//! ## Architecture
//!
//! - [`host`]: the [`DomHost`] capability every helper receives explicitly
//! - [`geometry`]: computed style, mount checks, bounding rects, pixel ratio,
//!   viewport height and scroll offsets
//! - [`class_list`]: whitespace-separated class spec mutation
//! - [`style`]: CSS custom properties on the root element
//! - [`listener`]: [`ListenerRegistry`] and the [`ListenerTarget`] seam
//! - [`event`]: `preventDefault` that tolerates plain data events
//! - `web`: the `web-sys` backed [`DomHost`] (wasm32 only)
//! - `testing`: an in-memory [`DomHost`] (`testing` feature)
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::{
//!     ListenerRegistry, RectTarget, WebHost, add_classes, bounding_rect, pixel_ratio,
//!     set_root_style_properties,
//! };
//!
//! let host = WebHost::new()?;
//! let node: web_sys::Node = host.document().body().unwrap().into();
//!
//! let rect = bounding_rect(&host, RectTarget::Node(&node));
//! set_root_style_properties(&host, [("--vh", format!("{}px", rect.height))])?;
//! let _scale = pixel_ratio(&host);
//!
//! let mut listeners = ListenerRegistry::new();
//! listeners.add(host.window(), "resize", |_event| { /* ... */ }, false)?;
//! listeners.remove_all();
//! ```

#![warn(missing_docs)]

pub mod class_list;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod listener;
pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use class_list::{
	ClassList, ClassVerb, add_classes, class_list_mutator, class_tokens, remove_classes,
	toggle_classes,
};
pub use error::{DomError, DomResult, ListenerError};
pub use event::{Cancelable, EventLike, prevent_default};
#[cfg(target_arch = "wasm32")]
pub use event::prevent_default_js;
pub use geometry::{
	bounding_rect, computed_style, document_scroll_left, document_scroll_top, is_mounted,
	pixel_ratio, window_height,
};
pub use host::{DomHost, Rect, RectTarget};
pub use listener::{DetachFn, ListenerHandle, ListenerRegistry, ListenerTarget, UnknownHandlePolicy};
pub use style::{remove_root_style_properties, set_root_style_properties};
#[cfg(target_arch = "wasm32")]
pub use web::WebHost;
