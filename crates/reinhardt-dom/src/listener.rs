//! Listener registry
//!
//! [`ListenerRegistry`] keeps the detach action of every subscription it
//! created, keyed by an opaque [`ListenerHandle`], so a component can drop
//! one listener or all of them at teardown.
//!
//! ## Example
//!
//! ```ignore
//! use reinhardt_dom::ListenerRegistry;
//!
//! let mut listeners = ListenerRegistry::new();
//! let click = listeners.add(&button, "click", |_event| { /* ... */ }, false)?;
//! listeners.add(&window, "resize", |_event| { /* ... */ }, false)?;
//!
//! listeners.remove(click)?;
//! listeners.remove_all();
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomResult, ListenerError};

/// Zero-argument action that reverses exactly one subscription.
pub type DetachFn = Box<dyn FnOnce() + 'static>;

/// Something handlers can be attached to.
///
/// `subscribe` registers `handler` natively and returns the action that
/// unregisters it again.
pub trait ListenerTarget {
	/// Event value passed to handlers.
	type Event;

	/// Registers `handler` for `event_name` with the given capture flag.
	fn subscribe(
		&self,
		event_name: &str,
		handler: Box<dyn FnMut(Self::Event) + 'static>,
		use_capture: bool,
	) -> DomResult<DetachFn>;
}

/// Opaque handle to a subscription owned by a [`ListenerRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
	/// Builds a handle from its raw id.
	pub fn from_raw(id: u64) -> Self {
		Self(id)
	}

	/// Returns the raw id.
	pub fn as_raw(&self) -> u64 {
		self.0
	}
}

impl fmt::Display for ListenerHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// What [`ListenerRegistry::remove`] does with a handle it does not track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownHandlePolicy {
	/// Return [`ListenerError::UnknownHandle`].
	#[default]
	Error,
	/// Log a warning and succeed.
	Ignore,
}

/// Tracks active subscriptions so they can be removed individually or in bulk.
///
/// Dropping the registry detaches everything it still tracks.
pub struct ListenerRegistry {
	active: HashMap<ListenerHandle, DetachFn>,
	next_id: u64,
	policy: UnknownHandlePolicy,
}

impl Default for ListenerRegistry {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ListenerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListenerRegistry")
			.field("active", &self.active.len())
			.field("next_id", &self.next_id)
			.field("policy", &self.policy)
			.finish()
	}
}

impl ListenerRegistry {
	/// Creates an empty registry that rejects unknown handles.
	pub fn new() -> Self {
		Self::with_policy(UnknownHandlePolicy::default())
	}

	/// Creates an empty registry with the given unknown-handle policy.
	pub fn with_policy(policy: UnknownHandlePolicy) -> Self {
		Self {
			active: HashMap::new(),
			next_id: 0,
			policy,
		}
	}

	/// Returns the unknown-handle policy.
	pub fn policy(&self) -> UnknownHandlePolicy {
		self.policy
	}

	/// Subscribes `handler` to `event_name` on `target` and tracks it.
	///
	/// # Errors
	///
	/// Returns [`ListenerError::Subscribe`] if the target refuses the
	/// subscription. Nothing is tracked in that case.
	pub fn add<T, F>(
		&mut self,
		target: &T,
		event_name: &str,
		handler: F,
		use_capture: bool,
	) -> Result<ListenerHandle, ListenerError>
	where
		T: ListenerTarget + ?Sized,
		F: FnMut(T::Event) + 'static,
	{
		let detach = target
			.subscribe(event_name, Box::new(handler), use_capture)
			.map_err(|source| ListenerError::Subscribe {
				event: event_name.to_string(),
				source,
			})?;

		let handle = ListenerHandle(self.next_id);
		self.next_id += 1;
		self.active.insert(handle, detach);
		tracing::debug!(%handle, event = event_name, use_capture, "listener added");
		Ok(handle)
	}

	/// Detaches the subscription behind `handle` and stops tracking it.
	///
	/// # Errors
	///
	/// Returns [`ListenerError::UnknownHandle`] for handles this registry does
	/// not track, unless the policy is [`UnknownHandlePolicy::Ignore`].
	pub fn remove(&mut self, handle: ListenerHandle) -> Result<(), ListenerError> {
		match self.active.remove(&handle) {
			Some(detach) => {
				detach();
				tracing::debug!(%handle, "listener removed");
				Ok(())
			}
			None => match self.policy {
				UnknownHandlePolicy::Error => Err(ListenerError::UnknownHandle(handle)),
				UnknownHandlePolicy::Ignore => {
					tracing::warn!(%handle, "ignoring removal of unknown listener handle");
					Ok(())
				}
			},
		}
	}

	/// Detaches every tracked subscription.
	pub fn remove_all(&mut self) {
		if self.active.is_empty() {
			return;
		}
		let count = self.active.len();
		for (_, detach) in self.active.drain() {
			detach();
		}
		tracing::debug!(count, "all listeners removed");
	}

	/// Returns true if `handle` is tracked.
	pub fn contains(&self, handle: ListenerHandle) -> bool {
		self.active.contains_key(&handle)
	}

	/// Returns the number of tracked subscriptions.
	pub fn len(&self) -> usize {
		self.active.len()
	}

	/// Returns true if nothing is tracked.
	pub fn is_empty(&self) -> bool {
		self.active.is_empty()
	}
}

impl Drop for ListenerRegistry {
	fn drop(&mut self) {
		self.remove_all();
	}
}
