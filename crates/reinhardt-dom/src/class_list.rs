//! Class list helpers
//!
//! Class specs are whitespace-separated strings such as `"btn  btn-primary"`.
//! Tokens are applied one at a time so handles without multi-token support
//! behave the same as full `DOMTokenList`s.

use crate::error::DomResult;

/// A mutable set of class names attached to an element.
pub trait ClassList {
	/// Adds a single class token.
	fn add_class(&self, token: &str) -> DomResult<()>;

	/// Removes a single class token.
	fn remove_class(&self, token: &str) -> DomResult<()>;

	/// Toggles a single class token, returning whether it is now present.
	fn toggle_class(&self, token: &str) -> DomResult<bool>;
}

/// The mutation applied to each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassVerb {
	/// `classList.add`
	Add,
	/// `classList.remove`
	Remove,
	/// `classList.toggle`
	Toggle,
}

impl ClassVerb {
	fn apply<L: ClassList + ?Sized>(self, list: &L, token: &str) -> DomResult<()> {
		match self {
			Self::Add => list.add_class(token),
			Self::Remove => list.remove_class(token),
			Self::Toggle => list.toggle_class(token).map(|_| ()),
		}
	}
}

/// Splits a class spec into its non-empty tokens.
pub fn class_tokens(spec: &str) -> impl Iterator<Item = &str> {
	spec.split_whitespace()
}

/// Returns a function applying `verb` to every token of a class spec.
///
/// A `None`, empty or whitespace-only spec leaves the list untouched.
pub fn class_list_mutator<L: ClassList + ?Sized>(
	verb: ClassVerb,
) -> impl Fn(&L, Option<&str>) -> DomResult<()> {
	move |list, spec| {
		let Some(spec) = spec else {
			return Ok(());
		};
		for token in class_tokens(spec) {
			verb.apply(list, token)?;
		}
		Ok(())
	}
}

/// Adds every class in `spec` to `list`.
pub fn add_classes<L: ClassList + ?Sized>(list: &L, spec: Option<&str>) -> DomResult<()> {
	class_list_mutator(ClassVerb::Add)(list, spec)
}

/// Removes every class in `spec` from `list`.
pub fn remove_classes<L: ClassList + ?Sized>(list: &L, spec: Option<&str>) -> DomResult<()> {
	class_list_mutator(ClassVerb::Remove)(list, spec)
}

/// Toggles every class in `spec` on `list`.
pub fn toggle_classes<L: ClassList + ?Sized>(list: &L, spec: Option<&str>) -> DomResult<()> {
	class_list_mutator(ClassVerb::Toggle)(list, spec)
}

#[cfg(target_arch = "wasm32")]
impl ClassList for web_sys::DomTokenList {
	fn add_class(&self, token: &str) -> DomResult<()> {
		self.add_1(token)?;
		Ok(())
	}

	fn remove_class(&self, token: &str) -> DomResult<()> {
		self.remove_1(token)?;
		Ok(())
	}

	fn toggle_class(&self, token: &str) -> DomResult<bool> {
		Ok(self.toggle(token)?)
	}
}
