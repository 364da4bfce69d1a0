//! Root style properties
//!
//! Writes CSS custom properties (`--name`) onto the inline style of the
//! document root element, which is how theme values reach every stylesheet.

use crate::error::DomResult;
use crate::host::DomHost;

/// Sets each `(name, value)` pair on the root element's inline style.
///
/// Pairs are applied in iteration order. An empty mapping does nothing.
pub fn set_root_style_properties<H, I, K, V>(host: &H, properties: I) -> DomResult<()>
where
	H: DomHost + ?Sized,
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	for (name, value) in properties {
		host.set_root_style_property(name.as_ref(), value.as_ref())?;
	}
	Ok(())
}

/// Removes each named property from the root element's inline style.
pub fn remove_root_style_properties<H, I, K>(host: &H, names: I) -> DomResult<()>
where
	H: DomHost + ?Sized,
	I: IntoIterator<Item = K>,
	K: AsRef<str>,
{
	for name in names {
		host.remove_root_style_property(name.as_ref())?;
	}
	Ok(())
}
