//! Insertion-ordered field map.

use crate::ParamValue;
use indexmap::IndexMap;

/// An ordered mapping from field name to [`ParamValue`].
///
/// Keys are unique within one map; inserting an existing key replaces its
/// value in place without disturbing the original position. Iteration order
/// is insertion order, which the encoder preserves segment for segment.
///
/// A `Params` map is the snapshot of a form's current values captured at
/// submission time; it is not mutated once handed to the encoder.
///
/// # Examples
///
/// ```
/// use cardtoken_params::{ParamValue, Params};
///
/// let mut card = Params::new();
/// card.insert("number", "4242424242424242");
/// card.insert("exp_month", 12);
/// card.insert("cvc", ParamValue::Null);
///
/// assert_eq!(card.len(), 3);
/// assert_eq!(
///     card.get("number").and_then(|v| v.as_scalar()),
///     Some("4242424242424242")
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
	inner: IndexMap<String, ParamValue>,
}

impl Params {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self {
			inner: IndexMap::new(),
		}
	}

	/// Inserts a value under `key`, returning the previous value if the key
	/// was already present.
	pub fn insert(
		&mut self,
		key: impl Into<String>,
		value: impl Into<ParamValue>,
	) -> Option<ParamValue> {
		self.inner.insert(key.into(), value.into())
	}

	/// Looks up a value by key.
	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.inner.get(key)
	}

	/// Returns true if `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns true if the map holds no entries.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Iterates entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.inner.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterates keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Params::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}
