//! Wire encoding of [`Params`] maps.

use crate::{ParamValue, Params};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in keys and values: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`. Structural brackets around nested
/// keys are inserted by the encoder itself and are never escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Percent-encodes a single key or value component.
///
/// # Examples
///
/// ```
/// use cardtoken_params::encode_component;
///
/// assert_eq!(encode_component("a b"), "a%20b");
/// assert_eq!(encode_component("x=y&z"), "x%3Dy%26z");
/// assert_eq!(encode_component("card[number]"), "card%5Bnumber%5D");
/// assert_eq!(encode_component("safe-_.!~*'()"), "safe-_.!~*'()");
/// ```
pub fn encode_component(input: &str) -> String {
	utf8_percent_encode(input, COMPONENT).to_string()
}

impl Params {
	/// Encodes the map into a single `application/x-www-form-urlencoded`
	/// body with bracket-nested keys.
	///
	/// Segment rules, applied per entry in insertion order:
	///
	/// - nested map: recurse with the current (already encoded) key as the
	///   parent; an empty result contributes nothing
	/// - list: one `key=value` segment per element, in sequence order
	/// - scalar: a single `key=value` segment
	/// - null: the bare key, signalling "present but empty"
	///
	/// Segments are joined with `&`; there is never a leading, trailing, or
	/// doubled separator.
	///
	/// # Examples
	///
	/// ```
	/// use cardtoken_params::Params;
	///
	/// let mut card = Params::new();
	/// card.insert("number", "4242424242424242");
	/// card.insert("cvc", Option::<String>::None);
	///
	/// let mut payload = Params::new();
	/// payload.insert("key", "pk_test_abc");
	/// payload.insert("card", card);
	///
	/// assert_eq!(
	///     payload.to_query_string(),
	///     "key=pk_test_abc&card[number]=4242424242424242&card[cvc]"
	/// );
	/// ```
	pub fn to_query_string(&self) -> String {
		encode_nested(self, None)
	}
}

fn encode_nested(params: &Params, parent: Option<&str>) -> String {
	let mut segments: Vec<String> = Vec::new();

	for (key, value) in params.iter() {
		let key = encode_component(key);
		let key = match parent {
			Some(parent) => format!("{}[{}]", parent, key),
			None => key,
		};

		match value {
			ParamValue::Map(nested) => {
				let encoded = encode_nested(nested, Some(&key));
				// An empty branch must not leave a stray separator behind
				if !encoded.is_empty() {
					segments.push(encoded);
				}
			}
			ParamValue::List(items) => {
				for item in items {
					segments.push(format!("{}={}", key, encode_component(item)));
				}
			}
			ParamValue::Scalar(value) => {
				segments.push(format!("{}={}", key, encode_component(value)));
			}
			ParamValue::Null => segments.push(key),
		}
	}

	segments.join("&")
}
