//! Tagged values for card form parameters.

use crate::Params;

/// A single value in a [`Params`] map.
///
/// The tokenization endpoint understands four value shapes: plain scalars,
/// "present but empty" fields, ordered sequences of scalars, and nested
/// maps. Numbers are canonicalized to their decimal string form at
/// construction time since the wire format carries text only.
///
/// # Examples
///
/// ```
/// use cardtoken_params::ParamValue;
///
/// let scalar: ParamValue = "4242424242424242".into();
/// assert_eq!(scalar, ParamValue::Scalar("4242424242424242".to_string()));
///
/// let number: ParamValue = 12.into();
/// assert_eq!(number, ParamValue::Scalar("12".to_string()));
///
/// let absent: ParamValue = Option::<String>::None.into();
/// assert!(absent.is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
	/// Plain scalar, already in wire form
	Scalar(String),
	/// Field present with no value; encodes as a bare key
	Null,
	/// Ordered sequence of scalars; encodes as one segment per element
	List(Vec<String>),
	/// Nested parameter map; encodes with bracket keys
	Map(Params),
}

impl ParamValue {
	/// Returns true for the "present but empty" marker.
	pub fn is_null(&self) -> bool {
		matches!(self, ParamValue::Null)
	}

	/// Returns the scalar text, if this value is a scalar.
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			ParamValue::Scalar(value) => Some(value),
			_ => None,
		}
	}

	/// Returns the nested map, if this value is one.
	pub fn as_map(&self) -> Option<&Params> {
		match self {
			ParamValue::Map(params) => Some(params),
			_ => None,
		}
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Scalar(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Scalar(value)
	}
}

impl From<Params> for ParamValue {
	fn from(params: Params) -> Self {
		ParamValue::Map(params)
	}
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => ParamValue::Null,
		}
	}
}

impl From<Vec<String>> for ParamValue {
	fn from(items: Vec<String>) -> Self {
		ParamValue::List(items)
	}
}

impl From<Vec<&str>> for ParamValue {
	fn from(items: Vec<&str>) -> Self {
		ParamValue::List(items.into_iter().map(str::to_string).collect())
	}
}

macro_rules! scalar_from_integer {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for ParamValue {
				fn from(value: $ty) -> Self {
					ParamValue::Scalar(value.to_string())
				}
			}
		)*
	};
}

scalar_from_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_scalar_from_str_and_string() {
		assert_eq!(
			ParamValue::from("cvc"),
			ParamValue::Scalar("cvc".to_string())
		);
		assert_eq!(
			ParamValue::from("123".to_string()),
			ParamValue::Scalar("123".to_string())
		);
	}

	#[test]
	fn test_scalar_from_integers() {
		assert_eq!(ParamValue::from(7u8), ParamValue::Scalar("7".to_string()));
		assert_eq!(
			ParamValue::from(2030i32),
			ParamValue::Scalar("2030".to_string())
		);
		assert_eq!(
			ParamValue::from(-1i64),
			ParamValue::Scalar("-1".to_string())
		);
	}

	#[test]
	fn test_option_maps_none_to_null() {
		assert!(ParamValue::from(Option::<&str>::None).is_null());
		assert_eq!(
			ParamValue::from(Some("90210")),
			ParamValue::Scalar("90210".to_string())
		);
	}

	#[test]
	fn test_accessors() {
		let value = ParamValue::from("abc");
		assert_eq!(value.as_scalar(), Some("abc"));
		assert!(value.as_map().is_none());

		let nested = ParamValue::from(Params::new());
		assert!(nested.as_map().is_some());
		assert!(nested.as_scalar().is_none());
	}
}
