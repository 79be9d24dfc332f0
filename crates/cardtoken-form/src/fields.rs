//! Field handles and the standard card field names.

/// Names of the fields a card form is expected to carry.
///
/// These match the parameter names the tokenization endpoint reads from the
/// `card` map; a form may omit `address_zip` when it does not collect it.
pub mod field_names {
	/// Card number
	pub const NUMBER: &str = "number";
	/// Expiration month (1-12)
	pub const EXP_MONTH: &str = "exp_month";
	/// Expiration year
	pub const EXP_YEAR: &str = "exp_year";
	/// CVC/CVV code
	pub const CVC: &str = "cvc";
	/// Billing ZIP/postal code
	pub const ADDRESS_ZIP: &str = "address_zip";
}

/// A single form field as seen by the widget core: something that can be
/// flagged invalid and carry a field-level error message.
pub trait FieldHandle {
	/// Field name, as used in the serialized map
	fn name(&self) -> &str;

	/// Set or clear the invalid flag
	fn set_invalid(&mut self, invalid: bool);

	/// Current invalid flag
	fn is_invalid(&self) -> bool;

	/// Attach or clear a field-level error message
	fn set_error_message(&mut self, message: Option<String>);

	/// Current field-level error message
	fn error_message(&self) -> Option<&str>;
}
