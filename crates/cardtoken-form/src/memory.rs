//! In-memory card form for headless embedders and tests.

use crate::fields::{FieldHandle, field_names};
use crate::form::CardForm;
use cardtoken_params::{ParamValue, Params};

/// Validation message attached to empty required fields.
const REQUIRED_MESSAGE: &str = "This field is required.";

/// One field of a [`MemoryCardForm`].
#[derive(Debug, Clone)]
pub struct MemoryField {
	pub name: String,
	pub required: bool,
	pub value: Option<String>,
	pub invalid: bool,
	pub error_message: Option<String>,
}

impl MemoryField {
	/// Creates an empty field.
	pub fn new(name: impl Into<String>, required: bool) -> Self {
		Self {
			name: name.into(),
			required,
			value: None,
			invalid: false,
			error_message: None,
		}
	}

	fn is_filled(&self) -> bool {
		self.value.as_deref().is_some_and(|value| !value.is_empty())
	}
}

impl FieldHandle for MemoryField {
	fn name(&self) -> &str {
		&self.name
	}

	fn set_invalid(&mut self, invalid: bool) {
		self.invalid = invalid;
	}

	fn is_invalid(&self) -> bool {
		self.invalid
	}

	fn set_error_message(&mut self, message: Option<String>) {
		self.error_message = message;
	}

	fn error_message(&self) -> Option<&str> {
		self.error_message.as_deref()
	}
}

/// A [`CardForm`] backed by plain memory.
///
/// Carries the standard card field set by default; embedders that render
/// their own inputs can mirror values into it, and tests drive the
/// orchestrator with it directly.
///
/// # Examples
///
/// ```
/// use cardtoken_form::{CardForm, MemoryCardForm, field_names};
///
/// let mut form = MemoryCardForm::card_default();
/// form.set_value(field_names::NUMBER, "4242424242424242");
/// form.set_value(field_names::EXP_MONTH, "12");
/// form.set_value(field_names::EXP_YEAR, "30");
/// form.set_value(field_names::CVC, "123");
///
/// assert!(form.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCardForm {
	fields: Vec<MemoryField>,
}

impl MemoryCardForm {
	/// Creates a form with no fields.
	pub fn new() -> Self {
		Self { fields: Vec::new() }
	}

	/// Creates the standard card form: number, expiration, and CVC are
	/// required; the billing ZIP is optional.
	pub fn card_default() -> Self {
		Self::new()
			.with_field(field_names::NUMBER, true)
			.with_field(field_names::EXP_MONTH, true)
			.with_field(field_names::EXP_YEAR, true)
			.with_field(field_names::CVC, true)
			.with_field(field_names::ADDRESS_ZIP, false)
	}

	/// Drops the ZIP field, for embedders that do not collect it.
	pub fn without_zip(mut self) -> Self {
		self.fields
			.retain(|field| field.name != field_names::ADDRESS_ZIP);
		self
	}

	/// Appends a field.
	pub fn with_field(mut self, name: impl Into<String>, required: bool) -> Self {
		self.fields.push(MemoryField::new(name, required));
		self
	}

	/// Sets a field's value. Returns false if the field does not exist.
	pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
		match self.fields.iter_mut().find(|field| field.name == name) {
			Some(field) => {
				field.value = Some(value.into());
				true
			}
			None => false,
		}
	}

	/// Read access to a field.
	pub fn field(&self, name: &str) -> Option<&MemoryField> {
		self.fields.iter().find(|field| field.name == name)
	}
}

impl CardForm for MemoryCardForm {
	fn validate(&mut self) -> bool {
		let mut valid = true;
		for field in &mut self.fields {
			if field.required && !field.is_filled() {
				field.invalid = true;
				field.error_message = Some(REQUIRED_MESSAGE.to_string());
				valid = false;
			} else {
				field.invalid = false;
				field.error_message = None;
			}
		}
		valid
	}

	fn serialize(&self) -> Params {
		let mut params = Params::new();
		for field in &self.fields {
			match &field.value {
				Some(value) if !value.is_empty() => {
					params.insert(field.name.clone(), value.clone());
				}
				_ => {
					params.insert(field.name.clone(), ParamValue::Null);
				}
			}
		}
		params
	}

	fn reset(&mut self) {
		for field in &mut self.fields {
			field.value = None;
			field.invalid = false;
			field.error_message = None;
		}
	}

	fn field_names(&self) -> Vec<String> {
		self.fields.iter().map(|field| field.name.clone()).collect()
	}

	fn find_field_mut(&mut self, name: &str) -> Option<&mut dyn FieldHandle> {
		self.fields
			.iter_mut()
			.find(|field| field.name == name)
			.map(|field| field as &mut dyn FieldHandle)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_card_form() -> MemoryCardForm {
		let mut form = MemoryCardForm::card_default();
		form.set_value(field_names::NUMBER, "4242424242424242");
		form.set_value(field_names::EXP_MONTH, "12");
		form.set_value(field_names::EXP_YEAR, "30");
		form.set_value(field_names::CVC, "123");
		form
	}

	#[test]
	fn test_validate_passes_with_required_fields_filled() {
		let mut form = filled_card_form();
		assert!(form.validate());
		assert!(!form.field(field_names::NUMBER).unwrap().invalid);
	}

	#[test]
	fn test_validate_marks_empty_required_fields() {
		let mut form = MemoryCardForm::card_default();
		form.set_value(field_names::NUMBER, "4242424242424242");

		assert!(!form.validate());
		let cvc = form.field(field_names::CVC).unwrap();
		assert!(cvc.invalid);
		assert_eq!(cvc.error_message.as_deref(), Some(REQUIRED_MESSAGE));
		// The optional zip stays untouched
		assert!(!form.field(field_names::ADDRESS_ZIP).unwrap().invalid);
	}

	#[test]
	fn test_validate_clears_stale_marks() {
		let mut form = MemoryCardForm::card_default();
		assert!(!form.validate());
		assert!(form.field(field_names::NUMBER).unwrap().invalid);

		form.set_value(field_names::NUMBER, "4242424242424242");
		form.set_value(field_names::EXP_MONTH, "12");
		form.set_value(field_names::EXP_YEAR, "30");
		form.set_value(field_names::CVC, "123");

		assert!(form.validate());
		assert!(!form.field(field_names::NUMBER).unwrap().invalid);
		assert!(
			form.field(field_names::NUMBER)
				.unwrap()
				.error_message
				.is_none()
		);
	}

	#[test]
	fn test_serialize_emits_null_for_empty_fields() {
		let mut form = MemoryCardForm::card_default();
		form.set_value(field_names::NUMBER, "4242424242424242");

		let params = form.serialize();
		let keys: Vec<&str> = params.keys().collect();
		assert_eq!(
			keys,
			vec!["number", "exp_month", "exp_year", "cvc", "address_zip"]
		);
		assert_eq!(
			params.get(field_names::NUMBER).and_then(|v| v.as_scalar()),
			Some("4242424242424242")
		);
		assert!(params.get(field_names::CVC).unwrap().is_null());
	}

	#[test]
	fn test_reset_clears_values_and_marks() {
		let mut form = MemoryCardForm::card_default();
		assert!(!form.validate());
		form.set_value(field_names::NUMBER, "4242424242424242");

		form.reset();
		assert!(form.field(field_names::NUMBER).unwrap().value.is_none());
		assert!(!form.field(field_names::CVC).unwrap().invalid);
		assert!(
			form.field(field_names::CVC)
				.unwrap()
				.error_message
				.is_none()
		);
	}

	#[test]
	fn test_without_zip_drops_the_field() {
		let form = MemoryCardForm::card_default().without_zip();
		assert!(form.field(field_names::ADDRESS_ZIP).is_none());
		assert_eq!(form.field_names().len(), 4);
	}

	#[test]
	fn test_find_field_mut_marks_through_handle() {
		let mut form = MemoryCardForm::card_default();
		{
			let handle = form.find_field_mut(field_names::NUMBER).unwrap();
			handle.set_invalid(true);
			handle.set_error_message(Some("Your card number is invalid.".to_string()));
		}
		let number = form.field(field_names::NUMBER).unwrap();
		assert!(number.invalid);
		assert_eq!(
			number.error_message.as_deref(),
			Some("Your card number is invalid.")
		);
		assert!(form.find_field_mut("missing").is_none());
	}
}
