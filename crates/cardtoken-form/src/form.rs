//! The form collaborator trait.

use crate::fields::FieldHandle;
use cardtoken_params::Params;

/// Contract between the widget core and whatever renders the card form.
///
/// The orchestrator drives exactly this surface during a token request:
/// `validate` gates the network call, `serialize` snapshots the current
/// field values, `find_field_mut` lets an endpoint-attributed error mark the
/// offending field, and `reset` returns the form to its untouched state.
pub trait CardForm: Send {
	/// Runs client-side validation, marking offending fields as a side
	/// effect, and reports the overall verdict.
	fn validate(&mut self) -> bool;

	/// Snapshots the current field values in declaration order. Fields that
	/// are present but empty serialize as [`cardtoken_params::ParamValue::Null`].
	fn serialize(&self) -> Params;

	/// Clears values, invalid flags, and field-level messages.
	fn reset(&mut self);

	/// Names of the fields this form carries, in declaration order.
	fn field_names(&self) -> Vec<String>;

	/// Looks up a field by name for error marking.
	fn find_field_mut(&mut self, name: &str) -> Option<&mut dyn FieldHandle>;
}
