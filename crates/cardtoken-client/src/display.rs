//! Error-display dispatch.

use crate::error::{CARD_ERROR_KIND, TokenError};
use cardtoken_form::field_names;

/// A field to mark invalid, with an optional message to attach to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
	/// Field name
	pub name: String,
	/// Message riding on the field instead of the shared display
	pub message: Option<String>,
}

/// Routing decision for one error: which field to mark, and what lands in
/// the shared form-level display. Both slots may be empty only for errors
/// that carry no message at all, which does not occur in practice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
	/// Field to mark invalid
	pub field: Option<FieldMessage>,
	/// Message for the shared form-level display
	pub shared: Option<String>,
}

/// Routes an error to the most specific display location.
///
/// Card-attributed endpoint errors naming a known field mark that field
/// invalid. When the named field is the card number, the message rides on
/// the field itself and the shared display stays empty; for any other named
/// field the mark is silent and the message lands in the shared display.
/// Every other failure goes entirely to the shared display. The underlying
/// classification is never altered, only routed.
///
/// Pure: depends only on the error and the set of known field names, so the
/// rule is testable without a live form.
///
/// # Examples
///
/// ```
/// use cardtoken_client::{TokenError, display_plan};
///
/// let error = TokenError::Endpoint {
///     kind: "card_error".to_string(),
///     message: "Your card number is invalid.".to_string(),
///     param: Some("number".to_string()),
/// };
/// let known = vec!["number".to_string(), "cvc".to_string()];
///
/// let plan = display_plan(&error, &known);
/// let field = plan.field.unwrap();
/// assert_eq!(field.name, "number");
/// assert_eq!(field.message.as_deref(), Some("Your card number is invalid."));
/// assert!(plan.shared.is_none());
/// ```
pub fn display_plan(error: &TokenError, known_fields: &[String]) -> ErrorDisplay {
	if let TokenError::Endpoint {
		kind,
		message,
		param: Some(param),
	} = error && kind == CARD_ERROR_KIND
		&& known_fields.iter().any(|name| name == param)
	{
		if param == field_names::NUMBER {
			return ErrorDisplay {
				field: Some(FieldMessage {
					name: param.clone(),
					message: Some(message.clone()),
				}),
				shared: None,
			};
		}
		return ErrorDisplay {
			field: Some(FieldMessage {
				name: param.clone(),
				message: None,
			}),
			shared: Some(message.clone()),
		};
	}

	ErrorDisplay {
		field: None,
		shared: Some(error.to_string()),
	}
}
