//! Shared helpers for cardtoken integration tests.

use cardtoken::prelude::*;

/// A card form filled with the standard test card.
pub fn filled_card_form() -> MemoryCardForm {
	let mut form = MemoryCardForm::card_default();
	form.set_value(field_names::NUMBER, "4242424242424242");
	form.set_value(field_names::EXP_MONTH, "12");
	form.set_value(field_names::EXP_YEAR, "30");
	form.set_value(field_names::CVC, "123");
	form.set_value(field_names::ADDRESS_ZIP, "90210");
	form
}
