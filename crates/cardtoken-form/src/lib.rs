//! Form collaborator contract for the card widget.
//!
//! The widget core never renders anything; it talks to whatever holds the
//! input fields through the [`CardForm`] trait: validate the current values,
//! snapshot them into a [`cardtoken_params::Params`] map, reset them, and
//! mark an individual field invalid with a message. Embedders back the trait
//! with their UI toolkit of choice; [`MemoryCardForm`] is a plain in-memory
//! implementation for headless embedders and tests.

pub mod fields;
pub mod form;
pub mod memory;

pub use fields::{FieldHandle, field_names};
pub use form::CardForm;
pub use memory::{MemoryCardForm, MemoryField};
