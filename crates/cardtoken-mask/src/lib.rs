//! Caret-preserving input masking for card number fields.
//!
//! Long digit sequences are easier to read in groups of four. This crate
//! reformats a field's displayed text into such groups while keeping the
//! user's caret where they expect it, as a pure string transform: the
//! embedding layer reads the field, calls [`mask_digits`], and writes the
//! returned text and caret back to the input control. Nothing here depends
//! on a rendering surface.

pub mod mask;

pub use mask::{DEFAULT_MASK_CHAR, GROUP_LEN, MaskedInput, mask_digits};
