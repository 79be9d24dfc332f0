//! The masking transform.

/// Mask character used when the embedder does not configure one.
pub const DEFAULT_MASK_CHAR: char = ' ';

/// Digits per block.
pub const GROUP_LEN: usize = 4;

/// Result of one masking pass: the regrouped text and the caret offset the
/// embedding layer should restore, both in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedInput {
	/// Regrouped display text
	pub value: String,
	/// Caret offset into `value`
	pub caret: usize,
}

/// Reformats `value` into blocks of [`GROUP_LEN`] digits joined by exactly
/// one `mask_char`, preserving the caret position.
///
/// `value` is the field's current displayed text (it may already contain
/// mask characters from a previous pass) and `caret` the current caret
/// offset within it. Rules:
///
/// 1. An empty `value` is returned unchanged; an empty field is never
///    masked.
/// 2. All mask characters are stripped, and the remaining characters are
///    regrouped into blocks of four; the final block may be shorter.
/// 3. The caret is clamped to the new text, then advanced by one position
///    iff the character now immediately before it is a mask character that
///    was not there before the pass. This keeps the caret in front of the
///    digit the user just typed when a new separator appears under it;
///    deleting near a separator never moves the caret forward.
///
/// Stripping every mask character from the result always yields exactly the
/// non-mask characters of `value`, in order.
///
/// # Examples
///
/// ```
/// use cardtoken_mask::{DEFAULT_MASK_CHAR, MaskedInput, mask_digits};
///
/// let masked = mask_digits("4242424242424242", 16, DEFAULT_MASK_CHAR);
/// assert_eq!(masked.value, "4242 4242 4242 4242");
///
/// // Typing the fifth digit introduces a separator under the caret; the
/// // caret hops over it so it stays after the digit just typed.
/// let masked = mask_digits("42424", 5, DEFAULT_MASK_CHAR);
/// assert_eq!(masked, MaskedInput { value: "4242 4".to_string(), caret: 6 });
/// ```
pub fn mask_digits(value: &str, caret: usize, mask_char: char) -> MaskedInput {
	// Bail if empty
	if value.is_empty() {
		return MaskedInput {
			value: String::new(),
			caret,
		};
	}

	let previous_char_was_mask = caret
		.checked_sub(1)
		.and_then(|offset| value.chars().nth(offset))
		.is_some_and(|c| c == mask_char);

	let digits: Vec<char> = value.chars().filter(|c| *c != mask_char).collect();

	let mut grouped = String::with_capacity(digits.len() + digits.len() / GROUP_LEN);
	for (offset, c) in digits.iter().enumerate() {
		if offset > 0 && offset % GROUP_LEN == 0 {
			grouped.push(mask_char);
		}
		grouped.push(*c);
	}

	let mut caret = caret.min(grouped.chars().count());
	// If the character right before the caret is a newly inserted mask
	// character, advance the caret to keep it from visually jumping
	// backward across the separator.
	if !previous_char_was_mask
		&& caret > 0
		&& grouped.chars().nth(caret - 1) == Some(mask_char)
	{
		caret += 1;
	}

	MaskedInput {
		value: grouped,
		caret,
	}
}
