//! # cardtoken
//!
//! Embeddable payment-card tokenization widget core.
//!
//! cardtoken takes raw card input and exchanges it for an opaque payment
//! token, so the embedding application's server never handles raw card
//! numbers. The widget core is UI-toolkit agnostic: rendering, styling, and
//! event plumbing stay with the embedder, which talks to the core through a
//! small form contract.
//!
//! ## Pieces
//!
//! - **Masking** ([`mask`]): groups a card number into blocks of four while
//!   preserving the caret, as a pure string transform
//! - **Parameter encoding** ([`params`]): bracket-nested
//!   `application/x-www-form-urlencoded` payloads from an ordered field map
//! - **Form contract** ([`form`]): validate/serialize/reset and field-level
//!   error marking, with an in-memory implementation
//! - **Token client** ([`client`]): the request lifecycle
//!   (`Idle → Loading → Succeeded | Failed`), failure classification, and
//!   error-display routing
//!
//! ## Feature Flags
//!
//! - `client` (default) - token request orchestrator and HTTP transport
//! - `mocks` - mock transport for tests and offline development
//! - `full` - everything
//!
//! ## Quick Example
//!
//! ```rust,no_run
//! use cardtoken::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Keep the displayed card number readable while the user types
//! let masked = mask_digits("4242424242424242", 16, DEFAULT_MASK_CHAR);
//! assert_eq!(masked.value, "4242 4242 4242 4242");
//!
//! // Collect values and exchange them for a token
//! let mut form = MemoryCardForm::card_default();
//! form.set_value(field_names::NUMBER, "4242424242424242");
//! form.set_value(field_names::EXP_MONTH, "12");
//! form.set_value(field_names::EXP_YEAR, "30");
//! form.set_value(field_names::CVC, "123");
//!
//! let client = TokenClient::new(
//!     TokenizerConfig::new("pk_test_abc").with_referrer("https://shop.example/pay"),
//! )?;
//! let token = client.create_token(&mut form).await?;
//! println!("tokenized as {}", token.id);
//! # Ok(())
//! # }
//! ```

pub use cardtoken_form as form;
pub use cardtoken_mask as mask;
pub use cardtoken_params as params;

#[cfg(feature = "client")]
pub use cardtoken_client as client;

#[cfg(feature = "mocks")]
pub use cardtoken_mocks as mocks;

/// Commonly used items.
pub mod prelude {
	pub use crate::form::{CardForm, FieldHandle, MemoryCardForm, field_names};
	pub use crate::mask::{DEFAULT_MASK_CHAR, GROUP_LEN, MaskedInput, mask_digits};
	pub use crate::params::{ParamValue, Params};

	#[cfg(feature = "client")]
	pub use crate::client::{
		Token, TokenClient, TokenError, TokenRequestState, TokenResult, TokenizerConfig,
		display_plan,
	};

	#[cfg(feature = "mocks")]
	pub use crate::mocks::MockTokenTransport;
}
