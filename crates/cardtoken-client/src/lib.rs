//! Token request orchestration for the card widget.
//!
//! This crate drives the end-to-end exchange of card details for an opaque
//! payment token:
//! - snapshot the form through the [`cardtoken_form::CardForm`] contract
//! - encode the payload with [`cardtoken_params`]
//! - POST it to the tokenization endpoint over a pluggable transport
//! - classify the outcome into a closed set of [`TokenError`] kinds and
//!   route messages to the most specific display location
//!
//! The observable request lifecycle (`token`, `loading`, `error`) lives in
//! a single [`TokenRequestState`] owned by the [`TokenClient`].

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod state;
pub mod token;
pub mod transport;

pub use client::TokenClient;
pub use config::{DEFAULT_API_VERSION, DEFAULT_ENDPOINT, TokenizerConfig, VERSION_HEADER};
pub use display::{ErrorDisplay, FieldMessage, display_plan};
pub use error::{CARD_ERROR_KIND, TokenError, TokenResult};
pub use state::TokenRequestState;
pub use token::{Token, TokenCard};
pub use transport::{HttpTokenTransport, RawResponse, TokenTransport, TransportError};
