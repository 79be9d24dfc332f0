//! Error types for token requests.

use thiserror::Error;

/// `error.type` value the endpoint uses for card-attributed failures.
pub const CARD_ERROR_KIND: &str = "card_error";

/// Classified failure of a token request.
///
/// The first three variants are produced locally; endpoint-declared kinds
/// are echoed verbatim in [`TokenError::Endpoint`]. Details are carried as
/// formatted strings so the error stays `Clone` and can live in the
/// observable request state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
	/// Client-side validation failed; the endpoint was never contacted
	#[error("Form validation failed")]
	FormValidation,

	/// No response was received from the endpoint
	#[error("Connection to tokenization endpoint failed: {detail}")]
	ApiConnection {
		/// Underlying transport error, formatted
		detail: String,
	},

	/// The endpoint answered with neither a token nor a recognizable
	/// error object
	#[error("{message}")]
	Api {
		/// Human-readable description
		message: String,
	},

	/// Structured error declared by the endpoint
	#[error("{message}")]
	Endpoint {
		/// The endpoint's `error.type`, e.g. `card_error`
		kind: String,
		/// The endpoint's message, verbatim
		message: String,
		/// Field the endpoint attributes the failure to, if any
		param: Option<String>,
	},
}

impl TokenError {
	/// The unrecognizable-response error.
	pub fn unknown() -> Self {
		TokenError::Api {
			message: "Unknown error".to_string(),
		}
	}

	/// Stable kind tag for this error, mirroring the endpoint's `type`
	/// vocabulary for local failures.
	pub fn kind(&self) -> &str {
		match self {
			TokenError::FormValidation => "form_validation",
			TokenError::ApiConnection { .. } => "api_connection_error",
			TokenError::Api { .. } => "api_error",
			TokenError::Endpoint { kind, .. } => kind,
		}
	}

	/// Field the failure is attributed to, if the endpoint named one.
	pub fn param(&self) -> Option<&str> {
		match self {
			TokenError::Endpoint { param, .. } => param.as_deref(),
			_ => None,
		}
	}

	/// True for endpoint-declared card errors.
	pub fn is_card_error(&self) -> bool {
		self.kind() == CARD_ERROR_KIND
	}
}

pub type TokenResult<T> = Result<T, TokenError>;
