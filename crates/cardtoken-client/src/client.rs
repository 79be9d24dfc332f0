//! Token request orchestrator.

use crate::config::{TokenizerConfig, VERSION_HEADER};
use crate::display::display_plan;
use crate::error::{TokenError, TokenResult};
use crate::state::TokenRequestState;
use crate::token::Token;
use crate::transport::{HttpTokenTransport, TokenTransport, TransportError};
use cardtoken_form::CardForm;
use cardtoken_params::Params;
use parking_lot::RwLock;
use serde::Deserialize;
use std::sync::Arc;

/// Envelope the endpoint answers with: either a token object or a
/// structured error. Anything else classifies as an unknown API error.
/// A body carrying both an `id` and an `error` counts as a token.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EndpointResponse {
	Token(Token),
	Error { error: EndpointError },
}

#[derive(Debug, Deserialize)]
struct EndpointError {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	message: String,
	#[serde(default)]
	param: Option<String>,
}

/// Drives the end-to-end token request flow: validate the form, build and
/// encode the payload, call the tokenization endpoint, classify the
/// outcome, and keep the observable request state consistent.
///
/// One logical request is in flight at a time from the caller's
/// perspective; callers await settlement before submitting again. The
/// remote call is the only suspension point. No retries are performed and
/// no timeout is added beyond the transport's own.
///
/// # Examples
///
/// ```rust,no_run
/// use cardtoken_client::{TokenClient, TokenizerConfig};
/// use cardtoken_form::{MemoryCardForm, field_names};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TokenClient::new(
///     TokenizerConfig::new("pk_test_abc").with_referrer("https://shop.example/pay"),
/// )?;
///
/// let mut form = MemoryCardForm::card_default();
/// form.set_value(field_names::NUMBER, "4242424242424242");
/// form.set_value(field_names::EXP_MONTH, "12");
/// form.set_value(field_names::EXP_YEAR, "30");
/// form.set_value(field_names::CVC, "123");
///
/// let token = client.create_token(&mut form).await?;
/// println!("tokenized as {}", token.id);
/// # Ok(())
/// # }
/// ```
pub struct TokenClient {
	config: TokenizerConfig,
	transport: Arc<dyn TokenTransport>,
	state: RwLock<TokenRequestState>,
	token: RwLock<Option<Token>>,
	shared_error: RwLock<Option<String>>,
}

impl TokenClient {
	/// Creates a client over the default reqwest transport.
	pub fn new(config: TokenizerConfig) -> Result<Self, TransportError> {
		Ok(Self::with_transport(
			config,
			Arc::new(HttpTokenTransport::new()?),
		))
	}

	/// Creates a client over a caller-supplied transport.
	pub fn with_transport(config: TokenizerConfig, transport: Arc<dyn TokenTransport>) -> Self {
		Self {
			config,
			transport,
			state: RwLock::new(TokenRequestState::Idle),
			token: RwLock::new(None),
			shared_error: RwLock::new(None),
		}
	}

	/// The configuration this client was built with.
	pub fn config(&self) -> &TokenizerConfig {
		&self.config
	}

	/// Current request state.
	pub fn state(&self) -> TokenRequestState {
		self.state.read().clone()
	}

	/// True while a request is in flight. Always false by the time a
	/// `create_token` future has settled.
	pub fn loading(&self) -> bool {
		self.state.read().is_loading()
	}

	/// Last successful token, until `reset` clears it.
	pub fn token(&self) -> Option<Token> {
		self.token.read().clone()
	}

	/// Current shared form-level error message.
	pub fn error(&self) -> Option<String> {
		self.shared_error.read().clone()
	}

	/// Requests a token for the form's current values.
	///
	/// Every failure is classified into a [`TokenError`], reflected into
	/// the observable state (and the offending field, when the endpoint
	/// names one), and returned; nothing is swallowed.
	pub async fn create_token(&self, form: &mut dyn CardForm) -> TokenResult<Token> {
		self.begin();
		tracing::debug!(endpoint = %self.config.endpoint, "requesting card token");

		// Client-side validation gates the network call
		if !form.validate() {
			return Err(self.fail(form, TokenError::FormValidation));
		}

		let payload = self.build_payload(form.serialize());
		let body = payload.to_query_string();
		let headers = [
			("Content-Type", "application/x-www-form-urlencoded"),
			("Accept", "application/json"),
			(VERSION_HEADER, self.config.api_version.as_str()),
		];

		let response = match self
			.transport
			.post_form(&self.config.endpoint, body, &headers)
			.await
		{
			Ok(response) => response,
			Err(error) => {
				return Err(self.fail(
					form,
					TokenError::ApiConnection {
						detail: error.to_string(),
					},
				));
			}
		};

		// The endpoint encodes failure in the body, not the status line
		match serde_json::from_str::<EndpointResponse>(&response.body) {
			Ok(EndpointResponse::Token(token)) => Ok(self.succeed(token)),
			Ok(EndpointResponse::Error { error }) => Err(self.fail(
				form,
				TokenError::Endpoint {
					kind: error.kind,
					message: error.message,
					param: error.param,
				},
			)),
			Err(_) => Err(self.fail(form, TokenError::unknown())),
		}
	}

	/// Applies the display dispatch rule for `error` to a live form and the
	/// shared error observable.
	pub fn apply_error_display(&self, form: &mut dyn CardForm, error: &TokenError) {
		let plan = display_plan(error, &form.field_names());
		if let Some(field) = plan.field
			&& let Some(handle) = form.find_field_mut(&field.name)
		{
			handle.set_invalid(true);
			if field.message.is_some() {
				handle.set_error_message(field.message);
			}
		}
		*self.shared_error.write() = plan.shared;
	}

	/// Clears the token and error and returns the form to its untouched
	/// state. Does not touch the loading flag: a request still in flight
	/// keeps its `Loading` state until it settles; terminal states return
	/// to `Idle`.
	pub fn reset(&self, form: &mut dyn CardForm) {
		*self.shared_error.write() = None;
		*self.token.write() = None;
		form.reset();

		let mut state = self.state.write();
		if !state.is_loading() {
			*state = TokenRequestState::Idle;
		}
	}

	fn build_payload(&self, card: Params) -> Params {
		let mut payload = Params::new();
		payload.insert("key", self.config.publishable_key.as_str());
		payload.insert("referrer", self.config.referrer.as_str());
		payload.insert("card", card);
		payload
	}

	fn begin(&self) {
		*self.state.write() = TokenRequestState::Loading;
		*self.shared_error.write() = None;
	}

	fn succeed(&self, token: Token) -> Token {
		tracing::debug!(token = %token.id, "card token created");
		*self.token.write() = Some(token.clone());
		*self.shared_error.write() = None;
		*self.state.write() = TokenRequestState::Succeeded(token.clone());
		token
	}

	fn fail(&self, form: &mut dyn CardForm, error: TokenError) -> TokenError {
		tracing::warn!(kind = error.kind(), "token request failed");
		self.apply_error_display(form, &error);
		*self.state.write() = TokenRequestState::Failed(error.clone());
		error
	}
}
