//! Tokenizer configuration.

/// Default tokenization endpoint (Stripe Tokens API).
pub const DEFAULT_ENDPOINT: &str = "https://api.stripe.com/v1/tokens";

/// API version pinned by default.
pub const DEFAULT_API_VERSION: &str = "2018-05-21";

/// Header carrying the pinned API version.
pub const VERSION_HEADER: &str = "Stripe-Version";

/// Tokenizer client configuration.
///
/// # Examples
///
/// ```
/// use cardtoken_client::TokenizerConfig;
///
/// let config = TokenizerConfig::new("pk_test_abc")
///     .with_referrer("https://shop.example/checkout");
///
/// assert_eq!(config.publishable_key, "pk_test_abc");
/// assert_eq!(config.endpoint, "https://api.stripe.com/v1/tokens");
/// assert_eq!(config.api_version, "2018-05-21");
/// ```
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct TokenizerConfig {
	/// Publishable API key, sent as the top-level `key` field
	pub publishable_key: String,

	/// Tokenization endpoint URL
	pub endpoint: String,

	/// API version sent in the version header with every request
	pub api_version: String,

	/// Referrer URL reported alongside the card data (the embedding page)
	pub referrer: String,
}

impl TokenizerConfig {
	/// Creates a configuration for the given publishable key, with the
	/// pinned endpoint and API version defaults.
	pub fn new(publishable_key: impl Into<String>) -> Self {
		Self {
			publishable_key: publishable_key.into(),
			endpoint: DEFAULT_ENDPOINT.to_string(),
			api_version: DEFAULT_API_VERSION.to_string(),
			referrer: String::new(),
		}
	}

	/// Overrides the endpoint URL.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	/// Overrides the pinned API version.
	pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
		self.api_version = api_version.into();
		self
	}

	/// Sets the referrer URL reported with the payload.
	pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
		self.referrer = referrer.into();
		self
	}
}
