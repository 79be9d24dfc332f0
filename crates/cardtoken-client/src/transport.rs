//! HTTP transport seam for the orchestrator.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure: the endpoint could not be reached or its
/// response body could not be read. No structured endpoint response exists
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
	/// The underlying HTTP client could not be constructed
	#[error("Failed to create HTTP client: {0}")]
	Client(String),

	/// The request never produced a response
	#[error("Request failed: {0}")]
	Connection(String),

	/// A response arrived but its body could not be read
	#[error("Failed to read response body: {0}")]
	Body(String),
}

/// Raw endpoint response: HTTP status and unparsed body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
	/// HTTP status code
	pub status: u16,
	/// Body text, expected to be JSON
	pub body: String,
}

/// Seam between the orchestrator and the network.
///
/// Implementations POST a form-encoded body and hand back whatever body the
/// endpoint answered with, regardless of HTTP status; the endpoint encodes
/// failure in the JSON body, not the status line. Timeouts are the
/// transport's own concern; the orchestrator adds none and never retries.
#[async_trait]
pub trait TokenTransport: Send + Sync {
	/// POSTs `body` to `url` with the given headers.
	async fn post_form(
		&self,
		url: &str,
		body: String,
		headers: &[(&str, &str)],
	) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport with a 30 second timeout.
#[derive(Debug, Clone)]
pub struct HttpTokenTransport {
	client: reqwest::Client,
}

impl HttpTokenTransport {
	/// Builds the underlying HTTP client.
	pub fn new() -> Result<Self, TransportError> {
		let client = reqwest::Client::builder()
			.timeout(Duration::from_secs(30))
			.build()
			.map_err(|e| TransportError::Client(e.to_string()))?;
		Ok(Self { client })
	}
}

#[async_trait]
impl TokenTransport for HttpTokenTransport {
	async fn post_form(
		&self,
		url: &str,
		body: String,
		headers: &[(&str, &str)],
	) -> Result<RawResponse, TransportError> {
		let mut request = self.client.post(url).body(body);
		for (name, value) in headers {
			request = request.header(*name, *value);
		}

		let response = request
			.send()
			.await
			.map_err(|e| TransportError::Connection(e.to_string()))?;

		let status = response.status().as_u16();
		let body = response
			.text()
			.await
			.map_err(|e| TransportError::Body(e.to_string()))?;

		Ok(RawResponse { status, body })
	}
}
