//! Mock transport for testing the TokenTransport trait.

use async_trait::async_trait;
use cardtoken_client::{RawResponse, TokenTransport, TransportError};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// One request as the orchestrator issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
	/// Endpoint URL
	pub url: String,
	/// Encoded payload
	pub body: String,
	/// Headers, in the order they were supplied
	pub headers: Vec<(String, String)>,
}

/// Mock transport for testing.
///
/// Answers requests from an in-memory FIFO of canned responses, records
/// every request it sees, and can be configured to fail the next request
/// for testing transport error paths.
pub struct MockTokenTransport {
	responses: Arc<RwLock<VecDeque<RawResponse>>>,
	requests: Arc<RwLock<Vec<RecordedRequest>>>,
	fail_next: Arc<RwLock<bool>>,
}

impl MockTokenTransport {
	/// Creates a mock with no canned responses.
	pub fn new() -> Self {
		Self {
			responses: Arc::new(RwLock::new(VecDeque::new())),
			requests: Arc::new(RwLock::new(Vec::new())),
			fail_next: Arc::new(RwLock::new(false)),
		}
	}

	/// Queues a canned response.
	pub async fn push_response(&self, status: u16, body: impl Into<String>) {
		self.responses.write().await.push_back(RawResponse {
			status,
			body: body.into(),
		});
	}

	/// Configures whether the next request should fail at the transport
	/// level.
	pub async fn set_fail_next(&self, fail: bool) {
		*self.fail_next.write().await = fail;
	}

	/// Number of requests seen so far.
	pub async fn request_count(&self) -> usize {
		self.requests.read().await.len()
	}

	/// The most recent request, if any.
	pub async fn last_request(&self) -> Option<RecordedRequest> {
		self.requests.read().await.last().cloned()
	}

	/// Clears recorded requests and queued responses.
	pub async fn clear(&self) {
		self.responses.write().await.clear();
		self.requests.write().await.clear();
	}
}

impl Default for MockTokenTransport {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl TokenTransport for MockTokenTransport {
	async fn post_form(
		&self,
		url: &str,
		body: String,
		headers: &[(&str, &str)],
	) -> Result<RawResponse, TransportError> {
		self.requests.write().await.push(RecordedRequest {
			url: url.to_string(),
			body,
			headers: headers
				.iter()
				.map(|(name, value)| (name.to_string(), value.to_string()))
				.collect(),
		});

		if *self.fail_next.read().await {
			return Err(TransportError::Connection(
				"Mock configured to fail".to_string(),
			));
		}

		match self.responses.write().await.pop_front() {
			Some(response) => Ok(response),
			None => Err(TransportError::Connection(
				"No canned response queued".to_string(),
			)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_responses_drain_in_order() {
		let transport = MockTokenTransport::new();
		transport.push_response(200, r#"{"id":"tok_1"}"#).await;
		transport.push_response(200, r#"{"id":"tok_2"}"#).await;

		let first = transport
			.post_form("http://mock/v1/tokens", String::new(), &[])
			.await
			.unwrap();
		let second = transport
			.post_form("http://mock/v1/tokens", String::new(), &[])
			.await
			.unwrap();

		assert!(first.body.contains("tok_1"));
		assert!(second.body.contains("tok_2"));
		assert_eq!(transport.request_count().await, 2);
	}

	#[tokio::test]
	async fn test_fail_next_fails_at_transport_level() {
		let transport = MockTokenTransport::new();
		transport.push_response(200, r#"{"id":"tok_1"}"#).await;
		transport.set_fail_next(true).await;

		let result = transport
			.post_form("http://mock/v1/tokens", String::new(), &[])
			.await;
		assert!(matches!(result, Err(TransportError::Connection(_))));
	}

	#[tokio::test]
	async fn test_requests_are_recorded() {
		let transport = MockTokenTransport::new();
		transport.push_response(200, "{}").await;

		let headers = [("Accept", "application/json")];
		transport
			.post_form("http://mock/v1/tokens", "key=pk".to_string(), &headers)
			.await
			.unwrap();

		let request = transport.last_request().await.unwrap();
		assert_eq!(request.url, "http://mock/v1/tokens");
		assert_eq!(request.body, "key=pk");
		assert_eq!(
			request.headers,
			vec![("Accept".to_string(), "application/json".to_string())]
		);

		transport.clear().await;
		assert_eq!(transport.request_count().await, 0);
	}
}
