//! Full widget flow: masked input, form snapshot, encoded payload, token
//! exchange, and error display, through the facade crate.

use cardtoken::prelude::*;
use cardtoken_integration_tests::filled_card_form;

#[tokio::test]
async fn test_masked_input_tokenizes_end_to_end() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/v1/tokens")
		.match_header("Stripe-Version", "2018-05-21")
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"id":"tok_e2e","object":"token","card":{"brand":"Visa","last4":"4242"},"created":1609459200}"#,
		)
		.expect(1)
		.create_async()
		.await;

	// The embedder masks what the user typed, then stores the digits
	let masked = mask_digits("4242424242424242", 16, DEFAULT_MASK_CHAR);
	assert_eq!(masked.value, "4242 4242 4242 4242");
	let digits: String = masked
		.value
		.chars()
		.filter(|c| *c != DEFAULT_MASK_CHAR)
		.collect();

	let mut form = MemoryCardForm::card_default();
	form.set_value(field_names::NUMBER, digits);
	form.set_value(field_names::EXP_MONTH, "12");
	form.set_value(field_names::EXP_YEAR, "30");
	form.set_value(field_names::CVC, "123");
	form.set_value(field_names::ADDRESS_ZIP, "90210");

	let client = TokenClient::new(
		TokenizerConfig::new("pk_test_abc")
			.with_endpoint(format!("{}/v1/tokens", server.url()))
			.with_referrer("https://shop.example/checkout"),
	)
	.unwrap();

	let token = client.create_token(&mut form).await.unwrap();

	mock.assert_async().await;
	assert_eq!(token.id, "tok_e2e");
	assert_eq!(
		token.card.and_then(|card| card.last4),
		Some("4242".to_string())
	);
	assert!(!client.loading());
	assert!(client.error().is_none());

	// Reset returns the widget to its untouched state
	client.reset(&mut form);
	assert!(client.token().is_none());
	assert_eq!(client.state(), TokenRequestState::Idle);
	assert!(form.serialize().get(field_names::NUMBER).unwrap().is_null());
}

#[tokio::test]
async fn test_declined_card_reaches_the_number_field() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("POST", "/v1/tokens")
		.with_status(402)
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"error":{"type":"card_error","param":"number","message":"Your card number is invalid."}}"#,
		)
		.create_async()
		.await;

	let client = TokenClient::new(
		TokenizerConfig::new("pk_test_abc")
			.with_endpoint(format!("{}/v1/tokens", server.url())),
	)
	.unwrap();
	let mut form = filled_card_form();

	let error = client.create_token(&mut form).await.unwrap_err();
	assert!(matches!(&error, TokenError::Endpoint { .. }));

	// The dispatch rule and its application agree
	let plan = display_plan(&error, &form.field_names());
	assert_eq!(plan.field.unwrap().name, field_names::NUMBER);
	assert!(plan.shared.is_none());

	let number = form.field(field_names::NUMBER).unwrap();
	assert!(number.invalid);
	assert_eq!(
		number.error_message.as_deref(),
		Some("Your card number is invalid.")
	);
	assert!(client.error().is_none());
}

/// The encoded payload decodes with a standard form decoder into exactly
/// the pairs the endpoint expects.
#[test]
fn test_payload_decodes_with_standard_form_decoder() {
	let form = filled_card_form();

	let mut payload = Params::new();
	payload.insert("key", "pk_test_abc");
	payload.insert("referrer", "https://shop.example/checkout?cart=7");
	payload.insert("card", form.serialize());

	let encoded = payload.to_query_string();
	let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();

	assert_eq!(
		pairs,
		vec![
			("key".to_string(), "pk_test_abc".to_string()),
			(
				"referrer".to_string(),
				"https://shop.example/checkout?cart=7".to_string()
			),
			("card[number]".to_string(), "4242424242424242".to_string()),
			("card[exp_month]".to_string(), "12".to_string()),
			("card[exp_year]".to_string(), "30".to_string()),
			("card[cvc]".to_string(), "123".to_string()),
			("card[address_zip]".to_string(), "90210".to_string()),
		]
	);
}
