//! Tokenization endpoint wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque card token returned by the endpoint, used in place of raw card
/// details in subsequent operations.
///
/// Only `id` is guaranteed to be present; the remaining fields mirror the
/// token object the endpoint returns and default when absent. Unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
	/// Unique token ID, e.g. `tok_…`
	pub id: String,
	/// Object discriminator (`"token"`)
	#[serde(default)]
	pub object: Option<String>,
	/// Summary of the tokenized card
	#[serde(default)]
	pub card: Option<TokenCard>,
	/// IP address the tokenization request was made from
	#[serde(default)]
	pub client_ip: Option<String>,
	/// Creation time (unix seconds on the wire)
	#[serde(default, with = "chrono::serde::ts_seconds_option")]
	pub created: Option<DateTime<Utc>>,
	/// Whether the token was created with a live-mode key
	#[serde(default)]
	pub livemode: bool,
	/// Whether the token has already been used
	#[serde(default)]
	pub used: bool,
}

/// Card summary carried on a token. Never contains the full card number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenCard {
	/// Card object ID
	#[serde(default)]
	pub id: Option<String>,
	/// Card brand, e.g. `Visa`
	#[serde(default)]
	pub brand: Option<String>,
	/// Last four digits
	#[serde(default)]
	pub last4: Option<String>,
	/// Expiration month (1-12)
	#[serde(default)]
	pub exp_month: Option<u8>,
	/// Expiration year
	#[serde(default)]
	pub exp_year: Option<u16>,
	/// Funding type, e.g. `credit`
	#[serde(default)]
	pub funding: Option<String>,
	/// Card fingerprint
	#[serde(default)]
	pub fingerprint: Option<String>,
	/// Billing ZIP as submitted
	#[serde(default)]
	pub address_zip: Option<String>,
}
