//! Nested parameter encoding for card tokenization payloads.
//!
//! The tokenization endpoint accepts `application/x-www-form-urlencoded`
//! bodies where nested maps are written with bracket keys
//! (`card[number]=4242424242424242`) and sequences repeat their key once per
//! element. [`Params`] is the insertion-ordered field map captured from a
//! form at submission time; [`Params::to_query_string`] produces the wire
//! payload.
//!
//! Encoding is pure: the same map always yields the same string, and the
//! segment order follows key insertion order.

pub mod encode;
pub mod params;
pub mod value;

pub use encode::encode_component;
pub use params::Params;
pub use value::ParamValue;
