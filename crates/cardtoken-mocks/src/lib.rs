//! Mock implementations for cardtoken testing.

pub mod transport;

pub use transport::{MockTokenTransport, RecordedRequest};
