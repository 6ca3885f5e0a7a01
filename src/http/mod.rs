//! HTTP transport for the WHartTest API.
//!
//! The transport owns the network boundary: it issues one request per call
//! and folds every failure mode (connect errors, non-2xx statuses, error
//! envelopes, undecodable bodies) into [`TransportResult::Failure`]. Nothing
//! above this module ever sees a raw `reqwest` error.

mod client;
mod result;

pub use client::{AuthConfig, HttpTransport};
pub use result::TransportResult;
