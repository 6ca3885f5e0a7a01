#![allow(clippy::missing_errors_doc)]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod format;
pub mod http;
pub mod llm_config;
pub mod prompts;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::WhartClient;
pub use config::ClientConfig;
pub use envelope::{ApiResponse, ErrorDetail};
pub use error::{Error, Result};
