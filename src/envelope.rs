//! Uniform response envelope and transport-result normalization.
//!
//! Every client operation returns an [`ApiResponse`] value; failures are
//! data, not `Err`. The normalizer maps a [`TransportResult`] plus the
//! operation's defaults onto the envelope.

use crate::http::TransportResult;
use serde::{Deserialize, Serialize};

/// Fixed code reported for every failed operation.
///
/// The transport collapses all failure causes before they reach the
/// normalizer, so the real HTTP status is not recoverable here.
const ERROR_CODE: u16 = 500;

/// Structured detail attached to failed responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: Option<String>,
}

/// Per-operation defaults fed to the normalizer: the code reported on
/// success and the messages used when the transport supplies none.
#[derive(Debug, Clone, Copy)]
pub struct OperationDefaults {
    pub success_code: u16,
    pub success_message: &'static str,
    pub error_message: &'static str,
}

impl OperationDefaults {
    pub const fn new(
        success_code: u16,
        success_message: &'static str,
        error_message: &'static str,
    ) -> Self {
        Self {
            success_code,
            success_message,
            error_message,
        }
    }
}

/// Uniform response returned by every client operation.
///
/// Exactly two outcomes exist, and the variants make the taxonomy
/// exhaustive: a success always carries its payload, an error never does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success { code: u16, message: String, data: T },
    Error {
        code: u16,
        message: String,
        errors: ErrorDetail,
    },
}

impl<T> ApiResponse<T> {
    /// Normalize a transport result into the uniform envelope.
    ///
    /// Success keeps the server's message when present, otherwise the
    /// operation default. Failure always reports code 500 and echoes the
    /// transport's error string into both `message` and `errors.detail`.
    pub fn from_transport(result: TransportResult<T>, defaults: &OperationDefaults) -> Self {
        match result {
            TransportResult::Success { data, message } => Self::Success {
                code: defaults.success_code,
                message: message.unwrap_or_else(|| defaults.success_message.to_string()),
                data,
            },
            TransportResult::Failure { error } => Self::Error {
                code: ERROR_CODE,
                message: error
                    .clone()
                    .unwrap_or_else(|| defaults.error_message.to_string()),
                errors: ErrorDetail { detail: error },
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn code(&self) -> u16 {
        match self {
            Self::Success { code, .. } | Self::Error { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Error { message, .. } => message,
        }
    }

    /// Payload, if this is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Consume the response, yielding the payload of a success.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Error detail string, if this is a failure that carried one.
    pub fn error_detail(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Error { errors, .. } => errors.detail.as_deref(),
        }
    }
}
