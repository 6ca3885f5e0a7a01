//! Outcome of a single transport call.

/// Result of one request against the API.
///
/// `Success` always carries a decoded payload; a 2xx reply whose body cannot
/// be decoded into `T` is reported as `Failure`. Operations whose payload is
/// legitimately absent instantiate `T` as `()` or `Option<_>`, both of which
/// decode from a null `data` field.
#[derive(Debug, Clone, PartialEq)]
pub enum TransportResult<T> {
    Success {
        data: T,
        /// Server-supplied message, when the envelope carried a non-empty one.
        message: Option<String>,
    },
    Failure {
        /// Description of the failure, when one is available.
        error: Option<String>,
    },
}

impl<T> TransportResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
