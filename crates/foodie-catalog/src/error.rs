//! # Catalog Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │   Transport     │  │    Response     │  │    Configuration        │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Network        │  │  Status (non-2xx)│ │  InvalidUrl             │ │
//! │  │  Timeout        │  │  Decode         │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these reach the user as a hard failure. [`crate::CatalogLoader`]
//! logs them and falls back to an empty list.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogFetchError>;

#[derive(Debug, Error)]
pub enum CatalogFetchError {
    /// Connection refused, DNS failure, reset.
    #[error("Catalog request failed: {0}")]
    Network(String),

    /// Request exceeded the configured timeout.
    #[error("Catalog request timed out")]
    Timeout,

    /// Server answered with a non-2xx status.
    #[error("Catalog returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not the expected JSON shape.
    #[error("Malformed catalog response: {0}")]
    Decode(String),

    /// Base URL or derived endpoint could not be parsed.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for CatalogFetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CatalogFetchError::Timeout
        } else if let Some(status) = err.status() {
            CatalogFetchError::Status {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            CatalogFetchError::Decode(err.to_string())
        } else {
            CatalogFetchError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogFetchError {
    fn from(err: serde_json::Error) -> Self {
        CatalogFetchError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CatalogFetchError {
    fn from(err: url::ParseError) -> Self {
        CatalogFetchError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl CatalogFetchError {
    /// True for failures a later attempt might not hit.
    ///
    /// Server errors (5xx) count; client errors (4xx) and malformed bodies
    /// do not.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogFetchError::Network(_) | CatalogFetchError::Timeout => true,
            CatalogFetchError::Status { status } => *status >= 500 || *status == 429,
            CatalogFetchError::Decode(_) | CatalogFetchError::InvalidUrl(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_categorisation() {
        assert!(CatalogFetchError::Network("reset".into()).is_retryable());
        assert!(CatalogFetchError::Timeout.is_retryable());
        assert!(CatalogFetchError::Status { status: 503 }.is_retryable());
        assert!(CatalogFetchError::Status { status: 429 }.is_retryable());

        assert!(!CatalogFetchError::Status { status: 404 }.is_retryable());
        assert!(!CatalogFetchError::Decode("eof".into()).is_retryable());
        assert!(!CatalogFetchError::InvalidUrl("x".into()).is_retryable());
    }

    #[test]
    fn test_url_error_conversion() {
        let err: CatalogFetchError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, CatalogFetchError::InvalidUrl(_)));
    }
}
