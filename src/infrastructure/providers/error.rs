//! # Provider Errors
//!
//! Error types for valuation provider operations.
//!
//! A provider error means the provider *failed* to answer: network trouble,
//! authentication, a malformed payload. "No data for this vehicle" is not an
//! error; providers express it as an absent result.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::infrastructure::providers::error::ProviderError;
//!
//! let error = ProviderError::timeout("request exceeded 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = ProviderError::authentication("invalid API key");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for valuation provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Network or connection error.
    #[error("provider connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("provider timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Authentication or authorization failure.
    #[error("provider authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("provider rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
        /// Retry-after duration in milliseconds.
        retry_after_ms: Option<u64>,
    },

    /// The provider returned a payload that could not be mapped.
    #[error("provider returned an invalid response: {message}")]
    InvalidResponse {
        /// Error message.
        message: String,
    },

    /// The provider is missing required configuration.
    #[error("provider not configured: {message}")]
    NotConfigured {
        /// Error message.
        message: String,
    },

    /// Unknown or unclassified error.
    #[error("provider unknown error: {message}")]
    Unknown {
        /// Error message.
        message: String,
    },
}

impl ProviderError {
    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: None,
        }
    }

    /// Creates a rate limited error with retry duration.
    #[must_use]
    pub fn rate_limited_with_retry(message: impl Into<String>, retry_after_ms: u64) -> Self {
        Self::RateLimited {
            message: message.into(),
            retry_after_ms: Some(retry_after_ms),
        }
    }

    /// Creates an invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates a not configured error.
    #[must_use]
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured {
            message: message.into(),
        }
    }

    /// Creates an unknown error.
    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::Unknown {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    ///
    /// No retry policy exists at this layer; the classification is for
    /// callers that add one.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if this error reflects a misconfigured or misused client.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::NotConfigured { .. }
        )
    }

    /// Returns the retry delay in milliseconds, if the provider supplied one.
    #[must_use]
    pub fn retry_after_ms(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after_ms, .. } => *retry_after_ms,
            _ => None,
        }
    }
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
