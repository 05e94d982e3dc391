//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors separate the failure classes callers care about: domain
//! invariant violations bubbling up from value objects, the fatal
//! zero-provider configuration, and malformed request values that a caller
//! must fix. Provider failures never appear here - the orchestration
//! service isolates them per provider and they surface only as an absent
//! result.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::application::error::ValuationError;
//!
//! let err = ValuationError::unknown_strategy("CHEAPEST");
//! assert!(err.to_string().contains("CHEAPEST"));
//! assert!(!err.is_configuration());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// Domain invariant violation (malformed VIN, amount, or valuation).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The service was constructed with no providers. Fatal at wiring time,
    /// never a runtime condition.
    #[error("at least one valuation provider is required")]
    NoProvidersConfigured,

    /// A strategy value outside the enumerated set reached the boundary.
    /// Distinct from "no data" so callers can tell a malformed request from
    /// an empty aggregation.
    #[error("unknown valuation strategy: {0}")]
    UnknownStrategy(String),

    /// A condition value outside the enumerated set reached the boundary.
    #[error("unknown vehicle condition: {0}")]
    UnknownCondition(String),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ValuationError {
    /// Creates an unknown strategy error.
    #[must_use]
    pub fn unknown_strategy(raw: impl Into<String>) -> Self {
        Self::UnknownStrategy(raw.into())
    }

    /// Creates an unknown condition error.
    #[must_use]
    pub fn unknown_condition(raw: impl Into<String>) -> Self {
        Self::UnknownCondition(raw.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns true if this error is a wiring/configuration failure.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::NoProvidersConfigured)
    }

    /// Returns true if the caller sent a value it must fix.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Domain(_)
                | Self::UnknownStrategy(_)
                | Self::UnknownCondition(_)
                | Self::Validation(_)
        )
    }
}

/// Result type for application operations.
pub type ValuationResult<T> = Result<T, ValuationError>;
