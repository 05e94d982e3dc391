//! # Domain Errors
//!
//! Error types for domain invariant violations.
//!
//! Every value object and entity constructor in the domain layer returns
//! [`DomainError`] when its invariants are violated. The variant identifies
//! which concept was invalid; the message identifies which rule broke.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_vin("VIN must be exactly 17 characters");
//! assert!(err.to_string().contains("17 characters"));
//! ```

use thiserror::Error;

/// Error type for domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A VIN failed format validation.
    #[error("invalid VIN: {0}")]
    InvalidVin(String),

    /// A valuation amount was outside the allowed range.
    #[error("invalid valuation amount: {0}")]
    InvalidAmount(String),

    /// A currency code was malformed.
    #[error("invalid currency: {0}")]
    InvalidCurrency(String),

    /// A vehicle valuation violated an entity invariant.
    #[error("invalid valuation: {0}")]
    InvalidValuation(String),
}

impl DomainError {
    /// Creates an invalid VIN error.
    #[must_use]
    pub fn invalid_vin(message: impl Into<String>) -> Self {
        Self::InvalidVin(message.into())
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(message: impl Into<String>) -> Self {
        Self::InvalidAmount(message.into())
    }

    /// Creates an invalid currency error.
    #[must_use]
    pub fn invalid_currency(message: impl Into<String>) -> Self {
        Self::InvalidCurrency(message.into())
    }

    /// Creates an invalid valuation error.
    #[must_use]
    pub fn invalid_valuation(message: impl Into<String>) -> Self {
        Self::InvalidValuation(message.into())
    }

    /// Returns true if this error concerns a VIN.
    #[must_use]
    pub fn is_vin_error(&self) -> bool {
        matches!(self, Self::InvalidVin(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
