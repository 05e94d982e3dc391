//! # Valuation Amount Value Object
//!
//! Validated monetary amount for vehicle valuations.
//!
//! Amounts are decimal-backed to keep aggregation arithmetic exact, bounded
//! to a sane range for vehicle collateral, and tagged with a 3-letter
//! currency code. On the wire an amount serializes as
//! `{ "amount": 18500.0, "currency": "USD" }`.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::domain::value_objects::amount::ValuationAmount;
//!
//! let amount = ValuationAmount::new(18500.0).unwrap();
//! assert_eq!(amount.currency(), "USD");
//! assert_eq!(amount.to_string(), "USD 18500.00");
//!
//! assert!(ValuationAmount::new(-1.0).is_err());
//! assert!(ValuationAmount::new(1_000_001.0).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default currency for valuations.
const DEFAULT_CURRENCY: &str = "USD";

/// Upper bound for a single valuation amount.
const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// A validated monetary valuation amount.
///
/// # Invariants
///
/// - `0 <= amount <= 1,000,000`
/// - `currency` is exactly 3 characters.
///
/// Two amounts are equal iff both the amount and the currency match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValuationAmount {
    /// The monetary value.
    #[serde(with = "rust_decimal::serde::float")]
    amount: Decimal,
    /// ISO-4217 style 3-letter currency code.
    currency: String,
}

impl ValuationAmount {
    /// Creates a USD amount.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] when the amount is negative,
    /// exceeds 1,000,000, or is not a finite number.
    pub fn new(amount: f64) -> DomainResult<Self> {
        Self::with_currency(amount, DEFAULT_CURRENCY)
    }

    /// Creates an amount in the given currency.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] for out-of-range or non-finite
    /// amounts and [`DomainError::InvalidCurrency`] when the currency code is
    /// not exactly 3 characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use collateral_valuation::domain::value_objects::amount::ValuationAmount;
    ///
    /// let amount = ValuationAmount::with_currency(21000.0, "CAD").unwrap();
    /// assert_eq!(amount.currency(), "CAD");
    ///
    /// assert!(ValuationAmount::with_currency(21000.0, "CADX").is_err());
    /// ```
    pub fn with_currency(amount: f64, currency: impl Into<String>) -> DomainResult<Self> {
        let amount = Decimal::from_f64(amount).ok_or_else(|| {
            DomainError::invalid_amount("valuation amount must be a finite number")
        })?;
        Self::from_decimal(amount, currency)
    }

    /// Creates an amount from an already-exact decimal value.
    ///
    /// Used by aggregation code that computes means over existing amounts.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidAmount`] or
    /// [`DomainError::InvalidCurrency`] under the same rules as
    /// [`ValuationAmount::with_currency`].
    pub fn from_decimal(amount: Decimal, currency: impl Into<String>) -> DomainResult<Self> {
        let currency = currency.into();

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(DomainError::invalid_amount(
                "valuation amount cannot be negative",
            ));
        }

        if amount > MAX_AMOUNT {
            return Err(DomainError::invalid_amount(
                "valuation amount exceeds the maximum allowed value",
            ));
        }

        if currency.chars().count() != 3 {
            return Err(DomainError::invalid_currency(
                "currency must be a 3-letter code",
            ));
        }

        Ok(Self { amount, currency })
    }

    /// Returns the monetary value.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for ValuationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}
