//! # Domain Enums
//!
//! Enumeration types for valuation concepts.
//!
//! This module provides the core enumerations used throughout the collateral
//! valuation system:
//!
//! - [`ValuationCondition`] - Qualitative vehicle condition
//! - [`ValuationType`] - Which figure of a valuation to read
//! - [`ValuationStrategy`] - Policy for combining provider answers
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for enum parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    /// The value did not match any variant of the named enum.
    #[error("invalid {0} value: {1}")]
    InvalidValue(&'static str, String),
}

impl ParseEnumError {
    /// Returns the raw value that failed to parse.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidValue(_, value) => value,
        }
    }
}

/// Qualitative vehicle condition affecting valuation.
///
/// # Examples
///
/// ```
/// use collateral_valuation::domain::value_objects::enums::ValuationCondition;
///
/// let condition: ValuationCondition = "good".parse().unwrap();
/// assert_eq!(condition, ValuationCondition::Good);
/// assert_eq!(condition.to_string(), "GOOD");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ValuationCondition {
    /// Like-new vehicle with no visible defects.
    Excellent = 0,
    /// Normal wear for age and mileage.
    Good = 1,
    /// Noticeable cosmetic or mechanical issues.
    Fair = 2,
    /// Significant damage or mechanical problems.
    Poor = 3,
}

impl fmt::Display for ValuationCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "EXCELLENT"),
            Self::Good => write!(f, "GOOD"),
            Self::Fair => write!(f, "FAIR"),
            Self::Poor => write!(f, "POOR"),
        }
    }
}

impl FromStr for ValuationCondition {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EXCELLENT" => Ok(Self::Excellent),
            "GOOD" => Ok(Self::Good),
            "FAIR" => Ok(Self::Fair),
            "POOR" => Ok(Self::Poor),
            _ => Err(ParseEnumError::InvalidValue(
                "ValuationCondition",
                s.to_string(),
            )),
        }
    }
}

impl Default for ValuationCondition {
    /// The assumed condition when a caller does not specify one.
    fn default() -> Self {
        Self::Good
    }
}

/// Which figure of a valuation to read.
///
/// # Examples
///
/// ```
/// use collateral_valuation::domain::value_objects::enums::ValuationType;
///
/// assert_eq!(ValuationType::TradeIn.to_string(), "TRADE_IN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ValuationType {
    /// Amount a dealer would credit in part-exchange.
    TradeIn = 0,
    /// Expected resale price through a dealer.
    Retail = 1,
    /// Expected owner-to-owner sale price; not all providers supply it.
    PrivateParty = 2,
}

impl fmt::Display for ValuationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TradeIn => write!(f, "TRADE_IN"),
            Self::Retail => write!(f, "RETAIL"),
            Self::PrivateParty => write!(f, "PRIVATE_PARTY"),
        }
    }
}

impl FromStr for ValuationType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "TRADE_IN" | "TRADEIN" => Ok(Self::TradeIn),
            "RETAIL" => Ok(Self::Retail),
            "PRIVATE_PARTY" | "PRIVATEPARTY" => Ok(Self::PrivateParty),
            _ => Err(ParseEnumError::InvalidValue("ValuationType", s.to_string())),
        }
    }
}

/// Policy for combining answers from multiple valuation providers.
///
/// The strategies differ in failure tolerance and numeric semantics; see
/// [`CollateralValuationService`](crate::application::services::collateral_valuation::CollateralValuationService)
/// for the orchestration rules.
///
/// # Examples
///
/// ```
/// use collateral_valuation::domain::value_objects::enums::ValuationStrategy;
///
/// let strategy: ValuationStrategy = "MOST_CONSERVATIVE".parse().unwrap();
/// assert_eq!(strategy, ValuationStrategy::MostConservative);
/// assert!(strategy.queries_all_providers());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum ValuationStrategy {
    /// Use the first provider that is available and returns data.
    FirstAvailable = 0,
    /// Query all providers and keep the lowest trade-in valuation.
    MostConservative = 1,
    /// Query all providers and synthesize an averaged valuation.
    Average = 2,
    /// Query all providers and return every successful valuation.
    AllProviders = 3,
}

impl ValuationStrategy {
    /// Returns true if this strategy fans out to every configured provider.
    ///
    /// [`ValuationStrategy::FirstAvailable`] is the only strategy that
    /// short-circuits instead.
    #[inline]
    #[must_use]
    pub const fn queries_all_providers(self) -> bool {
        !matches!(self, Self::FirstAvailable)
    }
}

impl fmt::Display for ValuationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstAvailable => write!(f, "FIRST_AVAILABLE"),
            Self::MostConservative => write!(f, "MOST_CONSERVATIVE"),
            Self::Average => write!(f, "AVERAGE"),
            Self::AllProviders => write!(f, "ALL_PROVIDERS"),
        }
    }
}

impl FromStr for ValuationStrategy {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "FIRST_AVAILABLE" | "FIRSTAVAILABLE" => Ok(Self::FirstAvailable),
            "MOST_CONSERVATIVE" | "MOSTCONSERVATIVE" => Ok(Self::MostConservative),
            "AVERAGE" => Ok(Self::Average),
            "ALL_PROVIDERS" | "ALLPROVIDERS" => Ok(Self::AllProviders),
            _ => Err(ParseEnumError::InvalidValue(
                "ValuationStrategy",
                s.to_string(),
            )),
        }
    }
}

impl Default for ValuationStrategy {
    /// The strategy applied when a caller does not specify one.
    fn default() -> Self {
        Self::FirstAvailable
    }
}
