//! # Valuation Provider Trait
//!
//! Port definition for valuation data sources.
//!
//! This module defines the [`ValuationProvider`] trait that every data
//! source implements, real or synthetic. It gives the orchestration service
//! a uniform interface for querying valuations and checking availability.
//!
//! # Examples
//!
//! ```ignore
//! use collateral_valuation::infrastructure::providers::traits::ValuationProvider;
//!
//! #[derive(Debug)]
//! struct MyProvider { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ValuationProvider for MyProvider {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::vehicle_valuation::VehicleValuation;
use crate::domain::value_objects::enums::ValuationCondition;
use crate::domain::value_objects::vin::Vin;
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Descriptive information about a provider.
///
/// Metadata never affects orchestration decisions; it exists for operators
/// and for the provider listing endpoint.
///
/// # Examples
///
/// ```
/// use collateral_valuation::infrastructure::providers::traits::ProviderMetadata;
///
/// let metadata = ProviderMetadata::new("NADA Guides", ["US"])
///     .with_max_requests_per_day(1000)
///     .with_average_response_time_ms(500);
///
/// assert_eq!(metadata.name, "NADA Guides");
/// assert_eq!(metadata.max_requests_per_day, Some(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderMetadata {
    /// Human-readable provider name.
    pub name: String,
    /// Daily request quota, when the provider publishes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_requests_per_day: Option<u32>,
    /// Typical response time in milliseconds, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_response_time_ms: Option<u64>,
    /// ISO country codes the provider covers.
    pub supported_countries: Vec<String>,
}

impl ProviderMetadata {
    /// Creates metadata with the required fields.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        supported_countries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            max_requests_per_day: None,
            average_response_time_ms: None,
            supported_countries: supported_countries.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the daily request quota.
    #[must_use]
    pub fn with_max_requests_per_day(mut self, limit: u32) -> Self {
        self.max_requests_per_day = Some(limit);
        self
    }

    /// Sets the typical response time.
    #[must_use]
    pub fn with_average_response_time_ms(mut self, millis: u64) -> Self {
        self.average_response_time_ms = Some(millis);
        self
    }
}

impl fmt::Display for ProviderMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ProviderMetadata({}, countries=[{}])",
            self.name,
            self.supported_countries.join(",")
        )
    }
}

/// Trait defining the interface for valuation providers.
///
/// All data-source integrations implement this trait so the orchestration
/// service can treat NADA, KBB, Chrome Data, and test doubles uniformly.
///
/// # Semantics
///
/// - `Ok(None)` from [`value_by_vin`](Self::value_by_vin) means "the provider
///   answered but has no data for this vehicle".
/// - `Err(ProviderError)` means the provider failed; the caller decides how
///   to isolate the failure.
/// - [`is_available`](Self::is_available) is a cheap health/config check and
///   never fails.
#[async_trait]
pub trait ValuationProvider: Send + Sync + fmt::Debug {
    /// Returns the stable provider identifier.
    fn name(&self) -> &str;

    /// Queries a valuation for the given vehicle.
    ///
    /// # Arguments
    ///
    /// * `vin` - Vehicle identification number
    /// * `mileage` - Current odometer reading
    /// * `condition` - Vehicle condition to price for
    ///
    /// # Returns
    ///
    /// The provider's valuation, or `None` when the provider has no data
    /// for this vehicle.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`](crate::infrastructure::providers::error::ProviderError)
    /// on network, authentication, or payload-mapping failure.
    async fn value_by_vin(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<Option<VehicleValuation>>;

    /// Returns true if the provider is currently usable.
    ///
    /// Must be cheap and must not fail; a provider that cannot even answer
    /// this question reports itself unavailable.
    async fn is_available(&self) -> bool;

    /// Returns descriptive metadata about the provider.
    fn metadata(&self) -> ProviderMetadata;
}
