//! # Vehicle Valuation Entity
//!
//! A provider's complete valuation result for one vehicle.
//!
//! A [`VehicleValuation`] is created once per provider response (or once per
//! synthesized aggregate), never mutated, and discarded after the use-case
//! boundary serializes it. Construction enforces the entity invariants;
//! everything after construction is read-only.
//!
//! # Examples
//!
//! ```
//! use collateral_valuation::domain::entities::vehicle_valuation::VehicleValuation;
//! use collateral_valuation::domain::value_objects::amount::ValuationAmount;
//! use collateral_valuation::domain::value_objects::enums::{ValuationCondition, ValuationType};
//! use collateral_valuation::domain::value_objects::timestamp::Timestamp;
//! use collateral_valuation::domain::value_objects::vin::Vin;
//!
//! let valuation = VehicleValuation::new(
//!     Vin::new("1HGCM82633A004352").unwrap(),
//!     "NADA",
//!     ValuationAmount::new(18500.0).unwrap(),
//!     ValuationAmount::new(23500.0).unwrap(),
//!     ValuationCondition::Good,
//!     42000,
//!     2020,
//!     "Toyota",
//!     "Camry",
//!     Timestamp::now(),
//! )
//! .unwrap();
//!
//! assert_eq!(valuation.conservative_value(), valuation.trade_in_value());
//! assert!(valuation.value_by_type(ValuationType::PrivateParty).is_none());
//! assert!(valuation.is_recent());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::amount::ValuationAmount;
use crate::domain::value_objects::enums::{ValuationCondition, ValuationType};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::vin::Vin;
use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Earliest accepted model year.
const MIN_YEAR: i32 = 1900;

/// Valuations older than this many days are no longer considered recent.
const RECENT_WINDOW_DAYS: i64 = 30;

/// A complete vehicle valuation from one provider.
///
/// # Invariants
///
/// - `mileage >= 0`
/// - `MIN_YEAR <= year <= current year + 2` (next-model-year vehicles are
///   commonly listed ahead of the calendar)
/// - `make` and `model` are non-empty
///
/// The `provider` field carries the literal `"AVERAGE"` when the valuation
/// was synthesized from several providers rather than returned by one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleValuation {
    /// The vehicle this valuation refers to.
    vin: Vin,
    /// Identity of the provider that produced the valuation.
    provider: String,
    /// Dealer part-exchange credit; the most conservative figure.
    trade_in_value: ValuationAmount,
    /// Expected resale price through a dealer.
    retail_value: ValuationAmount,
    /// Expected owner-to-owner sale price, when the provider supplies one.
    private_party_value: Option<ValuationAmount>,
    /// Vehicle condition the valuation was computed for.
    condition: ValuationCondition,
    /// Odometer reading in miles.
    mileage: i64,
    /// Model year.
    year: i32,
    /// Manufacturer name.
    make: String,
    /// Model name.
    model: String,
    /// Trim level, when known.
    trim: Option<String>,
    /// When the provider priced the vehicle.
    valuation_date: Timestamp,
    /// Provider-specific extras (condition tiers, wholesale figures, ...).
    metadata: Map<String, Value>,
}

impl VehicleValuation {
    /// Creates a valuation, enforcing the entity invariants.
    ///
    /// Optional fields (private-party value, trim, metadata) attach through
    /// the `with_*` methods; they are not subject to the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidValuation`] naming the violated
    /// invariant: negative mileage, out-of-range year, or blank make/model.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        vin: Vin,
        provider: impl Into<String>,
        trade_in_value: ValuationAmount,
        retail_value: ValuationAmount,
        condition: ValuationCondition,
        mileage: i64,
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        valuation_date: Timestamp,
    ) -> DomainResult<Self> {
        let make = make.into();
        let model = model.into();

        if mileage < 0 {
            return Err(DomainError::invalid_valuation("mileage cannot be negative"));
        }

        let max_year = Utc::now().year() + 2;
        if year < MIN_YEAR || year > max_year {
            return Err(DomainError::invalid_valuation(format!(
                "vehicle year {year} is outside {MIN_YEAR}..={max_year}"
            )));
        }

        if make.trim().is_empty() || model.trim().is_empty() {
            return Err(DomainError::invalid_valuation(
                "make and model are required",
            ));
        }

        Ok(Self {
            vin,
            provider: provider.into(),
            trade_in_value,
            retail_value,
            private_party_value: None,
            condition,
            mileage,
            year,
            make,
            model,
            trim: None,
            valuation_date,
            metadata: Map::new(),
        })
    }

    /// Attaches a private-party value.
    #[must_use]
    pub fn with_private_party_value(mut self, value: ValuationAmount) -> Self {
        self.private_party_value = Some(value);
        self
    }

    /// Attaches a trim level.
    #[must_use]
    pub fn with_trim(mut self, trim: impl Into<String>) -> Self {
        self.trim = Some(trim.into());
        self
    }

    /// Attaches provider-specific metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Returns the VIN.
    #[inline]
    #[must_use]
    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    /// Returns the provider identity.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Returns the trade-in value.
    #[inline]
    #[must_use]
    pub fn trade_in_value(&self) -> &ValuationAmount {
        &self.trade_in_value
    }

    /// Returns the retail value.
    #[inline]
    #[must_use]
    pub fn retail_value(&self) -> &ValuationAmount {
        &self.retail_value
    }

    /// Returns the private-party value, if the provider supplied one.
    #[inline]
    #[must_use]
    pub fn private_party_value(&self) -> Option<&ValuationAmount> {
        self.private_party_value.as_ref()
    }

    /// Returns the condition the valuation was computed for.
    #[inline]
    #[must_use]
    pub fn condition(&self) -> ValuationCondition {
        self.condition
    }

    /// Returns the odometer reading.
    #[inline]
    #[must_use]
    pub fn mileage(&self) -> i64 {
        self.mileage
    }

    /// Returns the model year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the manufacturer name.
    #[inline]
    #[must_use]
    pub fn make(&self) -> &str {
        &self.make
    }

    /// Returns the model name.
    #[inline]
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the trim level, if known.
    #[inline]
    #[must_use]
    pub fn trim(&self) -> Option<&str> {
        self.trim.as_deref()
    }

    /// Returns when the provider priced the vehicle.
    #[inline]
    #[must_use]
    pub fn valuation_date(&self) -> Timestamp {
        self.valuation_date
    }

    /// Returns the provider-specific metadata.
    #[inline]
    #[must_use]
    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Returns the most conservative figure a lender would use as the
    /// collateral basis: the trade-in value.
    #[inline]
    #[must_use]
    pub fn conservative_value(&self) -> &ValuationAmount {
        &self.trade_in_value
    }

    /// Returns the figure of the requested type, or `None` when the source
    /// provider did not supply it.
    #[must_use]
    pub fn value_by_type(&self, value_type: ValuationType) -> Option<&ValuationAmount> {
        match value_type {
            ValuationType::TradeIn => Some(&self.trade_in_value),
            ValuationType::Retail => Some(&self.retail_value),
            ValuationType::PrivateParty => self.private_party_value.as_ref(),
        }
    }

    /// Returns true if the valuation was priced within the last 30 days.
    #[must_use]
    pub fn is_recent(&self) -> bool {
        self.valuation_date.is_within_past_days(RECENT_WINDOW_DAYS)
    }
}

impl fmt::Display for VehicleValuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VehicleValuation({} {} {} {} via {}, trade-in {})",
            self.vin, self.year, self.make, self.model, self.provider, self.trade_in_value,
        )
    }
}
