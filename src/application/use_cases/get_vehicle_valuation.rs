//! # Get Vehicle Valuation Use Case
//!
//! Request validation and response envelope around the valuation service.
//!
//! This is the boundary an external transport (HTTP router, Lambda handler)
//! calls into. It validates the raw request, applies the documented defaults,
//! and folds every outcome - including service errors - into a
//! `{ success, data?, error? }` envelope. [`GetVehicleValuationUseCase::execute`]
//! never returns an error and never panics.

use crate::application::error::ValuationError;
use crate::application::services::collateral_valuation::{
    CollateralValuationService, ValuationOutcome,
};
use crate::domain::value_objects::enums::{ValuationCondition, ValuationStrategy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error message for a missing VIN.
const VIN_REQUIRED: &str = "VIN is required";

/// Error message for a missing or negative mileage.
const MILEAGE_REQUIRED: &str = "Valid mileage is required";

/// Error message when no provider produced a valuation.
const VALUATION_UNAVAILABLE: &str = "Unable to retrieve valuation. Please try again later.";

/// A raw valuation request as the external transport delivers it.
///
/// Condition and strategy arrive as strings so that out-of-set values can be
/// reported through the envelope instead of failing deserialization in the
/// transport layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetVehicleValuationRequest {
    /// Vehicle identification number.
    pub vin: String,
    /// Current odometer reading.
    pub mileage: Option<i64>,
    /// Vehicle condition; defaults to `GOOD`.
    pub condition: Option<String>,
    /// Aggregation strategy; defaults to `FIRST_AVAILABLE`.
    pub strategy: Option<String>,
}

impl GetVehicleValuationRequest {
    /// Creates a request with the defaulted optional fields.
    #[must_use]
    pub fn new(vin: impl Into<String>, mileage: i64) -> Self {
        Self {
            vin: vin.into(),
            mileage: Some(mileage),
            condition: None,
            strategy: None,
        }
    }

    /// Sets the condition string.
    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Sets the strategy string.
    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

/// The success/error envelope returned to the external transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetVehicleValuationResponse {
    /// Whether the request produced a valuation.
    pub success: bool,
    /// The valuation(s) on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ValuationOutcome>,
    /// A user-facing message on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GetVehicleValuationResponse {
    /// Creates a success envelope.
    #[must_use]
    pub fn ok(data: ValuationOutcome) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failure envelope.
    #[must_use]
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Entry point for valuation requests.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use collateral_valuation::application::services::collateral_valuation::CollateralValuationService;
/// use collateral_valuation::application::use_cases::get_vehicle_valuation::{
///     GetVehicleValuationRequest, GetVehicleValuationUseCase,
/// };
/// use collateral_valuation::infrastructure::providers::nada::NadaProvider;
/// use collateral_valuation::infrastructure::providers::traits::ValuationProvider;
///
/// # async fn example() {
/// let providers: Vec<Arc<dyn ValuationProvider>> = vec![Arc::new(NadaProvider::from_env())];
/// let service = CollateralValuationService::new(providers).unwrap();
/// let use_case = GetVehicleValuationUseCase::new(Arc::new(service));
///
/// let response = use_case
///     .execute(GetVehicleValuationRequest::new("1HGCM82633A004352", 42000))
///     .await;
/// assert!(response.success);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GetVehicleValuationUseCase {
    service: Arc<CollateralValuationService>,
}

impl GetVehicleValuationUseCase {
    /// Creates the use case over a wired valuation service.
    #[must_use]
    pub fn new(service: Arc<CollateralValuationService>) -> Self {
        Self { service }
    }

    /// Executes a valuation request.
    ///
    /// Validation order: VIN presence, then mileage, then condition and
    /// strategy parsing. Every failure - validation, unknown enum value,
    /// malformed VIN, or an empty aggregation - comes back as a
    /// `success: false` envelope; this boundary never raises to its caller.
    pub async fn execute(&self, request: GetVehicleValuationRequest) -> GetVehicleValuationResponse {
        if request.vin.trim().is_empty() {
            return GetVehicleValuationResponse::fail(VIN_REQUIRED);
        }

        let mileage = match request.mileage {
            Some(mileage) if mileage >= 0 => mileage,
            _ => return GetVehicleValuationResponse::fail(MILEAGE_REQUIRED),
        };

        let condition = match request.condition.as_deref() {
            None => ValuationCondition::default(),
            Some(raw) => match raw.parse::<ValuationCondition>() {
                Ok(condition) => condition,
                Err(_) => {
                    return GetVehicleValuationResponse::fail(
                        ValuationError::unknown_condition(raw).to_string(),
                    );
                }
            },
        };

        let strategy = match request.strategy.as_deref() {
            None => ValuationStrategy::default(),
            Some(raw) => match raw.parse::<ValuationStrategy>() {
                Ok(strategy) => strategy,
                Err(_) => {
                    return GetVehicleValuationResponse::fail(
                        ValuationError::unknown_strategy(raw).to_string(),
                    );
                }
            },
        };

        match self
            .service
            .get_value_by_vin(&request.vin, mileage, condition, strategy)
            .await
        {
            Ok(Some(outcome)) => GetVehicleValuationResponse::ok(outcome),
            Ok(None) => GetVehicleValuationResponse::fail(VALUATION_UNAVAILABLE),
            Err(error) => {
                tracing::error!(%error, "valuation request failed");
                GetVehicleValuationResponse::fail(error.to_string())
            }
        }
    }
}
