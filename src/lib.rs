//! # Collateral Valuation
//!
//! Multi-provider vehicle collateral valuation engine for auto lending.
//!
//! Given a vehicle identity (VIN) and condition, the engine queries one or
//! more independent valuation data providers (NADA, KBB, Chrome Data) and
//! combines their answers under a caller-selected aggregation strategy.
//!
//! # Layers
//!
//! - [`domain`] - validated value objects ([`Vin`], [`ValuationAmount`]) and
//!   the immutable [`VehicleValuation`] entity.
//! - [`infrastructure`] - the [`ValuationProvider`] capability trait and the
//!   concrete provider adapters.
//! - [`application`] - the [`CollateralValuationService`] orchestrator with
//!   its four strategies, plus the use-case boundaries an external transport
//!   calls into.
//! - [`composition`] - explicit dependency wiring; no global state.
//!
//! # Strategies
//!
//! | Strategy | Behavior |
//! |----------|----------|
//! | `FIRST_AVAILABLE` | Sequential, short-circuits on the first answer |
//! | `MOST_CONSERVATIVE` | Concurrent fan-out, keeps the lowest trade-in |
//! | `AVERAGE` | Concurrent fan-out, synthesizes averaged figures |
//! | `ALL_PROVIDERS` | Concurrent fan-out, returns every success |
//!
//! A failing provider never fails the request: failures are isolated per
//! provider, logged, and excluded from aggregation.
//!
//! # Example
//!
//! ```no_run
//! use collateral_valuation::composition::ValuationStack;
//! use collateral_valuation::application::use_cases::GetVehicleValuationRequest;
//!
//! # async fn example() {
//! let stack = ValuationStack::from_env().unwrap();
//!
//! let response = stack
//!     .valuation
//!     .execute(
//!         GetVehicleValuationRequest::new("1HGCM82633A004352", 42000)
//!             .with_strategy("MOST_CONSERVATIVE"),
//!     )
//!     .await;
//!
//! if response.success {
//!     println!("{}", serde_json::to_string_pretty(&response.data).unwrap());
//! }
//! # }
//! ```

pub mod application;
pub mod composition;
pub mod domain;
pub mod infrastructure;

pub use application::error::{ValuationError, ValuationResult};
pub use application::services::collateral_valuation::{
    CollateralValuationService, ValuationOutcome,
};
pub use application::use_cases::get_vehicle_valuation::{
    GetVehicleValuationRequest, GetVehicleValuationResponse, GetVehicleValuationUseCase,
};
pub use composition::ValuationStack;
pub use domain::entities::vehicle_valuation::VehicleValuation;
pub use domain::value_objects::amount::ValuationAmount;
pub use domain::value_objects::enums::{ValuationCondition, ValuationStrategy, ValuationType};
pub use domain::value_objects::vin::Vin;
pub use infrastructure::providers::traits::{ProviderMetadata, ValuationProvider};
