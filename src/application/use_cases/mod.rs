//! # Use Cases
//!
//! Entry points the external transport calls into: valuation requests and
//! provider listing. Use cases validate raw input and fold every outcome
//! into serializable envelopes.

pub mod get_vehicle_valuation;
pub mod list_providers;

pub use get_vehicle_valuation::{
    GetVehicleValuationRequest, GetVehicleValuationResponse, GetVehicleValuationUseCase,
};
pub use list_providers::{ListProvidersUseCase, ProvidersResponse};
