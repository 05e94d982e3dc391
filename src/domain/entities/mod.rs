//! # Domain Entities
//!
//! Entities bundling validated value objects with identity and behavior.

pub mod vehicle_valuation;

pub use vehicle_valuation::VehicleValuation;
