//! # Application Services
//!
//! Orchestration logic coordinating domain objects and provider adapters.

pub mod collateral_valuation;

pub use collateral_valuation::{AVERAGE_PROVIDER, CollateralValuationService, ValuationOutcome};
