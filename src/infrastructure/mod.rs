//! # Infrastructure Layer
//!
//! Concrete integrations behind the domain's ports: the valuation provider
//! adapters and their error types.

pub mod providers;
