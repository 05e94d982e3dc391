//! # List Providers Use Case
//!
//! Provider availability and metadata listing for the provider query
//! endpoint: which sources are currently usable and what their published
//! limits look like.

use crate::application::services::collateral_valuation::CollateralValuationService;
use crate::infrastructure::providers::traits::ProviderMetadata;
use serde::Serialize;
use std::sync::Arc;

/// Response for the provider listing boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersResponse {
    /// Names of providers whose availability check currently passes.
    pub available: Vec<String>,
    /// Metadata of every configured provider, regardless of availability.
    pub metadata: Vec<ProviderMetadata>,
}

/// Entry point for provider listing requests.
#[derive(Debug, Clone)]
pub struct ListProvidersUseCase {
    service: Arc<CollateralValuationService>,
}

impl ListProvidersUseCase {
    /// Creates the use case over a wired valuation service.
    #[must_use]
    pub fn new(service: Arc<CollateralValuationService>) -> Self {
        Self { service }
    }

    /// Lists available provider names and all provider metadata.
    pub async fn execute(&self) -> ProvidersResponse {
        ProvidersResponse {
            available: self.service.available_providers().await,
            metadata: self.service.providers_metadata(),
        }
    }
}
