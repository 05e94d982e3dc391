//! # Composition Root
//!
//! Explicit dependency wiring for the valuation stack.
//!
//! The provider list and service are built once and injected into the use
//! cases; nothing here is global or process-wide. A host (HTTP router,
//! Lambda handler, test harness) owns the resulting [`ValuationStack`] and
//! decides how long it lives.
//!
//! # Examples
//!
//! ```no_run
//! use collateral_valuation::composition::ValuationStack;
//! use collateral_valuation::application::use_cases::GetVehicleValuationRequest;
//!
//! # async fn example() {
//! let stack = ValuationStack::from_env().unwrap();
//! let response = stack
//!     .valuation
//!     .execute(GetVehicleValuationRequest::new("1HGCM82633A004352", 42000))
//!     .await;
//! # }
//! ```

use crate::application::error::ValuationResult;
use crate::application::services::collateral_valuation::CollateralValuationService;
use crate::application::use_cases::get_vehicle_valuation::GetVehicleValuationUseCase;
use crate::application::use_cases::list_providers::ListProvidersUseCase;
use crate::infrastructure::providers::chrome_data::ChromeDataProvider;
use crate::infrastructure::providers::kbb::KbbProvider;
use crate::infrastructure::providers::nada::NadaProvider;
use crate::infrastructure::providers::traits::ValuationProvider;
use std::sync::Arc;

/// The fully wired valuation stack.
#[derive(Debug, Clone)]
pub struct ValuationStack {
    /// The orchestration service, for callers that need it directly.
    pub service: Arc<CollateralValuationService>,
    /// The valuation request boundary.
    pub valuation: GetVehicleValuationUseCase,
    /// The provider listing boundary.
    pub providers: ListProvidersUseCase,
}

impl ValuationStack {
    /// Wires the stack over an explicit provider list.
    ///
    /// # Errors
    ///
    /// Returns [`ValuationError::NoProvidersConfigured`](crate::application::error::ValuationError::NoProvidersConfigured)
    /// when the list is empty.
    pub fn new(providers: Vec<Arc<dyn ValuationProvider>>) -> ValuationResult<Self> {
        let service = Arc::new(CollateralValuationService::new(providers)?);
        Ok(Self {
            valuation: GetVehicleValuationUseCase::new(Arc::clone(&service)),
            providers: ListProvidersUseCase::new(Arc::clone(&service)),
            service,
        })
    }

    /// Wires the default provider set (NADA, KBB, Chrome Data, in that
    /// order) from environment configuration.
    ///
    /// # Errors
    ///
    /// Never fails in practice - the default provider list is non-empty -
    /// but shares [`ValuationStack::new`]'s signature for uniform call
    /// sites.
    pub fn from_env() -> ValuationResult<Self> {
        Self::new(default_providers())
    }
}

/// Builds the default provider list from environment configuration.
///
/// Order matters: `FIRST_AVAILABLE` walks it front to back, and tie-breaks
/// and average templates follow it.
#[must_use]
pub fn default_providers() -> Vec<Arc<dyn ValuationProvider>> {
    vec![
        Arc::new(NadaProvider::from_env()),
        Arc::new(KbbProvider::from_env()),
        Arc::new(ChromeDataProvider::from_env()),
    ]
}
