//! # Collateral Valuation Service
//!
//! Orchestrates valuation requests across multiple providers.
//!
//! This module provides the [`CollateralValuationService`] which holds a
//! fixed, ordered list of [`ValuationProvider`]s and combines their answers
//! under a caller-selected [`ValuationStrategy`]:
//!
//! - `FIRST_AVAILABLE` walks the providers sequentially and short-circuits
//!   on the first answer - later providers are never queried.
//! - `MOST_CONSERVATIVE`, `AVERAGE`, and `ALL_PROVIDERS` fan out to every
//!   provider concurrently and wait for all of them to settle before
//!   aggregating.
//!
//! A failing provider never fails the request: unavailability and errors are
//! logged per provider and excluded from aggregation. Only an invalid VIN or
//! a broken configuration produce an error from this service; "every
//! provider came up empty" is an absent result, not a failure.

use crate::application::error::{ValuationError, ValuationResult};
use crate::domain::entities::vehicle_valuation::VehicleValuation;
use crate::domain::value_objects::amount::ValuationAmount;
use crate::domain::value_objects::enums::{ValuationCondition, ValuationStrategy};
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::vin::Vin;
use crate::infrastructure::providers::traits::{ProviderMetadata, ValuationProvider};
use futures::future::join_all;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, json};
use std::fmt;
use std::sync::Arc;

/// Provider identity carried by synthesized average valuations.
pub const AVERAGE_PROVIDER: &str = "AVERAGE";

/// The result of a valuation request.
///
/// `ALL_PROVIDERS` yields every successful valuation; the other strategies
/// reduce to a single one. Serializes untagged: a single valuation becomes
/// one object, multiple become an array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValuationOutcome {
    /// One valuation, from a single provider or synthesized.
    Single(VehicleValuation),
    /// Every successful valuation, in configured provider order. Never empty.
    Multiple(Vec<VehicleValuation>),
}

impl ValuationOutcome {
    /// Returns the number of valuations in the outcome.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(valuations) => valuations.len(),
        }
    }

    /// Returns the single valuation, if this outcome holds exactly one.
    #[must_use]
    pub fn as_single(&self) -> Option<&VehicleValuation> {
        match self {
            Self::Single(valuation) => Some(valuation),
            Self::Multiple(_) => None,
        }
    }

    /// Returns the contained valuations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[VehicleValuation] {
        match self {
            Self::Single(valuation) => std::slice::from_ref(valuation),
            Self::Multiple(valuations) => valuations,
        }
    }
}

impl fmt::Display for ValuationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(valuation) => write!(f, "ValuationOutcome({valuation})"),
            Self::Multiple(valuations) => {
                write!(f, "ValuationOutcome({} valuations)", valuations.len())
            }
        }
    }
}

/// Orchestrator for multi-provider vehicle valuations.
///
/// The provider list is fixed at construction and shared read-only for the
/// lifetime of the service; the service itself is stateless, so concurrent
/// requests against one instance are independent.
///
/// # Examples
///
/// ```
/// use collateral_valuation::application::services::collateral_valuation::CollateralValuationService;
///
/// // Construction with no providers is a configuration error.
/// assert!(CollateralValuationService::new(Vec::new()).is_err());
/// ```
#[derive(Debug)]
pub struct CollateralValuationService {
    providers: Vec<Arc<dyn ValuationProvider>>,
}

impl CollateralValuationService {
    /// Creates a service over an ordered list of providers.
    ///
    /// # Errors
    ///
    /// Returns [`ValuationError::NoProvidersConfigured`] when the list is
    /// empty. This is fatal wiring, checked before any query is attempted.
    pub fn new(providers: Vec<Arc<dyn ValuationProvider>>) -> ValuationResult<Self> {
        if providers.is_empty() {
            return Err(ValuationError::NoProvidersConfigured);
        }
        Ok(Self { providers })
    }

    /// Returns the number of configured providers.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Obtains a valuation for the vehicle under the given strategy.
    ///
    /// The VIN is validated first; provider failures are isolated per
    /// provider and never abort the request.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when every provider was unavailable, erroring, or had no
    /// data for this vehicle - for every strategy.
    ///
    /// # Errors
    ///
    /// Returns [`ValuationError::Domain`] when `vin` fails VIN validation.
    pub async fn get_value_by_vin(
        &self,
        vin: &str,
        mileage: i64,
        condition: ValuationCondition,
        strategy: ValuationStrategy,
    ) -> ValuationResult<Option<ValuationOutcome>> {
        let vin = Vin::new(vin)?;

        match strategy {
            ValuationStrategy::FirstAvailable => Ok(self
                .first_available(&vin, mileage, condition)
                .await
                .map(ValuationOutcome::Single)),
            ValuationStrategy::MostConservative => Ok(self
                .most_conservative(&vin, mileage, condition)
                .await
                .map(ValuationOutcome::Single)),
            ValuationStrategy::Average => Ok(self
                .average(&vin, mileage, condition)
                .await?
                .map(ValuationOutcome::Single)),
            ValuationStrategy::AllProviders => {
                let valuations = self.collect_all(&vin, mileage, condition).await;
                if valuations.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(ValuationOutcome::Multiple(valuations)))
                }
            }
        }
    }

    /// Names of providers whose availability check currently passes.
    ///
    /// The checks run concurrently; order follows the configured list.
    pub async fn available_providers(&self) -> Vec<String> {
        let checks = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            async move {
                let available = provider.is_available().await;
                (provider.name().to_string(), available)
            }
        });

        join_all(checks)
            .await
            .into_iter()
            .filter(|(_, available)| *available)
            .map(|(name, _)| name)
            .collect()
    }

    /// Metadata of every configured provider, regardless of availability.
    #[must_use]
    pub fn providers_metadata(&self) -> Vec<ProviderMetadata> {
        self.providers
            .iter()
            .map(|provider| provider.metadata())
            .collect()
    }

    /// Walks providers in configured order and returns the first answer.
    ///
    /// Unavailable providers are skipped; erroring providers are logged and
    /// passed over. Providers after the first answer are never queried.
    async fn first_available(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> Option<VehicleValuation> {
        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::warn!(provider = provider.name(), "provider is not available");
                continue;
            }

            match provider.value_by_vin(vin, mileage, condition).await {
                Ok(Some(valuation)) => return Some(valuation),
                Ok(None) => {
                    tracing::debug!(
                        provider = provider.name(),
                        vin = %vin,
                        "provider has no data for vehicle"
                    );
                }
                Err(error) => {
                    tracing::error!(
                        provider = provider.name(),
                        %error,
                        "provider query failed, continuing with next provider"
                    );
                }
            }
        }

        None
    }

    /// Queries all providers and keeps the lowest trade-in valuation.
    ///
    /// Ties resolve to the first occurrence in configured provider order.
    async fn most_conservative(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> Option<VehicleValuation> {
        self.collect_all(vin, mileage, condition)
            .await
            .into_iter()
            .reduce(|lowest, current| {
                if current.conservative_value().amount() < lowest.conservative_value().amount() {
                    current
                } else {
                    lowest
                }
            })
    }

    /// Queries all providers and synthesizes an averaged valuation.
    ///
    /// Trade-in and retail figures are arithmetic means over the successful
    /// valuations; identity fields are copied from the first successful
    /// valuation without cross-provider reconciliation. The synthesized
    /// valuation carries no private-party figure and is attributed to
    /// [`AVERAGE_PROVIDER`].
    async fn average(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ValuationResult<Option<VehicleValuation>> {
        let valuations = self.collect_all(vin, mileage, condition).await;
        let Some(template) = valuations.first() else {
            return Ok(None);
        };

        let count = Decimal::from(valuations.len());
        let trade_in_sum: Decimal = valuations
            .iter()
            .map(|v| v.trade_in_value().amount())
            .sum();
        let retail_sum: Decimal = valuations.iter().map(|v| v.retail_value().amount()).sum();
        let avg_trade_in = trade_in_sum.checked_div(count).unwrap_or_default();
        let avg_retail = retail_sum.checked_div(count).unwrap_or_default();

        let mut metadata = Map::new();
        metadata.insert(
            "providersUsed".to_string(),
            json!(
                valuations
                    .iter()
                    .map(VehicleValuation::provider)
                    .collect::<Vec<_>>()
            ),
        );
        metadata.insert("valuationCount".to_string(), json!(valuations.len()));

        let mut synthesized = VehicleValuation::new(
            vin.clone(),
            AVERAGE_PROVIDER,
            ValuationAmount::from_decimal(avg_trade_in, template.trade_in_value().currency())?,
            ValuationAmount::from_decimal(avg_retail, template.retail_value().currency())?,
            condition,
            mileage,
            template.year(),
            template.make(),
            template.model(),
            Timestamp::now(),
        )?;

        if let Some(trim) = template.trim() {
            synthesized = synthesized.with_trim(trim);
        }

        Ok(Some(synthesized.with_metadata(metadata)))
    }

    /// Queries every provider concurrently and collects the successes.
    ///
    /// One task per provider; every task is awaited, so a provider failure
    /// never cancels its siblings. Awaiting the handles in spawn order keeps
    /// the collected valuations in configured provider order. Unavailable or
    /// erroring providers contribute nothing.
    async fn collect_all(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> Vec<VehicleValuation> {
        let mut handles = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let vin = vin.clone();

            handles.push(tokio::spawn(async move {
                if !provider.is_available().await {
                    tracing::warn!(provider = provider.name(), "provider is not available");
                    return None;
                }

                match provider.value_by_vin(&vin, mileage, condition).await {
                    Ok(valuation) => valuation,
                    Err(error) => {
                        tracing::error!(
                            provider = provider.name(),
                            %error,
                            "provider query failed"
                        );
                        None
                    }
                }
            }));
        }

        let mut valuations = Vec::new();
        for handle in handles {
            match handle.await {
                Ok(Some(valuation)) => valuations.push(valuation),
                Ok(None) => {}
                Err(error) => {
                    tracing::error!(%error, "provider task panicked");
                }
            }
        }

        valuations
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TEST_VIN: &str = "1HGCM82633A004352";

    #[derive(Debug, Clone)]
    enum MockBehavior {
        Valuation { trade_in: f64, retail: f64 },
        NoData,
        Failure,
    }

    #[derive(Debug)]
    struct MockProvider {
        name: &'static str,
        available: bool,
        behavior: MockBehavior,
        calls: AtomicUsize,
    }

    impl MockProvider {
        fn successful(name: &'static str, trade_in: f64, retail: f64) -> Arc<Self> {
            Arc::new(Self {
                name,
                available: true,
                behavior: MockBehavior::Valuation { trade_in, retail },
                calls: AtomicUsize::new(0),
            })
        }

        fn unavailable(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                available: false,
                behavior: MockBehavior::Valuation {
                    trade_in: 1.0,
                    retail: 1.0,
                },
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                available: true,
                behavior: MockBehavior::Failure,
                calls: AtomicUsize::new(0),
            })
        }

        fn no_data(name: &'static str) -> Arc<Self> {
            Arc::new(Self {
                name,
                available: true,
                behavior: MockBehavior::NoData,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ValuationProvider for MockProvider {
        fn name(&self) -> &str {
            self.name
        }

        async fn value_by_vin(
            &self,
            vin: &Vin,
            mileage: i64,
            condition: ValuationCondition,
        ) -> ProviderResult<Option<VehicleValuation>> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.behavior {
                MockBehavior::Valuation { trade_in, retail } => Ok(Some(
                    VehicleValuation::new(
                        vin.clone(),
                        self.name,
                        ValuationAmount::new(*trade_in).unwrap(),
                        ValuationAmount::new(*retail).unwrap(),
                        condition,
                        mileage,
                        2020,
                        "Toyota",
                        "Camry",
                        Timestamp::now(),
                    )
                    .unwrap()
                    .with_trim("SE"),
                )),
                MockBehavior::NoData => Ok(None),
                MockBehavior::Failure => Err(ProviderError::connection("socket reset")),
            }
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata::new(self.name, ["US"])
        }
    }

    fn service_of(providers: Vec<Arc<MockProvider>>) -> CollateralValuationService {
        let providers = providers
            .into_iter()
            .map(|p| p as Arc<dyn ValuationProvider>)
            .collect();
        CollateralValuationService::new(providers).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn rejects_empty_provider_list() {
            let err = CollateralValuationService::new(Vec::new()).unwrap_err();
            assert!(err.is_configuration());
        }

        #[test]
        fn counts_providers() {
            let service = service_of(vec![
                MockProvider::successful("Y", 18000.0, 23000.0),
                MockProvider::successful("Z", 17500.0, 22000.0),
            ]);
            assert_eq!(service.provider_count(), 2);
        }
    }

    mod vin_validation {
        use super::*;

        #[tokio::test]
        async fn invalid_vin_propagates_before_any_query() {
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let service = service_of(vec![Arc::clone(&y)]);

            let result = service
                .get_value_by_vin(
                    "NOT-A-VIN",
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::FirstAvailable,
                )
                .await;

            assert!(matches!(
                result,
                Err(ValuationError::Domain(domain)) if domain.is_vin_error()
            ));
            assert_eq!(y.calls(), 0);
        }
    }

    mod first_available {
        use super::*;

        #[tokio::test]
        async fn skips_unavailable_and_short_circuits() {
            let x = MockProvider::unavailable("X");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![Arc::clone(&x), Arc::clone(&y), Arc::clone(&z)]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::FirstAvailable,
                )
                .await
                .unwrap()
                .unwrap();

            let valuation = outcome.as_single().unwrap();
            assert_eq!(valuation.provider(), "Y");
            assert_eq!(x.calls(), 0);
            assert_eq!(z.calls(), 0);
        }

        #[tokio::test]
        async fn continues_past_a_failing_provider() {
            let bad = MockProvider::failing("BAD");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let service = service_of(vec![Arc::clone(&bad), Arc::clone(&y)]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::FirstAvailable,
                )
                .await
                .unwrap()
                .unwrap();

            assert_eq!(outcome.as_single().unwrap().provider(), "Y");
            assert_eq!(bad.calls(), 1);
        }

        #[tokio::test]
        async fn continues_past_a_provider_with_no_data() {
            let empty = MockProvider::no_data("EMPTY");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let service = service_of(vec![empty, Arc::clone(&y)]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::FirstAvailable,
                )
                .await
                .unwrap();

            assert_eq!(outcome.unwrap().as_single().unwrap().provider(), "Y");
        }
    }

    mod most_conservative {
        use super::*;

        #[tokio::test]
        async fn returns_the_lowest_trade_in() {
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![y, z]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::MostConservative,
                )
                .await
                .unwrap()
                .unwrap();

            let valuation = outcome.as_single().unwrap();
            assert_eq!(valuation.provider(), "Z");
            assert_eq!(
                valuation.conservative_value().amount(),
                Decimal::from(17500)
            );
        }

        #[tokio::test]
        async fn ties_resolve_to_the_first_provider() {
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 18000.0, 22000.0);
            let service = service_of(vec![y, z]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::MostConservative,
                )
                .await
                .unwrap()
                .unwrap();

            assert_eq!(outcome.as_single().unwrap().provider(), "Y");
        }
    }

    mod average {
        use super::*;

        #[tokio::test]
        async fn synthesizes_means_and_attribution() {
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![y, z]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::Average,
                )
                .await
                .unwrap()
                .unwrap();

            let valuation = outcome.as_single().unwrap();
            assert_eq!(valuation.provider(), AVERAGE_PROVIDER);
            assert_eq!(valuation.trade_in_value().amount(), Decimal::from(17750));
            assert_eq!(valuation.retail_value().amount(), Decimal::from(22500));
            assert!(valuation.private_party_value().is_none());

            assert_eq!(
                valuation.metadata().get("providersUsed"),
                Some(&json!(["Y", "Z"]))
            );
            assert_eq!(valuation.metadata().get("valuationCount"), Some(&json!(2)));
        }

        #[tokio::test]
        async fn identity_fields_come_from_the_first_success() {
            let x = MockProvider::unavailable("X");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![x, y, z]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Fair,
                    ValuationStrategy::Average,
                )
                .await
                .unwrap()
                .unwrap();

            let valuation = outcome.as_single().unwrap();
            assert_eq!(valuation.year(), 2020);
            assert_eq!(valuation.make(), "Toyota");
            assert_eq!(valuation.trim(), Some("SE"));
            assert_eq!(valuation.condition(), ValuationCondition::Fair);
            assert_eq!(valuation.mileage(), 42000);
            assert_eq!(
                valuation.metadata().get("providersUsed"),
                Some(&json!(["Y", "Z"]))
            );
        }
    }

    mod all_providers {
        use super::*;

        #[tokio::test]
        async fn excludes_unavailable_and_preserves_order() {
            let x = MockProvider::unavailable("X");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![Arc::clone(&x), y, z]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::AllProviders,
                )
                .await
                .unwrap()
                .unwrap();

            let valuations = outcome.as_slice();
            assert_eq!(valuations.len(), 2);
            assert_eq!(valuations[0].provider(), "Y");
            assert_eq!(valuations[1].provider(), "Z");
            assert_eq!(x.calls(), 0);
        }

        #[tokio::test]
        async fn a_failing_provider_does_not_poison_the_fan_out() {
            let bad = MockProvider::failing("BAD");
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let service = service_of(vec![Arc::clone(&bad), y]);

            let outcome = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::AllProviders,
                )
                .await
                .unwrap()
                .unwrap();

            assert_eq!(outcome.count(), 1);
            assert_eq!(bad.calls(), 1);
        }
    }

    mod total_failure {
        use super::*;

        #[tokio::test]
        async fn every_strategy_returns_absent() {
            for strategy in [
                ValuationStrategy::FirstAvailable,
                ValuationStrategy::MostConservative,
                ValuationStrategy::Average,
                ValuationStrategy::AllProviders,
            ] {
                let service = service_of(vec![
                    MockProvider::unavailable("X"),
                    MockProvider::failing("BAD"),
                    MockProvider::no_data("EMPTY"),
                ]);

                let outcome = service
                    .get_value_by_vin(TEST_VIN, 42000, ValuationCondition::Good, strategy)
                    .await
                    .unwrap();

                assert!(outcome.is_none(), "strategy {strategy} should be absent");
            }
        }
    }

    mod provider_listing {
        use super::*;

        #[tokio::test]
        async fn available_providers_filters_by_health() {
            let service = service_of(vec![
                MockProvider::successful("Y", 18000.0, 23000.0),
                MockProvider::unavailable("X"),
                MockProvider::successful("Z", 17500.0, 22000.0),
            ]);

            assert_eq!(service.available_providers().await, vec!["Y", "Z"]);
        }

        #[tokio::test]
        async fn metadata_covers_every_provider() {
            let service = service_of(vec![
                MockProvider::successful("Y", 18000.0, 23000.0),
                MockProvider::unavailable("X"),
            ]);

            let metadata = service.providers_metadata();
            assert_eq!(metadata.len(), 2);
            assert_eq!(metadata[0].name, "Y");
            assert_eq!(metadata[1].name, "X");
        }
    }

    mod outcome {
        use super::*;

        #[tokio::test]
        async fn serializes_single_as_object_and_multiple_as_array() {
            let y = MockProvider::successful("Y", 18000.0, 23000.0);
            let z = MockProvider::successful("Z", 17500.0, 22000.0);
            let service = service_of(vec![y, z]);

            let single = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::FirstAvailable,
                )
                .await
                .unwrap()
                .unwrap();
            assert!(serde_json::to_value(&single).unwrap().is_object());

            let multiple = service
                .get_value_by_vin(
                    TEST_VIN,
                    42000,
                    ValuationCondition::Good,
                    ValuationStrategy::AllProviders,
                )
                .await
                .unwrap()
                .unwrap();
            let value = serde_json::to_value(&multiple).unwrap();
            assert!(value.is_array());
            assert_eq!(value.as_array().unwrap().len(), 2);
        }
    }
}
