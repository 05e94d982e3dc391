//! # NADA Guides Provider Adapter
//!
//! Adapter mapping NADA's native valuation shape to the canonical
//! [`VehicleValuation`].
//!
//! NADA reports trade-in and retail figures but no private-party value; its
//! clean/rough trade-in variants are preserved in the valuation metadata.
//! The live wire call is not integrated - the adapter logs the request it
//! would issue and maps the documented sample payload through the same typed
//! deserialization a real response would take.

use crate::domain::entities::vehicle_valuation::VehicleValuation;
use crate::domain::value_objects::amount::ValuationAmount;
use crate::domain::value_objects::enums::ValuationCondition;
use crate::domain::value_objects::timestamp::Timestamp;
use crate::domain::value_objects::vin::Vin;
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::traits::{ProviderMetadata, ValuationProvider};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, json};

/// Default NADA API base URL.
const DEFAULT_API_URL: &str = "https://api.nadaguides.com";

/// Environment variable holding the NADA API key.
const API_KEY_VAR: &str = "NADA_API_KEY";

/// Environment variable overriding the NADA API base URL.
const API_URL_VAR: &str = "NADA_API_URL";

/// NADA Guides valuation provider.
///
/// # Examples
///
/// ```
/// use collateral_valuation::infrastructure::providers::nada::NadaProvider;
/// use collateral_valuation::infrastructure::providers::traits::ValuationProvider;
///
/// let provider = NadaProvider::new("test-key", "https://api.nadaguides.com");
/// assert_eq!(provider.name(), "NADA");
/// ```
#[derive(Debug, Clone)]
pub struct NadaProvider {
    api_key: String,
    api_url: String,
}

/// NADA's native valuation response shape.
#[derive(Debug, Clone, Deserialize)]
struct NadaValuationResponse {
    vehicle: NadaVehicle,
    valuations: NadaValuations,
}

#[derive(Debug, Clone, Deserialize)]
struct NadaVehicle {
    year: i32,
    make: String,
    model: String,
    trim: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NadaValuations {
    trade_in: f64,
    retail: f64,
    clean_trade_in: f64,
    rough_trade_in: f64,
}

impl NadaProvider {
    /// Stable provider identifier.
    pub const PROVIDER_NAME: &'static str = "NADA";

    /// Creates an adapter with explicit configuration.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let provider = Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        };
        if provider.api_key.is_empty() {
            tracing::warn!("NADA API key not configured");
        }
        provider
    }

    /// Creates an adapter from `NADA_API_KEY` / `NADA_API_URL`.
    ///
    /// A missing key leaves the provider unavailable; a missing URL falls
    /// back to the public endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(API_KEY_VAR).unwrap_or_default(),
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )
    }

    /// Fetches NADA's valuation payload for the vehicle.
    ///
    /// The live NADA integration is not wired up; the request a real adapter
    /// would POST is logged at debug level and the documented sample payload
    /// stands in for the response, passing through the same typed parse.
    fn fetch_valuation(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<Option<NadaValuationResponse>> {
        tracing::debug!(
            url = %format!("{}/vehicle-valuations", self.api_url),
            vin = %vin,
            mileage,
            condition = Self::condition_param(condition),
            "NADA valuation request prepared"
        );

        let payload = json!({
            "vin": vin.as_str(),
            "vehicle": {
                "year": 2020,
                "make": "Toyota",
                "model": "Camry",
                "trim": "SE",
            },
            "valuations": {
                "tradeIn": 18500,
                "retail": 23500,
                "cleanTradeIn": 19200,
                "roughTradeIn": 17800,
            },
            "mileage": mileage,
            "condition": Self::condition_param(condition),
        });

        let response = serde_json::from_value(payload)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        Ok(Some(response))
    }

    /// Maps NADA's native shape to the canonical valuation entity.
    fn map_response(
        &self,
        response: NadaValuationResponse,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<VehicleValuation> {
        let trade_in = ValuationAmount::new(response.valuations.trade_in)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        let retail = ValuationAmount::new(response.valuations.retail)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        let mut metadata = Map::new();
        metadata.insert(
            "cleanTradeIn".to_string(),
            json!(response.valuations.clean_trade_in),
        );
        metadata.insert(
            "roughTradeIn".to_string(),
            json!(response.valuations.rough_trade_in),
        );

        // NADA does not report a private-party figure.
        let mut valuation = VehicleValuation::new(
            vin.clone(),
            Self::PROVIDER_NAME,
            trade_in,
            retail,
            condition,
            mileage,
            response.vehicle.year,
            response.vehicle.make,
            response.vehicle.model,
            Timestamp::now(),
        )
        .map_err(|e| ProviderError::invalid_response(e.to_string()))?
        .with_metadata(metadata);

        if let Some(trim) = response.vehicle.trim {
            valuation = valuation.with_trim(trim);
        }

        Ok(valuation)
    }

    /// NADA's condition vocabulary.
    fn condition_param(condition: ValuationCondition) -> &'static str {
        match condition {
            ValuationCondition::Excellent => "excellent",
            ValuationCondition::Good => "clean",
            ValuationCondition::Fair => "average",
            ValuationCondition::Poor => "rough",
        }
    }
}

#[async_trait]
impl ValuationProvider for NadaProvider {
    fn name(&self) -> &str {
        Self::PROVIDER_NAME
    }

    async fn value_by_vin(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<Option<VehicleValuation>> {
        if self.api_key.is_empty() {
            return Err(ProviderError::not_configured("NADA API key is not set"));
        }

        match self.fetch_valuation(vin, mileage, condition)? {
            Some(response) => self.map_response(response, vin, mileage, condition).map(Some),
            None => Ok(None),
        }
    }

    async fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new("NADA Guides", ["US"])
            .with_max_requests_per_day(1000)
            .with_average_response_time_ms(500)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn provider() -> NadaProvider {
        NadaProvider::new("test-key", DEFAULT_API_URL)
    }

    fn test_vin() -> Vin {
        Vin::new("1HGCM82633A004352").unwrap()
    }

    #[tokio::test]
    async fn maps_sample_payload() {
        let valuation = provider()
            .value_by_vin(&test_vin(), 42000, ValuationCondition::Good)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(valuation.provider(), "NADA");
        assert_eq!(valuation.make(), "Toyota");
        assert_eq!(valuation.model(), "Camry");
        assert_eq!(valuation.trim(), Some("SE"));
        assert_eq!(valuation.mileage(), 42000);
        assert!(valuation.private_party_value().is_none());
    }

    #[tokio::test]
    async fn keeps_trade_in_variants_in_metadata() {
        let valuation = provider()
            .value_by_vin(&test_vin(), 42000, ValuationCondition::Good)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            valuation.metadata().get("cleanTradeIn"),
            Some(&json!(19200.0))
        );
        assert_eq!(
            valuation.metadata().get("roughTradeIn"),
            Some(&json!(17800.0))
        );
    }

    #[tokio::test]
    async fn unconfigured_key_fails_distinctly() {
        let provider = NadaProvider::new("", DEFAULT_API_URL);
        let err = provider
            .value_by_vin(&test_vin(), 42000, ValuationCondition::Good)
            .await
            .unwrap_err();
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn availability_tracks_api_key() {
        assert!(provider().is_available().await);
        assert!(!NadaProvider::new("", DEFAULT_API_URL).is_available().await);
    }

    #[test]
    fn condition_vocabulary() {
        assert_eq!(
            NadaProvider::condition_param(ValuationCondition::Excellent),
            "excellent"
        );
        assert_eq!(
            NadaProvider::condition_param(ValuationCondition::Good),
            "clean"
        );
        assert_eq!(
            NadaProvider::condition_param(ValuationCondition::Fair),
            "average"
        );
        assert_eq!(
            NadaProvider::condition_param(ValuationCondition::Poor),
            "rough"
        );
    }

    #[test]
    fn metadata_constants() {
        let metadata = provider().metadata();
        assert_eq!(metadata.name, "NADA Guides");
        assert_eq!(metadata.max_requests_per_day, Some(1000));
        assert_eq!(metadata.supported_countries, vec!["US"]);
    }
}
