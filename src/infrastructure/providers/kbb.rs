//! # Kelley Blue Book Provider Adapter
//!
//! Adapter mapping KBB's native valuation shape to the canonical
//! [`VehicleValuation`].
//!
//! KBB is the only provider in the default set that reports a private-party
//! value, and it buckets trade-in figures by condition tier. KBB publishes no
//! "poor" tier, so POOR vehicles price at the fair tier. As with the other
//! adapters, the live wire call is not integrated; the documented sample
//! payload stands in behind the same typed parse.

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

/// Default KBB API base URL.
const DEFAULT_API_URL: &str = "https://api.kbb.com";

/// Environment variable holding the KBB API key.
const API_KEY_VAR: &str = "KBB_API_KEY";

/// Environment variable overriding the KBB API base URL.
const API_URL_VAR: &str = "KBB_API_URL";

/// Kelley Blue Book valuation provider.
///
/// # Examples
///
/// ```
/// use collateral_valuation::infrastructure::providers::kbb::KbbProvider;
/// use collateral_valuation::infrastructure::providers::traits::ValuationProvider;
///
/// let provider = KbbProvider::new("test-key", "https://api.kbb.com");
/// assert_eq!(provider.name(), "KBB");
/// ```
#[derive(Debug, Clone)]
pub struct KbbProvider {
    api_key: String,
    api_url: String,
}

/// KBB's native valuation response shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KbbValuationResponse {
    vehicle_info: KbbVehicleInfo,
    pricing: KbbPricing,
    pricing_date: String,
}

#[derive(Debug, Clone, Deserialize)]
struct KbbVehicleInfo {
    year: i32,
    make: String,
    model: String,
    trim: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KbbPricing {
    dealer_retail: f64,
    private_party: f64,
    trade_in_value: KbbTradeInTiers,
}

/// KBB's condition-tiered trade-in figures.
#[derive(Debug, Clone, Deserialize)]
struct KbbTradeInTiers {
    excellent: f64,
    good: f64,
    fair: f64,
}

impl KbbProvider {
    /// Stable provider identifier.
    pub const PROVIDER_NAME: &'static str = "KBB";

    /// Creates an adapter with explicit configuration.
    #[must_use]
    pub fn new(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        let provider = Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
        };
        if provider.api_key.is_empty() {
            tracing::warn!("KBB API key not configured");
        }
        provider
    }

    /// Creates an adapter from `KBB_API_KEY` / `KBB_API_URL`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(API_KEY_VAR).unwrap_or_default(),
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        )
    }

    /// Fetches KBB's valuation payload for the vehicle.
    ///
    /// The request a live adapter would issue is logged at debug level; the
    /// documented sample payload stands in for the response.
    fn fetch_valuation(
        &self,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<Option<KbbValuationResponse>> {
        tracing::debug!(
            url = %format!("{}/v1/vehicle/vin/{}/value", self.api_url, vin),
            mileage,
            condition = Self::condition_param(condition),
            "KBB valuation request prepared"
        );

        let payload = json!({
            "vin": vin.as_str(),
            "vehicleInfo": {
                "year": 2020,
                "make": "Toyota",
                "model": "Camry",
                "trim": "SE Sedan 4D",
            },
            "pricing": {
                "dealerRetail": 24200,
                "privateParty": 21500,
                "tradeInValue": {
                    "excellent": 19500,
                    "good": 18200,
                    "fair": 16800,
                },
            },
            "mileage": mileage,
            "pricingDate": Timestamp::now().to_iso8601(),
        });

        let response = serde_json::from_value(payload)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        Ok(Some(response))
    }

    /// Maps KBB's native shape to the canonical valuation entity.
    fn map_response(
        &self,
        response: KbbValuationResponse,
        vin: &Vin,
        mileage: i64,
        condition: ValuationCondition,
    ) -> ProviderResult<VehicleValuation> {
        let tiers = &response.pricing.trade_in_value;
        let trade_in = ValuationAmount::new(Self::trade_in_for_condition(tiers, condition))
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        let retail = ValuationAmount::new(response.pricing.dealer_retail)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;
        let private_party = ValuationAmount::new(response.pricing.private_party)
            .map_err(|e| ProviderError::invalid_response(e.to_string()))?;

        let pricing_date = Timestamp::parse_rfc3339(&response.pricing_date).ok_or_else(|| {
            ProviderError::invalid_response(format!(
                "pricing date is not a valid timestamp: {}",
                response.pricing_date
            ))
        })?;

        let mut metadata = Map::new();
        metadata.insert("tradeInExcellent".to_string(), json!(tiers.excellent));
        metadata.insert("tradeInGood".to_string(), json!(tiers.good));
        metadata.insert("tradeInFair".to_string(), json!(tiers.fair));

        let mut valuation = VehicleValuation::new(
            vin.clone(),
            Self::PROVIDER_NAME,
            trade_in,
            retail,
            condition,
            mileage,
            response.vehicle_info.year,
            response.vehicle_info.make,
            response.vehicle_info.model,
            pricing_date,
        )
        .map_err(|e| ProviderError::invalid_response(e.to_string()))?
        .with_private_party_value(private_party)
        .with_metadata(metadata);

        if let Some(trim) = response.vehicle_info.trim {
            valuation = valuation.with_trim(trim);
        }

        Ok(valuation)
    }

    /// Selects the trade-in figure for the requested condition.
    ///
    /// KBB publishes no "poor" tier; fair is the floor.
    fn trade_in_for_condition(tiers: &KbbTradeInTiers, condition: ValuationCondition) -> f64 {
        match condition {
            ValuationCondition::Excellent => tiers.excellent,
            ValuationCondition::Good => tiers.good,
            ValuationCondition::Fair | ValuationCondition::Poor => tiers.fair,
        }
    }

    /// KBB's condition vocabulary.
    fn condition_param(condition: ValuationCondition) -> &'static str {
        match condition {
            ValuationCondition::Excellent => "Excellent",
            ValuationCondition::Good => "Very Good",
            ValuationCondition::Fair => "Good",
            ValuationCondition::Poor => "Fair",
        }
    }
}

#[async_trait]
impl ValuationProvider for KbbProvider {
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
            return Err(ProviderError::not_configured("KBB API key is not set"));
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
        ProviderMetadata::new("Kelley Blue Book", ["US"])
            .with_max_requests_per_day(1000)
            .with_average_response_time_ms(600)
    }
}
