//! # Valuation Providers
//!
//! The provider port and its concrete adapters.
//!
//! [`traits::ValuationProvider`] is the capability contract; the adapters
//! translate each data source's native response shape into the canonical
//! [`VehicleValuation`](crate::domain::entities::vehicle_valuation::VehicleValuation).
//! The live wire protocols are owned by the adapters and are not part of
//! this crate's contract.

pub mod chrome_data;
pub mod error;
pub mod kbb;
pub mod nada;
pub mod traits;

pub use chrome_data::ChromeDataProvider;
pub use error::{ProviderError, ProviderResult};
pub use kbb::KbbProvider;
pub use nada::NadaProvider;
pub use traits::{ProviderMetadata, ValuationProvider};
