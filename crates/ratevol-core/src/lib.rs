//! Core contracts for ratevol.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - Calendar-day range enumeration
//! - The rate-source boundary and the Ripple Data API adapter
//! - The sequential series fetch loop
//! - The rolling-window volatility engine

pub mod adapters;
pub mod calendar;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod source;
pub mod volatility;

pub use adapters::RippleDataAdapter;
pub use calendar::date_range;
pub use domain::{Asset, CurrencyPair, PricePoint, PriceSeries};
pub use error::ValidationError;
pub use fetch::fetch_price_series;
pub use source::{RateSource, SourceError};
pub use volatility::{rolling_volatility, DegreesOfFreedom, VolatilitySeries, WindowSpec};
