use std::future::Future;

use thiserror::Error;
use time::Date;

use crate::CurrencyPair;

/// Failure modes at the rate-service boundary.
///
/// None of these reach the volatility engine: the fetch step collapses every
/// variant into the missing-price sentinel before a series is built.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from rate service")]
    Status { status: u16 },

    #[error("malformed rate response: {0}")]
    Malformed(String),
}

/// Remote source of daily exchange rates.
///
/// One logical call per calendar day. Implementations do not retry, cache,
/// or rate-limit; a caller that wants those concerns layers them outside.
pub trait RateSource {
    /// The pair's exchange rate as observed on `date`.
    fn daily_rate(
        &self,
        pair: &CurrencyPair,
        date: Date,
    ) -> impl Future<Output = Result<f64, SourceError>> + Send;
}
