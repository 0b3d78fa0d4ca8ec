use time::Date;

use tracing::{debug, info, warn};

use crate::domain::{PricePoint, PriceSeries};
use crate::source::RateSource;
use crate::{CurrencyPair, ValidationError};

/// Fetches one rate per date, strictly in order, and builds the price series.
///
/// This is the whole data-quality boundary: a fetch failure, a reported rate
/// of exactly zero, or a non-finite value all become the missing sentinel
/// here. The engine downstream never observes a raw failure, and the series
/// always covers every requested date.
pub async fn fetch_price_series<S: RateSource>(
    source: &S,
    pair: &CurrencyPair,
    dates: &[Date],
) -> Result<PriceSeries, ValidationError> {
    info!(%pair, days = dates.len(), "fetching daily exchange rates");

    let mut points = Vec::with_capacity(dates.len());
    for &date in dates {
        let rate = match source.daily_rate(pair, date).await {
            Ok(rate) if rate == 0.0 => {
                debug!(%date, "zero rate reported, treating as missing");
                None
            }
            Ok(rate) if !rate.is_finite() => {
                warn!(%date, rate, "non-finite rate reported, treating as missing");
                None
            }
            Ok(rate) => Some(rate),
            Err(error) => {
                warn!(%date, %error, "rate fetch failed, treating as missing");
                None
            }
        };
        points.push(PricePoint::new(date, rate));
    }

    PriceSeries::new(points)
}
