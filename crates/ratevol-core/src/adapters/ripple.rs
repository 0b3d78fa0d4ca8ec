use serde::Deserialize;
use time::Date;

use crate::domain::Asset;
use crate::source::{RateSource, SourceError};
use crate::CurrencyPair;

pub const DEFAULT_BASE_URL: &str = "https://data.ripple.com/v2";

/// Ripple Data API `exchange_rates` adapter.
///
/// One `GET {base_url}/exchange_rates/{base}/{counter}?date=<day>T00:00:00Z`
/// per requested day. The API reports the rate either as a JSON number or as
/// a numeric string depending on magnitude.
#[derive(Debug, Clone)]
pub struct RippleDataAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl Default for RippleDataAdapter {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl RippleDataAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn rate_url(&self, pair: &CurrencyPair) -> String {
        format!(
            "{}/exchange_rates/{}/{}",
            self.base_url,
            pair_segment(&pair.base),
            pair_segment(&pair.counter)
        )
    }
}

impl RateSource for RippleDataAdapter {
    async fn daily_rate(&self, pair: &CurrencyPair, date: Date) -> Result<f64, SourceError> {
        let response = self
            .client
            .get(self.rate_url(pair))
            .query(&[("date", format!("{date}T00:00:00Z"))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let payload: ExchangeRateResponse = serde_json::from_str(&body)
            .map_err(|error| SourceError::Malformed(error.to_string()))?;
        payload.rate.as_f64()
    }
}

/// `CUR` for the native asset, `CUR+issuer` for IOUs.
fn pair_segment(asset: &Asset) -> String {
    match asset.issuer() {
        Some(issuer) => format!(
            "{}+{}",
            urlencoding::encode(asset.currency()),
            urlencoding::encode(issuer)
        ),
        None => asset.currency().to_owned(),
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeRateResponse {
    rate: RateField,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RateField {
    Number(f64),
    Text(String),
}

impl RateField {
    fn as_f64(&self) -> Result<f64, SourceError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw
                .parse()
                .map_err(|_| SourceError::Malformed(format!("non-numeric rate '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Asset;

    const BITSTAMP: &str = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B";

    fn xrp_usd() -> CurrencyPair {
        CurrencyPair::new(
            Asset::xrp(),
            Asset::new("USD", Some(BITSTAMP)).expect("valid asset"),
        )
    }

    #[test]
    fn builds_rate_url_without_native_issuer() {
        let adapter = RippleDataAdapter::with_base_url("https://data.ripple.com/v2/");
        assert_eq!(
            adapter.rate_url(&xrp_usd()),
            format!("https://data.ripple.com/v2/exchange_rates/XRP/USD+{BITSTAMP}")
        );
    }

    #[test]
    fn parses_numeric_rate() {
        let payload: ExchangeRateResponse =
            serde_json::from_str(r#"{"result":"success","rate":0.00431}"#).expect("must parse");
        assert_eq!(payload.rate.as_f64().expect("numeric"), 0.00431);
    }

    #[test]
    fn parses_string_rate() {
        let payload: ExchangeRateResponse =
            serde_json::from_str(r#"{"rate":"0.0065321"}"#).expect("must parse");
        assert_eq!(payload.rate.as_f64().expect("numeric"), 0.0065321);
    }

    #[test]
    fn rejects_non_numeric_string_rate() {
        let payload: ExchangeRateResponse =
            serde_json::from_str(r#"{"rate":"unavailable"}"#).expect("must parse");
        let err = payload.rate.as_f64().expect_err("must fail");
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn rejects_body_without_rate() {
        let result: Result<ExchangeRateResponse, _> =
            serde_json::from_str(r#"{"result":"error"}"#);
        assert!(result.is_err());
    }
}
