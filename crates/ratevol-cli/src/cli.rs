//! CLI argument definitions for ratevol.
//!
//! Every flag default reproduces the classic XRP/USD.Bitstamp report:
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base` | `XRP` | Base currency code |
//! | `--base-issuer` | none | Issuing address for the base currency |
//! | `--counter` | `USD` | Counter currency code |
//! | `--counter-issuer` | Bitstamp | Issuing address for the counter currency |
//! | `--start` | `2013-04-01` | First day of the range |
//! | `--end` | today (UTC) | Last day of the range |
//! | `--window` | `7` | Rolling window length in days |
//! | `--ddof` | `sample` | Standard-deviation divisor |
//! | `--api-url` | data.ripple.com | Rate service base URL |
//! | `--chart` | `volatility.svg` | Chart output path |
//! | `--no-chart` | `false` | Emit the delimited report only |

use std::path::PathBuf;

use clap::Parser;
use time::format_description::well_known::Iso8601;
use time::{Date, OffsetDateTime};

use ratevol_core::adapters::ripple::DEFAULT_BASE_URL;
use ratevol_core::{Asset, CurrencyPair, DegreesOfFreedom, ValidationError, WindowSpec};

/// Daily exchange-rate volatility reporter for Ripple ledger pairs.
///
/// Fetches one rate per calendar day from the Ripple Data API, computes a
/// rolling-window standard deviation over the series, and emits a delimited
/// report plus three stacked time-aligned charts.
#[derive(Debug, Parser)]
#[command(name = "ratevol", version, about = "Exchange-rate volatility reporter")]
pub struct Cli {
    /// Base currency code.
    #[arg(long, default_value = "XRP")]
    pub base: String,

    /// Issuing address for the base currency (omit for XRP).
    #[arg(long)]
    pub base_issuer: Option<String>,

    /// Counter currency code.
    #[arg(long, default_value = "USD")]
    pub counter: String,

    /// Issuing address for the counter currency (pass '' for XRP).
    #[arg(long, default_value = "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B")]
    pub counter_issuer: Option<String>,

    /// First day of the range (ISO-8601 calendar day).
    #[arg(long, default_value = "2013-04-01")]
    pub start: String,

    /// Last day of the range (ISO-8601 calendar day). Defaults to today, UTC.
    #[arg(long)]
    pub end: Option<String>,

    /// Rolling window length in days.
    #[arg(long, default_value_t = 7)]
    pub window: usize,

    /// Standard-deviation divisor: 'population' (0) or 'sample' (1).
    #[arg(long, default_value = "sample")]
    pub ddof: String,

    /// Rate service base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Chart output path (SVG).
    #[arg(long, default_value = "volatility.svg")]
    pub chart: PathBuf,

    /// Skip chart rendering, emit the delimited report only.
    #[arg(long, default_value_t = false)]
    pub no_chart: bool,
}

/// Validated run parameters, built once from the parsed flags and passed
/// down explicitly — nothing reads configuration globals.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub pair: CurrencyPair,
    pub start: Date,
    pub end: Date,
    pub spec: WindowSpec,
}

impl Cli {
    pub fn to_config(&self) -> Result<ReportConfig, ValidationError> {
        let base = Asset::new(&self.base, self.base_issuer.as_deref())?;
        let counter = Asset::new(&self.counter, self.counter_issuer.as_deref())?;

        let start = parse_day(&self.start)?;
        let end = match &self.end {
            Some(raw) => parse_day(raw)?,
            None => OffsetDateTime::now_utc().date(),
        };

        let ddof: DegreesOfFreedom = self.ddof.parse()?;
        let spec = WindowSpec::new(self.window, ddof)?;

        Ok(ReportConfig {
            pair: CurrencyPair::new(base, counter),
            start,
            end,
            spec,
        })
    }
}

fn parse_day(raw: &str) -> Result<Date, ValidationError> {
    Date::parse(raw.trim(), &Iso8601::DEFAULT).map_err(|_| ValidationError::InvalidDate {
        value: raw.to_owned(),
    })
}
