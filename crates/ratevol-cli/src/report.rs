use std::io::{self, Write};

use ratevol_core::{PriceSeries, VolatilitySeries};

pub const HEADER: &str = "Date,Price,StDev,NormStDev";

/// Writes the aligned report, one comma-delimited row per day.
///
/// Values pass through untouched: the leading `0` padding of the deviation
/// column is printed as-is, and absent values render as `NaN` so a consumer
/// sees gaps rather than zeros.
pub fn write_csv<W: Write>(
    mut out: W,
    series: &PriceSeries,
    volatility: &VolatilitySeries,
) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for ((point, &dev), &norm) in series
        .points()
        .iter()
        .zip(volatility.raw())
        .zip(volatility.normalized())
    {
        writeln!(out, "{},{},{},{}", point.date, price_cell(point.rate), dev, norm)?;
    }
    Ok(())
}

fn price_cell(rate: Option<f64>) -> String {
    match rate {
        Some(value) => value.to_string(),
        None => String::from("NaN"),
    }
}
