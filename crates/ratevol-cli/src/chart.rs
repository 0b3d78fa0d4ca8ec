//! Three stacked time-aligned charts: price, volatility, normalized
//! volatility. Undefined positions split a line into segments, leaving
//! visible gaps instead of plotting zeros.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use time::Date;

use ratevol_core::{CurrencyPair, PriceSeries, VolatilitySeries};

use crate::error::CliError;

const WIDTH: u32 = 1024;
const HEIGHT: u32 = 768;
/// Tick spacing target, one label per calendar quarter.
const DAYS_PER_QUARTER: usize = 91;

pub fn render(
    path: &Path,
    pair: &CurrencyPair,
    series: &PriceSeries,
    volatility: &VolatilitySeries,
) -> Result<(), CliError> {
    draw(path, pair, series, volatility).map_err(|error| CliError::Chart(error.to_string()))
}

fn draw(
    path: &Path,
    pair: &CurrencyPair,
    series: &PriceSeries,
    volatility: &VolatilitySeries,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(&format!("{pair} Volatility"), ("sans-serif", 24))?;

    let dates: Vec<Date> = series.points().iter().map(|point| point.date).collect();
    let prices: Vec<f64> = series
        .points()
        .iter()
        .map(|point| point.rate.unwrap_or(f64::NAN))
        .collect();

    let rows = root.split_evenly((3, 1));
    draw_panel(&rows[0], &prices, BLUE, &pair.to_string(), None)?;
    draw_panel(&rows[1], volatility.raw(), RED, "Volatility", None)?;
    draw_panel(
        &rows[2],
        volatility.normalized(),
        GREEN,
        "Normalized Volatility",
        Some(&dates),
    )?;

    root.present()?;
    Ok(())
}

/// One chart row. `dates` is passed for the bottom panel only, which owns
/// the shared x-axis labels; upper panels keep their labels hidden.
fn draw_panel(
    area: &DrawingArea<SVGBackend, Shift>,
    values: &[f64],
    color: RGBColor,
    label: &str,
    dates: Option<&[Date]>,
) -> Result<(), Box<dyn std::error::Error>> {
    let x_max = (values.len() as i32 - 1).max(1);
    let (y_min, y_max) = value_bounds(values);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(if dates.is_some() { 30 } else { 0 })
        .y_label_area_size(70)
        .build_cartesian_2d(0..x_max, y_min..y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.y_desc(label);
    if let Some(dates) = dates {
        let labels = (values.len() / DAYS_PER_QUARTER).clamp(2, 16);
        let formatter = |index: &i32| quarter_label(dates, *index);
        mesh.x_labels(labels).x_label_formatter(&formatter).draw()?;
    } else {
        mesh.draw()?;
    }

    for run in finite_runs(values) {
        chart.draw_series(LineSeries::new(run, &color))?;
    }

    Ok(())
}

/// Splits a series into contiguous finite runs; NaN positions become gaps.
fn finite_runs(values: &[f64]) -> Vec<Vec<(i32, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (index, &value) in values.iter().enumerate() {
        if value.is_finite() {
            current.push((index as i32, value));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Y bounds over the finite values only, padded so flat series stay visible.
fn value_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        if value.is_finite() {
            min = min.min(value);
            max = max.max(value);
        }
    }
    if min > max {
        return (0.0, 1.0);
    }

    let span = max - min;
    let pad = if span > 0.0 {
        span * 0.05
    } else {
        max.abs().max(1.0) * 0.05
    };
    (min - pad, max + pad)
}

/// The containing quarter of the date at `index`, as `YYYY/MM` of the
/// quarter's first month.
fn quarter_label(dates: &[Date], index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|index| dates.get(index))
        .map(|date| {
            let month = date.month() as u8;
            let quarter_month = 1 + (month - 1) / 3 * 3;
            format!("{}/{:02}", date.year(), quarter_month)
        })
        .unwrap_or_default()
}
