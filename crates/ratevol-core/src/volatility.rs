//! Rolling-window volatility over a gap-containing daily price series.
//!
//! Missing observations are excluded from the window statistics entirely;
//! they are never coerced to zero. Positions where too few numeric values
//! remain degrade to `NAN` rather than failing the whole computation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Placeholder emitted while the first full window accumulates, keeping the
/// output index-aligned with the input series. Not a volatility claim.
const PADDING: f64 = 0.0;

/// Divisor adjustment for the standard-deviation formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegreesOfFreedom {
    /// Divide by the sample count (population statistic).
    Population,
    /// Divide by count − 1 (sample statistic).
    Sample,
}

impl DegreesOfFreedom {
    pub const fn offset(self) -> usize {
        match self {
            Self::Population => 0,
            Self::Sample => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Population => "population",
            Self::Sample => "sample",
        }
    }
}

impl Display for DegreesOfFreedom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreesOfFreedom {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "0" | "population" => Ok(Self::Population),
            "1" | "sample" => Ok(Self::Sample),
            other => Err(ValidationError::InvalidDegreesOfFreedom {
                value: other.to_owned(),
            }),
        }
    }
}

/// Validated rolling-window parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSpec {
    window: usize,
    ddof: DegreesOfFreedom,
}

impl WindowSpec {
    /// A window must hold at least two observations for a deviation to exist.
    pub fn new(window: usize, ddof: DegreesOfFreedom) -> Result<Self, ValidationError> {
        if window < 2 {
            return Err(ValidationError::WindowTooSmall { window });
        }
        Ok(Self { window, ddof })
    }

    pub const fn window(self) -> usize {
        self.window
    }

    pub const fn ddof(self) -> DegreesOfFreedom {
        self.ddof
    }
}

/// Aligned engine output: both columns have the input series length.
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilitySeries {
    spec: WindowSpec,
    raw: Vec<f64>,
    normalized: Vec<f64>,
}

impl VolatilitySeries {
    pub const fn spec(&self) -> WindowSpec {
        self.spec
    }

    /// Rolling standard deviation; `PADDING` before the first full window,
    /// `NAN` where a window held fewer than two numeric values.
    pub fn raw(&self) -> &[f64] {
        &self.raw
    }

    /// `raw[i] / price[i]`; `NAN` wherever the divisor price was missing or
    /// zero.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Computes the rolling standard deviation of `prices` and its
/// price-normalized counterpart.
///
/// The window ending at index `i` covers `i - window + 1 ..= i`. Statistics
/// run over the numeric subset of each window only: missing entries
/// contribute neither to the count nor to the sums. Gaps therefore degrade
/// affected positions to `NAN` instead of aborting the series.
///
/// Fails with a validation error when the window does not fit the series;
/// no partial output is produced.
pub fn rolling_volatility(
    prices: &[Option<f64>],
    spec: WindowSpec,
) -> Result<VolatilitySeries, ValidationError> {
    if spec.window > prices.len() {
        return Err(ValidationError::WindowExceedsSeries {
            window: spec.window,
            len: prices.len(),
        });
    }

    let mut raw = Vec::with_capacity(prices.len());
    for i in 0..prices.len() {
        if i + 1 < spec.window {
            raw.push(PADDING);
        } else {
            raw.push(window_std_dev(&prices[i + 1 - spec.window..=i], spec.ddof));
        }
    }

    let normalized = raw
        .iter()
        .zip(prices)
        .map(|(&dev, price)| match price {
            Some(value) if *value != 0.0 => dev / value,
            _ => f64::NAN,
        })
        .collect();

    Ok(VolatilitySeries {
        spec,
        raw,
        normalized,
    })
}

fn window_std_dev(window: &[Option<f64>], ddof: DegreesOfFreedom) -> f64 {
    let numeric: Vec<f64> = window.iter().flatten().copied().collect();
    let count = numeric.len();
    if count < 2 || count <= ddof.offset() {
        return f64::NAN;
    }

    let mean = numeric.iter().sum::<f64>() / count as f64;
    let sum_sq = numeric
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>();

    (sum_sq / (count - ddof.offset()) as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn spec(window: usize, ddof: DegreesOfFreedom) -> WindowSpec {
        WindowSpec::new(window, ddof).expect("valid spec")
    }

    fn numeric(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn outputs_match_input_length() {
        let prices = numeric(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let series =
            rolling_volatility(&prices, spec(3, DegreesOfFreedom::Sample)).expect("must compute");

        assert_eq!(series.raw().len(), prices.len());
        assert_eq!(series.normalized().len(), prices.len());
    }

    #[test]
    fn pads_before_first_full_window() {
        let prices = vec![None, Some(3.0), None, Some(9.0), Some(2.0)];
        let series =
            rolling_volatility(&prices, spec(4, DegreesOfFreedom::Sample)).expect("must compute");

        assert_eq!(&series.raw()[..3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn identical_window_has_zero_deviation() {
        let prices = numeric(&[5.0, 5.0, 5.0, 5.0, 5.0]);
        let series = rolling_volatility(&prices, spec(5, DegreesOfFreedom::Population))
            .expect("must compute");

        assert_eq!(series.raw(), &[0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((series.normalized()[4]).abs() < EPS);
    }

    #[test]
    fn sample_deviation_of_ascending_week() {
        let prices = numeric(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        let series =
            rolling_volatility(&prices, spec(7, DegreesOfFreedom::Sample)).expect("must compute");

        assert_eq!(&series.raw()[..6], &[0.0; 6]);
        assert!((series.raw()[6] - 2.160246899469287).abs() < EPS);
        assert!((series.normalized()[6] - 2.160246899469287 / 7.0).abs() < EPS);
    }

    #[test]
    fn population_deviation_uses_full_count() {
        let prices = numeric(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let series = rolling_volatility(&prices, spec(8, DegreesOfFreedom::Population))
            .expect("must compute");

        assert!((series.raw()[7] - 2.0).abs() < EPS);
    }

    #[test]
    fn gaps_are_excluded_not_zeroed() {
        let prices = vec![
            Some(10.0),
            None,
            Some(10.0),
            None,
            Some(10.0),
            None,
            Some(10.0),
        ];
        let series =
            rolling_volatility(&prices, spec(7, DegreesOfFreedom::Sample)).expect("must compute");

        // Four numeric tens remain; had the gaps been coerced to zero the
        // deviation would be far from zero.
        assert!((series.raw()[6]).abs() < EPS);
    }

    #[test]
    fn sparse_window_degrades_to_nan() {
        let prices = vec![Some(1.0), None, None, Some(2.0), None, None];
        let series =
            rolling_volatility(&prices, spec(3, DegreesOfFreedom::Sample)).expect("must compute");

        // Window [None, None, Some(2.0)] holds a single numeric value.
        assert!(series.raw()[3].is_nan());
        assert!(series.normalized()[3].is_nan());
    }

    #[test]
    fn all_missing_window_degrades_to_nan() {
        let prices = vec![None, None, None];
        let series = rolling_volatility(&prices, spec(2, DegreesOfFreedom::Population))
            .expect("must compute");

        assert!(series.raw()[1].is_nan());
        assert!(series.raw()[2].is_nan());
    }

    #[test]
    fn normalization_tracks_price_column() {
        let prices = vec![Some(2.0), Some(4.0), None, Some(8.0)];
        let series =
            rolling_volatility(&prices, spec(2, DegreesOfFreedom::Population)).expect("must compute");

        assert!((series.normalized()[1] - series.raw()[1] / 4.0).abs() < EPS);
        // Missing divisor price: undefined, not a fault.
        assert!(series.normalized()[2].is_nan());
    }

    #[test]
    fn window_larger_than_series_is_rejected() {
        let prices = numeric(&[1.0, 2.0, 3.0]);
        let err = rolling_volatility(&prices, spec(4, DegreesOfFreedom::Sample))
            .expect_err("must fail");

        assert_eq!(
            err,
            ValidationError::WindowExceedsSeries { window: 4, len: 3 }
        );
    }

    #[test]
    fn window_below_two_is_rejected() {
        let err = WindowSpec::new(1, DegreesOfFreedom::Population).expect_err("must fail");
        assert_eq!(err, ValidationError::WindowTooSmall { window: 1 });
    }

    #[test]
    fn parses_degrees_of_freedom() {
        assert_eq!(
            "0".parse::<DegreesOfFreedom>().expect("must parse"),
            DegreesOfFreedom::Population
        );
        assert_eq!(
            "sample".parse::<DegreesOfFreedom>().expect("must parse"),
            DegreesOfFreedom::Sample
        );
    }

    #[test]
    fn rejects_unsupported_degrees_of_freedom() {
        let err = "2".parse::<DegreesOfFreedom>().expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::InvalidDegreesOfFreedom { .. }
        ));
    }
}
