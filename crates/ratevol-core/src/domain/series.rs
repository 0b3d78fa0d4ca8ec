use time::Date;

use crate::ValidationError;

/// A single observed calendar day.
///
/// `rate` is `None` when no usable price exists for the day: the remote
/// service reported exactly zero, the response was malformed, or the fetch
/// failed outright. The sentinel keeps a real zero out of the statistics —
/// arithmetic can never coerce an absent observation into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: Date,
    pub rate: Option<f64>,
}

impl PricePoint {
    pub const fn new(date: Date, rate: Option<f64>) -> Self {
        Self { date, rate }
    }
}

/// An immutable daily price series, strictly ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series, rejecting out-of-order or duplicate dates.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].date >= pair[1].date {
                return Err(ValidationError::OutOfOrderSeries { index: index + 1 });
            }
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// The rate column, aligned with `points()`.
    pub fn rates(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|point| point.rate).collect()
    }
}
