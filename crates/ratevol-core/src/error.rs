use thiserror::Error;
use time::Date;

/// Validation and contract errors exposed by `ratevol-core`.
///
/// Every variant is a structurally invalid input: the computation refuses to
/// start and produces no partial output. Data-quality gaps in a fetched
/// series are not represented here; they degrade to undefined values inside
/// the volatility engine instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency must be a 3-character uppercase code: '{value}'")]
    InvalidCurrency { value: String },
    #[error("issuer must be a Ripple address starting with 'r': '{value}'")]
    InvalidIssuer { value: String },
    #[error("XRP does not take an issuing address")]
    XrpWithIssuer,
    #[error("issued currency '{currency}' requires an issuing address")]
    MissingIssuer { currency: String },

    #[error("date must be an ISO-8601 calendar day: '{value}'")]
    InvalidDate { value: String },
    #[error("date range start {start} is after end {end}")]
    InvertedDateRange { start: Date, end: Date },

    #[error("window size must be at least 2, got {window}")]
    WindowTooSmall { window: usize },
    #[error("window size {window} exceeds series length {len}")]
    WindowExceedsSeries { window: usize, len: usize },
    #[error("degrees of freedom must be 0 (population) or 1 (sample): '{value}'")]
    InvalidDegreesOfFreedom { value: String },

    #[error("price series dates must be strictly ascending, violated at index {index}")]
    OutOfOrderSeries { index: usize },
}
