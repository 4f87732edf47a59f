//! Error types for the currency backend.

use chrono::NaiveDate;

/// Result type for currency computations.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Error type for boundary validation.
///
/// The computation itself is pure and total over well-formed input; every
/// failure mode is a caller-side validation problem surfaced before the
/// engine runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurrencyError {
    #[error("invalid term range: start {start} is after end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid currency parameters: {0}")]
    InvalidParameters(String),
}
