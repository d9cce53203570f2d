//! Error types for call-billing operations.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    /// The call did not end strictly after it started.
    #[error("Invalid interval: end time {end} is not after start time {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// The raw elapsed span reached the billing ceiling.
    #[error("Interval too long: {minutes} minutes reaches the {max_hours} hour limit")]
    IntervalTooLong { minutes: i64, max_hours: u32 },

    /// A negative minute count was passed to fee calculation.
    #[error("Invalid duration: {0} minutes is negative")]
    InvalidDuration(i64),

    /// The fee for a minute count does not fit in a `Decimal`.
    #[error("Fee overflow: {0} minutes exceeds the representable amount")]
    FeeOverflow(i64),

    /// Tariff constants are out of range or inconsistent.
    #[error("Invalid tariff: {0}")]
    InvalidTariff(String),

    /// A timestamp string matched none of the accepted layouts.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A tariff or call document was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BillingError>;
