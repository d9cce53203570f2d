//! Billable duration of a call, corrected for daylight-saving shifts.
//!
//! The raw span is measured between two wall-clock timestamps and rounded
//! *up* to whole minutes: a call lasting one second bills as one minute. The
//! span is validated before the DST correction is applied, so the corrected
//! value may be zero or negative. [`crate::fee::calculate_fee`] rejects the
//! negative case.

use chrono::{NaiveDateTime, TimeDelta};
use tracing::{debug, warn};

use crate::error::{BillingError, Result};
use crate::tariff::Tariff;

/// Accepted input layouts for [`parse_timestamp`], tried in order.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Compute the billable minutes of a call under the default tariff.
///
/// # Arguments
/// - `start` -- wall-clock time the call was answered
/// - `start_in_dst` -- whether `start` falls within a daylight-saving period
/// - `end` -- wall-clock time the caller hung up
/// - `end_in_dst` -- whether `end` falls within a daylight-saving period
///
/// # Errors
/// Returns `BillingError::InvalidInterval` if `end` is not strictly after `start`.
/// Returns `BillingError::IntervalTooLong` if the raw span is 30 hours or more.
pub fn calculate_time_span(
    start: NaiveDateTime,
    start_in_dst: bool,
    end: NaiveDateTime,
    end_in_dst: bool,
) -> Result<i64> {
    billable_minutes(&Tariff::default(), start, start_in_dst, end, end_in_dst)
}

/// Compute the billable minutes of a call under `tariff`.
///
/// Identical to [`calculate_time_span`] but takes the DST shift size and the
/// span ceiling from the given tariff. The tariff is assumed to be valid.
pub fn billable_minutes(
    tariff: &Tariff,
    start: NaiveDateTime,
    start_in_dst: bool,
    end: NaiveDateTime,
    end_in_dst: bool,
) -> Result<i64> {
    let elapsed = end.signed_duration_since(start);

    if elapsed <= TimeDelta::zero() {
        return Err(BillingError::InvalidInterval { start, end });
    }

    let raw = ceil_minutes(elapsed);

    if elapsed >= TimeDelta::hours(i64::from(tariff.max_span_hours)) {
        return Err(BillingError::IntervalTooLong {
            minutes: raw,
            max_hours: tariff.max_span_hours,
        });
    }

    let mut minutes = raw;
    if start_in_dst {
        minutes -= tariff.dst_shift_minutes;
    }
    if end_in_dst {
        minutes += tariff.dst_shift_minutes;
    }

    debug!(
        %start, start_in_dst, %end, end_in_dst, raw, minutes,
        "computed billable minutes"
    );

    // Validation ran on the raw span; the corrected value is not re-checked.
    if minutes <= 0 {
        warn!(
            %start, %end, raw, minutes,
            "DST correction left no billable time"
        );
    }

    Ok(minutes)
}

/// Round a positive elapsed duration up to whole minutes.
fn ceil_minutes(elapsed: TimeDelta) -> i64 {
    let seconds = elapsed.num_seconds();
    let partial = seconds % 60 != 0 || elapsed.subsec_nanos() != 0;
    seconds / 60 + i64::from(partial)
}

/// Parse a zone-less ISO 8601 timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` with an optional fractional second, and the
/// minute-precision form `YYYY-MM-DDTHH:MM`.
///
/// # Errors
/// Returns `BillingError::InvalidTimestamp` carrying the input when no layout matches.
pub fn parse_timestamp(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| BillingError::InvalidTimestamp(input.to_string()))
}
