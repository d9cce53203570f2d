//! Tiered fee calculation over billable minutes.
//!
//! Up to the threshold every minute costs the low-tier rate. Past it the call
//! costs the flat threshold fee plus the overflow rate for each extra minute.
//! All arithmetic is exact `Decimal` arithmetic.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{BillingError, Result};
use crate::tariff::Tariff;

/// Price a minute count under the default tariff.
///
/// `20` minutes cost `1.00`, `21` minutes cost `1.10`.
///
/// # Errors
/// Returns `BillingError::InvalidDuration` if `minutes` is negative.
pub fn calculate_fee(minutes: i64) -> Result<Decimal> {
    price_minutes(&Tariff::default(), minutes)
}

/// Price a minute count under `tariff`.
///
/// The tariff is assumed to be valid (see [`Tariff::validate`]).
pub fn price_minutes(tariff: &Tariff, minutes: i64) -> Result<Decimal> {
    if minutes < 0 {
        return Err(BillingError::InvalidDuration(minutes));
    }

    let priced = if minutes <= tariff.threshold_minutes {
        tariff.rate_per_minute.checked_mul(Decimal::from(minutes))
    } else {
        let extra = Decimal::from(minutes - tariff.threshold_minutes);
        tariff
            .overflow_rate_per_minute
            .checked_mul(extra)
            .and_then(|overflow| tariff.threshold_fee.checked_add(overflow))
    };
    let fee = priced.ok_or(BillingError::FeeOverflow(minutes))?;

    debug!(minutes, %fee, "computed call fee");

    Ok(fee)
}
