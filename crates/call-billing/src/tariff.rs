//! Tariff constants for duration normalization and tiered pricing.
//!
//! A [`Tariff`] carries every number the two billing rules depend on. The
//! default value is the standard plan: 0.05 per minute up to 20 minutes, then
//! 1.00 plus 0.10 per minute beyond, one-hour DST shifts, and a 30 hour
//! ceiling on the raw call span.
//!
//! Tariffs can be loaded from JSON. Missing fields fall back to the defaults,
//! and decimal fields should be written as strings (`"0.05"`) so they never
//! pass through binary floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{BillingError, Result};

/// Pricing and normalization constants for a billing plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    /// Last minute count billed at `rate_per_minute`. Inclusive.
    pub threshold_minutes: i64,
    /// Per-minute rate for calls up to the threshold.
    pub rate_per_minute: Decimal,
    /// Flat fee covering the first `threshold_minutes` of a longer call.
    pub threshold_fee: Decimal,
    /// Per-minute rate for every minute past the threshold.
    pub overflow_rate_per_minute: Decimal,
    /// Minutes removed or added per DST flag.
    pub dst_shift_minutes: i64,
    /// Raw spans of this many hours or more are rejected.
    pub max_span_hours: u32,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            threshold_minutes: 20,
            rate_per_minute: Decimal::new(5, 2),
            threshold_fee: Decimal::new(100, 2),
            overflow_rate_per_minute: Decimal::new(10, 2),
            dst_shift_minutes: 60,
            max_span_hours: 30,
        }
    }
}

impl Tariff {
    /// Parse a tariff from JSON and validate it.
    ///
    /// # Errors
    /// Returns `BillingError::Json` if the document is malformed and
    /// `BillingError::InvalidTariff` if the constants are inconsistent.
    pub fn from_json(json: &str) -> Result<Self> {
        let tariff: Tariff = serde_json::from_str(json)?;
        tariff.validate()?;
        Ok(tariff)
    }

    /// Check that the constants describe a usable, monotone price curve.
    ///
    /// The threshold fee must cover at least the cost of the threshold
    /// minutes at the low-tier rate, otherwise crossing the tier boundary
    /// would make a longer call cheaper.
    pub fn validate(&self) -> Result<()> {
        if self.threshold_minutes < 0 {
            return Err(invalid(format!(
                "threshold_minutes must not be negative, got {}",
                self.threshold_minutes
            )));
        }
        if self.max_span_hours == 0 {
            return Err(invalid("max_span_hours must be positive".to_string()));
        }
        // A shift no longer than the span ceiling keeps `raw ± shift` within i64.
        let max_span_minutes = i64::from(self.max_span_hours) * 60;
        if self.dst_shift_minutes < 0 || self.dst_shift_minutes > max_span_minutes {
            return Err(invalid(format!(
                "dst_shift_minutes must be between 0 and {}, got {}",
                max_span_minutes, self.dst_shift_minutes
            )));
        }

        for (name, value) in [
            ("rate_per_minute", self.rate_per_minute),
            ("threshold_fee", self.threshold_fee),
            ("overflow_rate_per_minute", self.overflow_rate_per_minute),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{} must not be negative, got {}", name, value)));
            }
        }

        let low_tier_cap = self
            .rate_per_minute
            .checked_mul(Decimal::from(self.threshold_minutes))
            .ok_or_else(|| invalid("low tier cost overflows".to_string()))?;
        if self.threshold_fee < low_tier_cap {
            return Err(invalid(format!(
                "threshold_fee {} is below the low tier cost {} at the threshold",
                self.threshold_fee, low_tier_cap
            )));
        }

        Ok(())
    }
}

fn invalid(reason: String) -> BillingError {
    BillingError::InvalidTariff(reason)
}
