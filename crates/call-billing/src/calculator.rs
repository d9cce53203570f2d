//! Billing calculator bound to a validated tariff.
//!
//! [`BillingCalculator`] is an immutable value: construct it once from a
//! [`Tariff`] and share it freely across threads.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::fee;
use crate::tariff::Tariff;
use crate::timespan;

/// One call as reported by the switch: wall-clock endpoints plus DST flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub start: NaiveDateTime,
    pub start_in_dst: bool,
    pub end: NaiveDateTime,
    pub end_in_dst: bool,
}

/// The billed outcome of a single call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallBill {
    /// DST-corrected billable minutes.
    pub minutes: i64,
    /// Fee for those minutes, exact.
    pub fee: Decimal,
}

/// Stateless duration and fee calculator for one tariff.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingCalculator {
    tariff: Tariff,
}

impl BillingCalculator {
    /// Create a calculator after validating `tariff`.
    ///
    /// # Errors
    /// Returns `BillingError::InvalidTariff` if the tariff is inconsistent.
    pub fn new(tariff: Tariff) -> Result<Self> {
        tariff.validate()?;
        Ok(Self { tariff })
    }

    /// The tariff this calculator prices with.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// See [`timespan::calculate_time_span`].
    pub fn calculate_time_span(
        &self,
        start: NaiveDateTime,
        start_in_dst: bool,
        end: NaiveDateTime,
        end_in_dst: bool,
    ) -> Result<i64> {
        timespan::billable_minutes(&self.tariff, start, start_in_dst, end, end_in_dst)
    }

    /// See [`fee::calculate_fee`].
    pub fn calculate_fee(&self, minutes: i64) -> Result<Decimal> {
        fee::price_minutes(&self.tariff, minutes)
    }

    /// Bill a call: billable minutes first, then the fee for them.
    ///
    /// Fails on the first error. A DST correction that drives the span
    /// negative surfaces here as `BillingError::InvalidDuration`.
    #[instrument(level = "debug", skip(self))]
    pub fn bill(&self, call: &CallRecord) -> Result<CallBill> {
        let minutes =
            self.calculate_time_span(call.start, call.start_in_dst, call.end, call.end_in_dst)?;
        let fee = self.calculate_fee(minutes)?;
        Ok(CallBill { minutes, fee })
    }
}
