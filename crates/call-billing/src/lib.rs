//! # call-billing
//!
//! Billable duration and tiered fee calculation for telephone calls.
//!
//! A call is billed from the moment it is answered until the caller hangs
//! up. Partial minutes round up, and the caller says whether each endpoint
//! falls inside a daylight-saving period so the wall-clock span can be
//! corrected by one clock shift. Fees are exact decimals.
//!
//! ## Quick start
//!
//! ```rust
//! use call_billing::{calculate_fee, calculate_time_span, parse_timestamp};
//!
//! let start = parse_timestamp("2022-03-21T16:12:05").unwrap();
//! let end = parse_timestamp("2022-03-22T16:12:05").unwrap();
//!
//! let minutes = calculate_time_span(start, false, end, false).unwrap();
//! assert_eq!(minutes, 1440);
//! assert_eq!(calculate_fee(minutes).unwrap().to_string(), "143.00");
//! ```
//!
//! ## Modules
//!
//! - [`timespan`] — timestamps + DST flags → billable minutes
//! - [`fee`] — billable minutes → exact fee
//! - [`tariff`] — pricing constants, JSON loading, validation
//! - [`calculator`] — a calculator bound to one tariff, whole-call billing
//! - [`error`] — Error types

pub mod calculator;
pub mod error;
pub mod fee;
pub mod tariff;
pub mod timespan;

pub use calculator::{BillingCalculator, CallBill, CallRecord};
pub use error::BillingError;
pub use fee::calculate_fee;
pub use tariff::Tariff;
pub use timespan::{calculate_time_span, parse_timestamp};
