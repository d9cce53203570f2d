//! WASM bindings for call-billing.
//!
//! Exposes billable-duration and fee calculation to JavaScript via
//! `wasm-bindgen`. Timestamps cross the boundary as zone-less ISO 8601
//! strings, fees as decimal strings, and whole-call billing as JSON.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p call-billing-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/call-billing-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/call_billing_wasm.wasm
//! ```

use call_billing::error::Result as BillingResult;
use call_billing::{parse_timestamp, BillingCalculator, BillingError, CallRecord, Tariff};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for a call passed from JavaScript.
#[derive(Deserialize)]
struct CallInput {
    start: String,
    #[serde(default)]
    start_in_dst: bool,
    end: String,
    #[serde(default)]
    end_in_dst: bool,
}

#[derive(Serialize)]
struct CallBillDto {
    minutes: i64,
    fee: String,
}

// ---------------------------------------------------------------------------
// Native implementations, kept free of `JsValue` so they run off-wasm too
// ---------------------------------------------------------------------------

fn time_span(start: &str, start_in_dst: bool, end: &str, end_in_dst: bool) -> BillingResult<i64> {
    let start = parse_timestamp(start)?;
    let end = parse_timestamp(end)?;
    call_billing::calculate_time_span(start, start_in_dst, end, end_in_dst)
}

fn fee(minutes: i64) -> BillingResult<String> {
    call_billing::calculate_fee(minutes).map(|fee| fee.to_string())
}

fn bill(call_json: &str, tariff_json: Option<&str>) -> BillingResult<String> {
    let calculator = match tariff_json {
        Some(json) => BillingCalculator::new(Tariff::from_json(json)?)?,
        None => BillingCalculator::default(),
    };

    let input: CallInput = serde_json::from_str(call_json)?;
    let record = CallRecord {
        start: parse_timestamp(&input.start)?,
        start_in_dst: input.start_in_dst,
        end: parse_timestamp(&input.end)?,
        end_in_dst: input.end_in_dst,
    };

    let bill = calculator.bill(&record)?;
    let dto = CallBillDto {
        minutes: bill.minutes,
        fee: bill.fee.to_string(),
    };
    Ok(serde_json::to_string(&dto)?)
}

fn to_js(err: BillingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the billable minutes of a call under the default tariff.
///
/// # Arguments
/// - `start` -- Local datetime string (e.g., "2022-03-21T16:12:05")
/// - `start_in_dst` -- Whether `start` falls within daylight-saving time
/// - `end` -- Local datetime string
/// - `end_in_dst` -- Whether `end` falls within daylight-saving time
#[wasm_bindgen(js_name = "calculateTimeSpan")]
pub fn calculate_time_span(
    start: &str,
    start_in_dst: bool,
    end: &str,
    end_in_dst: bool,
) -> Result<i64, JsValue> {
    time_span(start, start_in_dst, end, end_in_dst).map_err(to_js)
}

/// Price a minute count under the default tariff.
///
/// Returns the fee as a decimal string (e.g., "143.00") so no precision is
/// lost to JavaScript numbers.
#[wasm_bindgen(js_name = "calculateFee")]
pub fn calculate_fee(minutes: i64) -> Result<String, JsValue> {
    fee(minutes).map_err(to_js)
}

/// Bill a whole call.
///
/// `call_json` must be a `{start, start_in_dst, end, end_in_dst}` object.
/// `tariff_json` optionally overrides the default tariff. Returns a JSON
/// string `{minutes, fee}` with the fee as a decimal string.
#[wasm_bindgen(js_name = "billCall")]
pub fn bill_call(call_json: &str, tariff_json: Option<String>) -> Result<String, JsValue> {
    bill(call_json, tariff_json.as_deref()).map_err(to_js)
}
