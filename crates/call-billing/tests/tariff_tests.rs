//! Tests for tariff defaults, JSON loading, and validation.

use call_billing::{BillingCalculator, BillingError, Tariff};
use rust_decimal_macros::dec;

fn assert_invalid(tariff: Tariff, needle: &str) {
    match tariff.validate() {
        Err(BillingError::InvalidTariff(reason)) => assert!(
            reason.contains(needle),
            "reason {:?} should mention {:?}",
            reason,
            needle
        ),
        other => panic!("expected InvalidTariff, got {:?}", other),
    }
}

#[test]
fn default_tariff_is_the_standard_plan() {
    let t = Tariff::default();
    assert_eq!(t.threshold_minutes, 20);
    assert_eq!(t.rate_per_minute, dec!(0.05));
    assert_eq!(t.threshold_fee, dec!(1.00));
    assert_eq!(t.overflow_rate_per_minute, dec!(0.10));
    assert_eq!(t.dst_shift_minutes, 60);
    assert_eq!(t.max_span_hours, 30);
    assert!(t.validate().is_ok());
}

// ---------------------------------------------------------------------------
// JSON loading
// ---------------------------------------------------------------------------

#[test]
fn empty_json_object_yields_defaults() {
    assert_eq!(Tariff::from_json("{}").unwrap(), Tariff::default());
}

#[test]
fn partial_json_overrides_named_fields() {
    let json = r#"{"threshold_minutes": 10, "threshold_fee": "0.75", "max_span_hours": 12}"#;
    let t = Tariff::from_json(json).unwrap();
    assert_eq!(t.threshold_minutes, 10);
    assert_eq!(t.threshold_fee, dec!(0.75));
    assert_eq!(t.max_span_hours, 12);
    assert_eq!(t.rate_per_minute, dec!(0.05));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        Tariff::from_json("{not json"),
        Err(BillingError::Json(_))
    ));
}

#[test]
fn json_with_inconsistent_constants_is_rejected() {
    let json = r#"{"threshold_fee": "0.50"}"#;
    assert!(matches!(
        Tariff::from_json(json),
        Err(BillingError::InvalidTariff(_))
    ));
}

#[test]
fn serialized_tariff_loads_back() {
    let original = Tariff {
        threshold_minutes: 5,
        rate_per_minute: dec!(0.07),
        threshold_fee: dec!(0.40),
        overflow_rate_per_minute: dec!(0.09),
        dst_shift_minutes: 30,
        max_span_hours: 24,
    };
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(Tariff::from_json(&json).unwrap(), original);
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn negative_threshold_rejected() {
    assert_invalid(
        Tariff {
            threshold_minutes: -1,
            ..Tariff::default()
        },
        "threshold_minutes",
    );
}

#[test]
fn negative_dst_shift_rejected() {
    assert_invalid(
        Tariff {
            dst_shift_minutes: -60,
            ..Tariff::default()
        },
        "dst_shift_minutes",
    );
}

#[test]
fn dst_shift_longer_than_span_ceiling_rejected() {
    assert_invalid(
        Tariff {
            dst_shift_minutes: 30 * 60 + 1,
            ..Tariff::default()
        },
        "dst_shift_minutes",
    );
    assert!(Tariff {
        dst_shift_minutes: 30 * 60,
        ..Tariff::default()
    }
    .validate()
    .is_ok());
}

#[test]
fn huge_dst_shift_from_json_never_reaches_billing() {
    let json = r#"{"dst_shift_minutes": 9223372036854775807}"#;
    assert!(matches!(
        Tariff::from_json(json),
        Err(BillingError::InvalidTariff(_))
    ));
    let tariff = Tariff {
        dst_shift_minutes: i64::MAX,
        ..Tariff::default()
    };
    assert!(matches!(
        BillingCalculator::new(tariff),
        Err(BillingError::InvalidTariff(_))
    ));
}

#[test]
fn zero_span_ceiling_rejected() {
    assert_invalid(
        Tariff {
            max_span_hours: 0,
            ..Tariff::default()
        },
        "max_span_hours",
    );
}

#[test]
fn negative_rates_rejected() {
    assert_invalid(
        Tariff {
            rate_per_minute: dec!(-0.01),
            ..Tariff::default()
        },
        "rate_per_minute",
    );
    assert_invalid(
        Tariff {
            overflow_rate_per_minute: dec!(-0.10),
            ..Tariff::default()
        },
        "overflow_rate_per_minute",
    );
    assert_invalid(
        Tariff {
            threshold_fee: dec!(-1.00),
            ..Tariff::default()
        },
        "threshold_fee",
    );
}

#[test]
fn threshold_fee_below_low_tier_cost_rejected() {
    assert_invalid(
        Tariff {
            threshold_fee: dec!(0.99),
            ..Tariff::default()
        },
        "threshold_fee",
    );
}

#[test]
fn free_plan_is_valid() {
    let t = Tariff {
        rate_per_minute: dec!(0),
        threshold_fee: dec!(0),
        overflow_rate_per_minute: dec!(0),
        ..Tariff::default()
    };
    assert!(t.validate().is_ok());
}

#[test]
fn calculator_refuses_invalid_tariff() {
    let result = BillingCalculator::new(Tariff {
        max_span_hours: 0,
        ..Tariff::default()
    });
    assert!(matches!(result, Err(BillingError::InvalidTariff(_))));
}
