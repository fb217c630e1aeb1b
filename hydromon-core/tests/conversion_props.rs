//! Property tests for the sample-to-unit conversions
//!
//! The conversion invariants hold for every representable sample, so they
//! are stated as properties over the full 10-bit range rather than as
//! spot checks.

use proptest::prelude::*;

use hydromon_core::{Converter, SafetyLimits, ThresholdEvaluator};

proptest! {
    #[test]
    fn voltage_matches_formula(sample in 0u16..=1023) {
        let conv = Converter::default();
        let expected = sample as f32 / 1023.0 * 5.0 * 5.0;
        prop_assert!((conv.voltage(sample) - expected).abs() < 1e-4);
    }

    #[test]
    fn voltage_is_monotonic(sample in 0u16..1023) {
        let conv = Converter::default();
        prop_assert!(conv.voltage(sample + 1) >= conv.voltage(sample));
    }

    #[test]
    fn pressure_stays_in_sensor_range(sample in 0u16..=1023) {
        let conv = Converter::default();
        let kpa = conv.pressure(sample);
        prop_assert!(kpa >= 0.0);
        prop_assert!(kpa <= 10.0);
    }

    #[test]
    fn concentration_stays_in_percent_range(sample in 0u16..=1023) {
        let conv = Converter::default();
        let pct = conv.gas_concentration(sample);
        prop_assert!(pct >= 0.0);
        prop_assert!(pct <= 100.0);
    }

    #[test]
    fn readings_are_pure_in_the_sample(sample in 0u16..=1023) {
        let a = Converter::default();
        let b = Converter::default();
        prop_assert_eq!(a.voltage(sample), b.voltage(sample));
        prop_assert_eq!(a.pressure(sample), b.pressure(sample));
        prop_assert_eq!(a.gas_concentration(sample), b.gas_concentration(sample));
    }

    #[test]
    fn alarm_flags_are_pure_in_the_readings(
        voltage in 0.0f32..60.0,
        pressure in 0.0f32..10.0,
        gas in 0.0f32..100.0,
    ) {
        let eval = ThresholdEvaluator::new(SafetyLimits::default());
        let first = eval.evaluate(voltage, pressure, gas);
        let second = eval.evaluate(voltage, pressure, gas);
        prop_assert_eq!(first, second);

        prop_assert_eq!(first.voltage, voltage > 50.0);
        prop_assert_eq!(first.pressure, pressure > 8.0);
        prop_assert_eq!(first.gas, gas > 80.0);
    }
}
