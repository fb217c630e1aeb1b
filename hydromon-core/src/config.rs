//! Immutable Configuration for Calibration, Limits, and Timing
//!
//! All process-wide constants live in plain value structs constructed once
//! at startup and passed (by reference or by copy) to the components that
//! need them. Nothing here is mutated after construction - the conversion
//! and evaluation functions are pure in the configuration.
//!
//! Defaults come from [`crate::constants`] and match the reference test
//! stand hardware. Deployment-specific overrides go through the custom
//! constructors, e.g. a 12-bit ADC board:
//!
//! ```rust
//! use hydromon_core::config::CellCalibration;
//!
//! let cal = CellCalibration::with_adc(3.3, 4095);
//! assert_eq!(cal.adc_max_count, 4095);
//! ```

use crate::constants::{
    adc::{ADC_MAX_COUNT, ADC_REFERENCE_V},
    safety::{GAS_LIMIT_PCT, PRESSURE_LIMIT_KPA, VOLTAGE_LIMIT_V},
    sensors::{
        PRESSURE_SENSOR_MAX_KPA, PRESSURE_TRANSFER_OFFSET, PRESSURE_TRANSFER_SLOPE,
        VOLTAGE_DIVIDER_RATIO,
    },
    time::{CYCLE_INTERVAL_MS, WARMUP_DURATION_MS, WARMUP_TICK_MS},
};

/// Calibration constants for the analog front end
///
/// Fixed at startup, never mutated. Every converted reading is a pure
/// function of the raw sample and this struct.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCalibration {
    /// ADC reference voltage (V)
    pub adc_reference_v: f32,

    /// Maximum ADC count (1023 for a 10-bit converter)
    pub adc_max_count: u16,

    /// Divider ratio on the stack voltage input
    pub divider_ratio: f32,

    /// Pressure transducer offset (fraction of Vref at 0 kPa)
    pub pressure_offset: f32,

    /// Pressure transducer slope (fraction of Vref per kPa)
    pub pressure_slope: f32,

    /// Transducer full scale (kPa); converted pressure clamps here
    pub pressure_max_kpa: f32,
}

impl Default for CellCalibration {
    fn default() -> Self {
        Self {
            adc_reference_v: ADC_REFERENCE_V,
            adc_max_count: ADC_MAX_COUNT,
            divider_ratio: VOLTAGE_DIVIDER_RATIO,
            pressure_offset: PRESSURE_TRANSFER_OFFSET,
            pressure_slope: PRESSURE_TRANSFER_SLOPE,
            pressure_max_kpa: PRESSURE_SENSOR_MAX_KPA,
        }
    }
}

impl CellCalibration {
    /// Calibration for a board with a different ADC, keeping the reference
    /// stand's sensor coefficients
    pub fn with_adc(reference_v: f32, max_count: u16) -> Self {
        Self {
            adc_reference_v: reference_v,
            adc_max_count: max_count,
            ..Self::default()
        }
    }
}

/// Safety limits, one per monitored quantity
///
/// An alarm is raised iff the reading strictly exceeds its limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SafetyLimits {
    /// Maximum safe stack voltage (V)
    pub voltage_v: f32,

    /// Maximum safe system pressure (kPa)
    pub pressure_kpa: f32,

    /// Maximum safe hydrogen concentration (%)
    pub gas_pct: f32,
}

impl Default for SafetyLimits {
    fn default() -> Self {
        Self {
            voltage_v: VOLTAGE_LIMIT_V,
            pressure_kpa: PRESSURE_LIMIT_KPA,
            gas_pct: GAS_LIMIT_PCT,
        }
    }
}

impl SafetyLimits {
    /// Limits with custom values
    ///
    /// Negative limits make no physical sense for these quantities and are
    /// clamped to zero, which makes any positive reading alarm.
    pub fn new(voltage_v: f32, pressure_kpa: f32, gas_pct: f32) -> Self {
        Self {
            voltage_v: voltage_v.max(0.0),
            pressure_kpa: pressure_kpa.max(0.0),
            gas_pct: gas_pct.max(0.0),
        }
    }
}

/// Timing for the monitor loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Warm-up hold before the first live cycle (ms)
    pub warmup_ms: u32,

    /// Sleep increment between warm-up countdown reports (ms)
    pub warmup_tick_ms: u32,

    /// Steady-state polling period (ms)
    pub cycle_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            warmup_ms: WARMUP_DURATION_MS,
            warmup_tick_ms: WARMUP_TICK_MS,
            cycle_ms: CYCLE_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    /// Config with no warm-up hold, for host demos and tests
    pub fn without_warmup() -> Self {
        Self {
            warmup_ms: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_calibration_matches_reference_stand() {
        let cal = CellCalibration::default();
        assert_eq!(cal.adc_max_count, 1023);
        assert_eq!(cal.adc_reference_v, 5.0);
        assert_eq!(cal.divider_ratio, 5.0);
        assert_eq!(cal.pressure_max_kpa, 10.0);
    }

    #[test]
    fn custom_adc_keeps_sensor_coefficients() {
        let cal = CellCalibration::with_adc(3.3, 4095);
        assert_eq!(cal.adc_reference_v, 3.3);
        assert_eq!(cal.adc_max_count, 4095);
        assert_eq!(cal.pressure_offset, CellCalibration::default().pressure_offset);
    }

    #[test]
    fn negative_limits_clamp_to_zero() {
        let limits = SafetyLimits::new(-1.0, 8.0, 80.0);
        assert_eq!(limits.voltage_v, 0.0);
        assert_eq!(limits.pressure_kpa, 8.0);
    }
}
