//! Raw Sample to Physical Unit Conversion
//!
//! ## Overview
//!
//! Three independent conversions, each a pure function of the raw sample
//! and the (immutable) calibration: stack voltage, system pressure, and
//! hydrogen concentration. No history, no hidden state - the same sample
//! always converts to the same reading.
//!
//! ## Transfer Functions
//!
//! - **Voltage**: `volts = (s / max_count) * Vref * divider_ratio`. Plain
//!   linear scaling; the divider ratio undoes the resistive network that
//!   steps the stack output down to the ADC range. Unclamped.
//!
//! - **Pressure**: reconstruct the transducer output
//!   `v = (s / max_count) * Vref`, then invert its linear transfer function
//!   `kPa = (v / Vref - offset) / slope`. The result is clamped to
//!   `[0, pressure_max]` - out-of-range values silently saturate, they are
//!   never reported as sensor errors.
//!
//! - **Gas concentration**: reconstruct `v` as above, then linearly re-map
//!   `v * 100` from `[0, Vref * 100]` onto `[0, 100]` percent. This is an
//!   uncompensated approximation (no temperature/humidity correction) and
//!   is kept deliberately simple; do not substitute a calibrated gas-sensor
//!   curve here.

use crate::config::CellCalibration;

/// Sample-to-unit converter, parameterized by calibration
///
/// Cheap to copy; construct once at startup and share.
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    calibration: CellCalibration,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(CellCalibration::default())
    }
}

impl Converter {
    /// Converter for the given calibration
    pub const fn new(calibration: CellCalibration) -> Self {
        Self { calibration }
    }

    /// Calibration in use
    pub const fn calibration(&self) -> &CellCalibration {
        &self.calibration
    }

    /// ADC pin voltage for a raw sample
    fn pin_voltage(&self, sample: u16) -> f32 {
        sample as f32 / self.calibration.adc_max_count as f32 * self.calibration.adc_reference_v
    }

    /// Stack output voltage (V), unclamped
    pub fn voltage(&self, sample: u16) -> f32 {
        self.pin_voltage(sample) * self.calibration.divider_ratio
    }

    /// System pressure (kPa), clamped to the transducer range
    pub fn pressure(&self, sample: u16) -> f32 {
        let v = self.pin_voltage(sample);
        let kpa = (v / self.calibration.adc_reference_v - self.calibration.pressure_offset)
            / self.calibration.pressure_slope;
        kpa.clamp(0.0, self.calibration.pressure_max_kpa)
    }

    /// Hydrogen concentration (%), linear re-map of the sensor voltage
    pub fn gas_concentration(&self, sample: u16) -> f32 {
        let v = self.pin_voltage(sample);
        // Re-map v*100 from [0, Vref*100] onto [0, 100]. Algebraically the
        // same as v/Vref*100, written as the re-map to keep the placeholder
        // curve recognizable.
        remap(
            v * 100.0,
            0.0,
            self.calibration.adc_reference_v * 100.0,
            0.0,
            100.0,
        )
    }
}

/// Linear re-map of `x` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// Values outside the input domain extrapolate; callers clamp if needed.
/// A degenerate input domain maps everything to `out_min`.
pub fn remap(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    (x - in_min) * (out_max - out_min) / span + out_min
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn voltage_is_linear_in_sample() {
        let conv = Converter::default();

        assert_eq!(conv.voltage(0), 0.0);
        // Full scale: (1023/1023) * 5.0 * 5.0 = 25 V
        assert!((conv.voltage(1023) - 25.0).abs() < EPS);
        // Half scale
        assert!((conv.voltage(512) - 512.0 / 1023.0 * 25.0).abs() < EPS);
    }

    #[test]
    fn pressure_inverts_transfer_function() {
        let conv = Converter::default();

        // Sample producing exactly the 0 kPa offset voltage: 0.04 * 1023
        let zero_kpa_sample = (0.04_f32 * 1023.0) as u16 + 1;
        assert!(conv.pressure(zero_kpa_sample) < 0.1);

        // v/Vref = 0.04 + 0.09*5 = 0.49 -> 5 kPa
        let five_kpa_sample = (0.49_f32 * 1023.0) as u16;
        assert!((conv.pressure(five_kpa_sample) - 5.0).abs() < 0.05);
    }

    #[test]
    fn pressure_clamps_to_sensor_range() {
        let conv = Converter::default();

        // Below the offset voltage the formula goes negative; clamps to 0
        assert_eq!(conv.pressure(0), 0.0);
        assert_eq!(conv.pressure(20), 0.0);

        // Full scale exceeds 10 kPa ((1.0 - 0.04)/0.09 = 10.67); clamps
        assert_eq!(conv.pressure(1023), 10.0);
    }

    #[test]
    fn gas_concentration_spans_full_range() {
        let conv = Converter::default();

        assert_eq!(conv.gas_concentration(0), 0.0);
        assert!((conv.gas_concentration(1023) - 100.0).abs() < EPS);
        assert!((conv.gas_concentration(512) - 512.0 / 1023.0 * 100.0).abs() < EPS);
    }

    #[test]
    fn remap_handles_degenerate_domain() {
        assert_eq!(remap(5.0, 2.0, 2.0, 0.0, 100.0), 0.0);
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn custom_adc_calibration() {
        // 12-bit, 3.3 V board
        let conv = Converter::new(crate::config::CellCalibration::with_adc(3.3, 4095));
        assert!((conv.voltage(4095) - 3.3 * 5.0).abs() < EPS);
        assert!((conv.gas_concentration(4095) - 100.0).abs() < EPS);
    }
}
