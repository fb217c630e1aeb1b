//! Sensor Calibration Coefficients and Transfer Functions
//!
//! This module defines the calibration constants for the three analog
//! sensors wired to the fuel cell test stand: the stack voltage divider,
//! the system pressure transducer, and the hydrogen concentration sensor.

// ===== FUEL CELL VOLTAGE DIVIDER =====

/// Voltage divider ratio on the stack voltage input.
///
/// The fuel cell stack can exceed the ADC's 5 V range, so a resistive
/// divider steps it down 5:1 before the ADC pin. The conversion multiplies
/// the measured pin voltage back up by this ratio.
///
/// Source: board schematic (40k/10k divider network)
pub const VOLTAGE_DIVIDER_RATIO: f32 = 5.0;

// ===== PRESSURE TRANSDUCER =====

/// Pressure transducer transfer function offset (fraction of Vref).
///
/// The transducer outputs `Vout = Vref * (SLOPE * kPa + OFFSET)`, so a
/// 0 kPa input still reads 4% of Vref. Inverting the transfer function
/// subtracts this offset first.
///
/// Source: MPX-series transducer datasheet
pub const PRESSURE_TRANSFER_OFFSET: f32 = 0.04;

/// Pressure transducer transfer function slope (fraction of Vref per kPa).
///
/// Source: MPX-series transducer datasheet
pub const PRESSURE_TRANSFER_SLOPE: f32 = 0.09;

/// Maximum measurable system pressure (kPa).
///
/// Upper end of the transducer's rated range. Converted readings are
/// clamped to [0, this] rather than flagged as errors; values outside
/// the range silently saturate.
///
/// Source: MPX-series transducer datasheet (0-10 kPa variant)
pub const PRESSURE_SENSOR_MAX_KPA: f32 = 10.0;

// ===== HYDROGEN CONCENTRATION SENSOR =====

/// Upper end of the gas sensor's linear re-map domain.
///
/// The concentration estimate re-maps `Vout * 100` from
/// [0, ADC_REFERENCE_V * 100] onto [0, 100] percent. This is a deliberate
/// uncompensated linear approximation (no temperature or humidity
/// correction); keep it as-is rather than substituting a calibrated
/// MQ-series curve.
pub const GAS_CURVE_DOMAIN_MAX: f32 = super::adc::ADC_REFERENCE_V * 100.0;

/// Full-scale concentration output of the linear re-map (%).
pub const GAS_CURVE_RANGE_MAX: f32 = 100.0;
