//! Constants for Hydromon Core
//!
//! This module provides centralized, well-documented constants used throughout
//! the monitoring system. All numeric values are defined here with clear
//! explanations of their purpose, source, and rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Adc**: Converter resolution and reference voltage
//! - **Sensors**: Calibration coefficients and transfer functions
//! - **Safety**: Fixed alarm limits for the monitored quantities
//! - **Time**: Warm-up, countdown, and cycle intervals
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include comprehensive documentation
//! 3. Reference datasheets or measured hardware where applicable
//! 4. Use descriptive names that include units

/// ADC resolution and reference voltage.
pub mod adc;

/// Sensor calibration coefficients and transfer functions.
pub mod sensors;

/// Fixed safety limits for the monitored quantities.
pub mod safety;

/// Time-related constants for the monitor loop.
pub mod time;

// Re-export commonly used constants for convenience
pub use adc::{ADC_MAX_COUNT, ADC_REFERENCE_V};

pub use sensors::{
    VOLTAGE_DIVIDER_RATIO,
    PRESSURE_TRANSFER_OFFSET, PRESSURE_TRANSFER_SLOPE, PRESSURE_SENSOR_MAX_KPA,
    GAS_CURVE_DOMAIN_MAX,
};

pub use safety::{
    VOLTAGE_LIMIT_V, PRESSURE_LIMIT_KPA, GAS_LIMIT_PCT,
};

pub use time::{
    MS_PER_SECOND, WARMUP_DURATION_MS, WARMUP_TICK_MS, CYCLE_INTERVAL_MS,
};
