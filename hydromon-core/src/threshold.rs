//! Threshold Evaluation and Alarm Flags
//!
//! ## Overview
//!
//! Compares each converted reading against its configured safety limit and
//! produces one boolean alarm per quantity. Purely combinational: flags are
//! recomputed from scratch every cycle from the current readings alone - no
//! latching, no hysteresis, no memory of past cycles. Surfacing a
//! distinguishable notice on a false→true transition is the monitor's and
//! reporter's concern, not the evaluator's.
//!
//! ## Comparison Semantics
//!
//! A flag is set iff the reading **strictly exceeds** its limit: a reading
//! exactly at 50.0 V does not alarm, 50.01 V does.
//!
//! Non-finite readings (NaN, infinity) cannot be shown safe, so they trip
//! the corresponding alarm. With in-range integer samples the conversions
//! never produce one, but `evaluate` accepts arbitrary floats.

use crate::config::SafetyLimits;

/// One alarm flag per monitored quantity
///
/// A fresh value each cycle; nothing holds a mutable alarm triple across
/// cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlarmFlags {
    /// Stack voltage above its limit
    pub voltage: bool,
    /// System pressure above its limit
    pub pressure: bool,
    /// Hydrogen concentration above its limit
    pub gas: bool,
}

impl AlarmFlags {
    /// No alarms set
    pub const fn none() -> Self {
        Self {
            voltage: false,
            pressure: false,
            gas: false,
        }
    }

    /// Whether any alarm is set
    pub const fn any(&self) -> bool {
        self.voltage || self.pressure || self.gas
    }

    /// Flags set in `self` that were clear in `previous`
    ///
    /// Used by the monitor to emit a one-shot notice when an alarm is
    /// first raised.
    pub const fn raised_since(&self, previous: &AlarmFlags) -> Self {
        Self {
            voltage: self.voltage && !previous.voltage,
            pressure: self.pressure && !previous.pressure,
            gas: self.gas && !previous.gas,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlarmFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "AlarmFlags {{ voltage: {}, pressure: {}, gas: {} }}",
            self.voltage,
            self.pressure,
            self.gas
        )
    }
}

/// Compares readings against fixed safety limits
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdEvaluator {
    limits: SafetyLimits,
}

impl ThresholdEvaluator {
    /// Evaluator for the given limits
    pub const fn new(limits: SafetyLimits) -> Self {
        Self { limits }
    }

    /// Limits in use
    pub const fn limits(&self) -> &SafetyLimits {
        &self.limits
    }

    /// Compute alarm flags for one cycle's readings
    pub fn evaluate(&self, voltage_v: f32, pressure_kpa: f32, gas_pct: f32) -> AlarmFlags {
        AlarmFlags {
            voltage: exceeds(voltage_v, self.limits.voltage_v),
            pressure: exceeds(pressure_kpa, self.limits.pressure_kpa),
            gas: exceeds(gas_pct, self.limits.gas_pct),
        }
    }
}

/// Strict-greater comparison; non-finite readings count as exceeded
fn exceeds(reading: f32, limit: f32) -> bool {
    !reading.is_finite() || reading > limit
}
