//! Time-Related Constants
//!
//! Intervals and durations for the monitor loop: the sensor warm-up hold,
//! its countdown tick, and the steady-state polling period.

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

// ===== MONITOR LOOP INTERVALS =====

/// Sensor warm-up duration (milliseconds).
///
/// The hydrogen sensor's heater element needs ~30 s to reach operating
/// temperature; readings before that are not trusted. The monitor holds
/// in the warm-up state for exactly this long before the first live cycle.
///
/// Source: MQ-series gas sensor datasheet (preheat time)
pub const WARMUP_DURATION_MS: u32 = 30_000;

/// Warm-up countdown tick (milliseconds).
///
/// During warm-up the loop sleeps in these increments and reports the
/// remaining seconds after each tick.
pub const WARMUP_TICK_MS: u32 = 1_000;

/// Steady-state polling period (milliseconds).
///
/// One read-convert-evaluate-report round per period. 0.5 Hz balances
/// reaction time against serial log volume; the alarm limits have enough
/// margin that two seconds of latency is acceptable.
pub const CYCLE_INTERVAL_MS: u32 = 2_000;
