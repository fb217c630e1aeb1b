//! Fixed Safety Limits for Monitored Quantities
//!
//! One limit per monitored quantity. An alarm is raised when the converted
//! reading *strictly exceeds* its limit; readings exactly at the limit do
//! not alarm. Limits are process-wide, read-only configuration.

/// Maximum safe stack output voltage (V).
///
/// Above this, the load electronics downstream of the stack are at risk.
///
/// Source: test stand operating procedure
pub const VOLTAGE_LIMIT_V: f32 = 50.0;

/// Maximum safe system pressure (kPa).
///
/// Kept below the transducer's 10 kPa full scale so the alarm fires while
/// the reading is still inside the measurable range.
///
/// Source: test stand operating procedure
pub const PRESSURE_LIMIT_KPA: f32 = 8.0;

/// Maximum safe hydrogen concentration (%).
///
/// The sensor's re-mapped percentage, not a calibrated %LEL figure.
///
/// Source: test stand operating procedure
pub const GAS_LIMIT_PCT: f32 = 80.0;
