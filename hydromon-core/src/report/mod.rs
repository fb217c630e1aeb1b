//! Status Reporting Backends
//!
//! ## Overview
//!
//! Every monitor cycle produces one [`StatusFrame`] - the three converted
//! readings plus the alarm flags computed from them. A [`Reporter`] renders
//! frames to an output surface. Two interchangeable backends ship with the
//! crate:
//!
//! - [`TextReporter`]: line-oriented human-readable log over any
//!   `core::fmt::Write` sink (a UART, a host `String`, stdout via adapter).
//! - [`DisplayReporter`]: 128×64 monochrome pixel layout over any
//!   embedded-graphics draw target (behind the `display` feature).
//!
//! Both consume the same frame and both fully regenerate their output every
//! cycle. The display backend in particular never does partial updates: a
//! frame's rendering depends only on that frame, never on what was on the
//! surface before.

use crate::errors::ReportError;
use crate::threshold::AlarmFlags;
use crate::time::Timestamp;

mod text;
pub use text::TextReporter;

#[cfg(feature = "display")]
mod display;
#[cfg(feature = "display")]
pub use display::{DisplayReporter, Screen};

/// One cycle's readings and alarm state
///
/// A fresh value each cycle, passed by reference to the reporter. Carries
/// no history.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusFrame {
    /// Stack output voltage (V)
    pub voltage_v: f32,

    /// System pressure (kPa)
    pub pressure_kpa: f32,

    /// Hydrogen concentration (%)
    pub gas_pct: f32,

    /// Alarm flags computed from the readings above
    pub alarms: AlarmFlags,

    /// When the readings were taken (ms)
    pub timestamp: Timestamp,
}

/// Output surface for monitor status
///
/// `report` must be deterministic in the frame: rendering the same frame
/// twice produces identical output, regardless of what was rendered in
/// between.
pub trait Reporter {
    /// Bring the backend up; called once before warm-up begins
    ///
    /// A failure here is fatal - the monitor surfaces it to the caller
    /// instead of entering warm-up.
    fn init(&mut self) -> Result<(), ReportError> {
        Ok(())
    }

    /// Report warm-up progress with the remaining hold time
    fn countdown(&mut self, remaining_s: u32) -> Result<(), ReportError>;

    /// Render one cycle's frame
    fn report(&mut self, frame: &StatusFrame) -> Result<(), ReportError>;
}

/// Write `value` with one fixed decimal place
///
/// Host formatting of floats (`{:.1}`) drags in a large chunk of core::fmt
/// float machinery; a scaled integer round keeps the embedded build lean
/// and the output stable.
pub(crate) fn write_fixed1<W: core::fmt::Write>(w: &mut W, value: f32) -> core::fmt::Result {
    let scaled = libm::roundf(value * 10.0);
    // Saturate absurd magnitudes rather than overflowing the cast
    let scaled = scaled.clamp(i32::MIN as f32, i32::MAX as f32) as i32;

    let sign = if scaled < 0 { "-" } else { "" };
    let scaled = scaled.unsigned_abs();
    write!(w, "{}{}.{}", sign, scaled / 10, scaled % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::String;

    fn fixed1(value: f32) -> String<16> {
        let mut s = String::new();
        write_fixed1(&mut s, value).unwrap();
        s
    }

    #[test]
    fn fixed1_formatting() {
        assert_eq!(fixed1(0.0).as_str(), "0.0");
        assert_eq!(fixed1(12.34).as_str(), "12.3");
        assert_eq!(fixed1(12.35).as_str(), "12.4");
        assert_eq!(fixed1(9.96).as_str(), "10.0");
        assert_eq!(fixed1(-3.21).as_str(), "-3.2");
    }
}
