//! Core monitoring engine for Hydromon
//!
//! Polls a hydrogen fuel cell's analog sensors, converts raw ADC samples
//! into physical units, checks them against fixed safety limits, and
//! reports status over a text log or a small monochrome display.
//!
//! Key constraints:
//! - Runs on bare-metal targets (no_std, no heap in the cycle path)
//! - Conversions and threshold checks are pure functions of the current
//!   sample and the startup configuration
//! - All hardware access goes through traits, so the whole loop runs on
//!   the host in tests
//!
//! ```no_run
//! use hydromon_core::{
//!     adc::FixedAdc,
//!     monitor::{Monitor, ThreadDelay},
//!     report::TextReporter,
//!     time::SystemTime,
//! };
//!
//! let mut monitor = Monitor::new(
//!     FixedAdc::new(512, 300, 100),
//!     TextReporter::new(heapless::String::<1024>::new()),
//!     ThreadDelay,
//!     SystemTime,
//! );
//!
//! // Warm up, then poll forever; returns only on a reporter failure
//! monitor.run().unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adc;
pub mod config;
pub mod constants;
pub mod convert;
pub mod errors;
pub mod monitor;
pub mod report;
pub mod threshold;
pub mod time;

// Public API
pub use adc::{AnalogSource, Channel, Sample};
pub use config::{CellCalibration, MonitorConfig, SafetyLimits};
pub use convert::Converter;
pub use errors::{MonitorError, MonitorResult, ReportError};
pub use monitor::{Delay, Monitor, MonitorState};
pub use report::{Reporter, StatusFrame, TextReporter};
#[cfg(feature = "display")]
pub use report::{DisplayReporter, Screen};
pub use threshold::{AlarmFlags, ThresholdEvaluator};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
