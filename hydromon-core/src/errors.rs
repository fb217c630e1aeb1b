//! Error Types for the Monitoring Loop
//!
//! ## Design Philosophy
//!
//! Errors here follow the same embedded-first rules as the rest of the
//! crate:
//!
//! 1. **Small Size**: Every variant carries at most a `&'static str`, so
//!    the enums stay pointer-sized and cheap to return from the cycle path.
//!
//! 2. **No Heap Allocation**: No `String` anywhere - static messages only.
//!
//! 3. **Copy Semantics**: Errors implement Copy so they can be returned and
//!    logged without move complications.
//!
//! ## What Is (and Is Not) an Error
//!
//! Threshold exceedance is *not* an error - it is the system's normal
//! output, carried as [`AlarmFlags`](crate::threshold::AlarmFlags) through
//! the report path. Out-of-range sensor values are not errors either:
//! pressure silently clamps to the transducer's range, voltage and
//! concentration pass through unmodified.
//!
//! Two conditions are modeled as errors:
//! - Reporter initialization failure (e.g. the display controller does not
//!   respond on the bus). Fatal: returned to the caller before warm-up
//!   begins, which decides whether to abort the process.
//! - Reporter output failure during a cycle (draw or format error).

use thiserror_no_std::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors surfaced by the monitor loop
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    /// Reporter backend failed to initialize; fatal, raised before warm-up
    #[error("Reporter initialization failed: {reason}")]
    ReporterInit {
        /// Backend-specific description of the failure
        reason: &'static str,
    },

    /// Reporter backend failed while emitting a cycle's output
    #[error("Report failed: {0}")]
    Report(#[from] ReportError),
}

/// Errors from a reporter backend
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// Drawing to the output surface failed
    #[error("Draw operation failed")]
    Draw,

    /// Formatting a value into the line buffer failed
    #[error("Value formatting failed")]
    Format,

    /// Backend is not ready (init not called or init failed)
    #[error("Reporter not initialized: {reason}")]
    NotReady {
        /// Why the backend cannot accept frames
        reason: &'static str,
    },
}

impl From<core::fmt::Error> for ReportError {
    fn from(_: core::fmt::Error) -> Self {
        ReportError::Format
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for MonitorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ReporterInit { reason } =>
                defmt::write!(fmt, "Reporter init failed: {}", reason),
            Self::Report(e) =>
                defmt::write!(fmt, "Report failed: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReportError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Draw => defmt::write!(fmt, "Draw failed"),
            Self::Format => defmt::write!(fmt, "Format failed"),
            Self::NotReady { reason } => defmt::write!(fmt, "Not ready: {}", reason),
        }
    }
}
