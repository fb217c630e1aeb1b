//! Line-Oriented Text Reporter
//!
//! Writes one block per cycle to any `core::fmt::Write` sink: a warning
//! line per exceeded limit, then the three labeled readings. On a serial
//! console this reproduces the classic poll-loop log.

use core::fmt::Write;

use super::{write_fixed1, Reporter, StatusFrame};
use crate::errors::ReportError;

/// Text backend over a `core::fmt::Write` sink
///
/// The sink is owned; use [`TextReporter::sink`] to get the accumulated
/// output back when writing into a buffer (tests, demos).
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    sink: W,
}

impl<W: Write> TextReporter<W> {
    /// Reporter writing to the given sink
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Borrow the sink
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the reporter, returning the sink
    pub fn into_sink(self) -> W {
        self.sink
    }

    fn write_reading(
        &mut self,
        label: &str,
        value: f32,
        unit: &str,
        alarmed: bool,
    ) -> Result<(), ReportError> {
        write!(self.sink, "{}: ", label)?;
        write_fixed1(&mut self.sink, value)?;
        write!(self.sink, " {}", unit)?;
        if alarmed {
            write!(self.sink, " !")?;
        }
        writeln!(self.sink)?;
        Ok(())
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn countdown(&mut self, remaining_s: u32) -> Result<(), ReportError> {
        writeln!(self.sink, "Warming up sensors... {} s", remaining_s)?;
        Ok(())
    }

    fn report(&mut self, frame: &StatusFrame) -> Result<(), ReportError> {
        if frame.alarms.voltage {
            writeln!(self.sink, "WARNING: voltage above safe limit")?;
        }
        if frame.alarms.pressure {
            writeln!(self.sink, "WARNING: pressure above safe limit")?;
        }
        if frame.alarms.gas {
            writeln!(self.sink, "WARNING: hydrogen concentration above safe limit")?;
        }

        self.write_reading("Voltage", frame.voltage_v, "V", frame.alarms.voltage)?;
        self.write_reading("Pressure", frame.pressure_kpa, "kPa", frame.alarms.pressure)?;
        self.write_reading("H2 conc", frame.gas_pct, "%", frame.alarms.gas)?;
        writeln!(self.sink)?;
        Ok(())
    }
}
