//! Analog Input Abstraction
//!
//! ## Overview
//!
//! The monitor never touches ADC registers directly. It reads through the
//! [`AnalogSource`] trait, which a board crate implements over its HAL's
//! one-shot ADC driver. This keeps the conversion and threshold logic
//! host-testable and portable across targets.
//!
//! ## Error Model
//!
//! There is deliberately no error path: `read` returns a plain [`Sample`].
//! Hardware faults are out of scope for this system - a disconnected
//! sensor simply yields an unspecified in-range value (a floating pin reads
//! *something*), which flows through conversion and thresholding like any
//! other sample. Pressure saturates at the transducer range; voltage and
//! concentration pass through unmodified.

use heapless::Vec;

/// Raw ADC conversion result
///
/// In-range values are `[0, adc_max_count]` (1023 for the reference 10-bit
/// board). Ephemeral: produced and consumed within one monitor cycle.
pub type Sample = u16;

/// Maximum scripted samples per channel in [`SequenceAdc`]
pub const MAX_SEQUENCE_LEN: usize = 32;

/// Analog channel bound to one physical sensor
///
/// The discriminant doubles as the ADC channel number on the reference
/// board (A0..A2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Channel {
    /// Fuel cell stack voltage, behind the divider network (A0)
    FuelCellVoltage = 0,
    /// System pressure transducer (A1)
    SystemPressure = 1,
    /// Hydrogen concentration sensor (A2)
    HydrogenGas = 2,
}

impl Channel {
    /// All monitored channels, in read order
    pub const ALL: [Channel; 3] = [
        Channel::FuelCellVoltage,
        Channel::SystemPressure,
        Channel::HydrogenGas,
    ];

    /// ADC channel number on the reference board
    pub const fn adc_channel(&self) -> u8 {
        *self as u8
    }

    /// Human-readable name for logs
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::FuelCellVoltage => "voltage",
            Channel::SystemPressure => "pressure",
            Channel::HydrogenGas => "gas",
        }
    }
}

/// Source of raw analog samples
///
/// Implement this over the target HAL's ADC driver. `read` blocks until
/// the conversion completes; on a 10-bit SAR converter that is on the
/// order of 100 µs, well below the 2 s cycle period.
pub trait AnalogSource {
    /// Read one sample from the given channel
    fn read(&mut self, channel: Channel) -> Sample;
}

/// Source returning a fixed sample per channel
///
/// The analog counterpart of a fixed test clock: deterministic input for
/// unit tests and host demos.
#[derive(Debug, Clone)]
pub struct FixedAdc {
    samples: [Sample; 3],
}

impl FixedAdc {
    /// Source yielding the given (voltage, pressure, gas) samples forever
    pub const fn new(voltage: Sample, pressure: Sample, gas: Sample) -> Self {
        Self {
            samples: [voltage, pressure, gas],
        }
    }

    /// Replace the sample for one channel
    pub fn set(&mut self, channel: Channel, sample: Sample) {
        self.samples[channel as usize] = sample;
    }
}

impl AnalogSource for FixedAdc {
    fn read(&mut self, channel: Channel) -> Sample {
        self.samples[channel as usize]
    }
}

/// Source replaying a scripted sequence per channel
///
/// Each `read` pops the next scripted sample for that channel; when a
/// script runs out, the last sample repeats. Useful for driving the
/// monitor through alarm transitions in integration tests.
#[derive(Debug, Clone)]
pub struct SequenceAdc {
    scripts: [Vec<Sample, MAX_SEQUENCE_LEN>; 3],
    cursors: [usize; 3],
}

impl Default for SequenceAdc {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceAdc {
    /// Empty source; channels without a script read as 0
    pub const fn new() -> Self {
        Self {
            scripts: [Vec::new(), Vec::new(), Vec::new()],
            cursors: [0; 3],
        }
    }

    /// Append scripted samples for one channel
    ///
    /// Samples beyond [`MAX_SEQUENCE_LEN`] are dropped.
    pub fn script(mut self, channel: Channel, samples: &[Sample]) -> Self {
        for &s in samples {
            if self.scripts[channel as usize].push(s).is_err() {
                break;
            }
        }
        self
    }
}

impl AnalogSource for SequenceAdc {
    fn read(&mut self, channel: Channel) -> Sample {
        let idx = channel as usize;
        let script = &self.scripts[idx];
        if script.is_empty() {
            return 0;
        }

        let pos = self.cursors[idx].min(script.len() - 1);
        if self.cursors[idx] < script.len() {
            self.cursors[idx] += 1;
        }
        script[pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_adc_returns_per_channel_samples() {
        let mut adc = FixedAdc::new(512, 100, 900);
        assert_eq!(adc.read(Channel::FuelCellVoltage), 512);
        assert_eq!(adc.read(Channel::SystemPressure), 100);
        assert_eq!(adc.read(Channel::HydrogenGas), 900);

        adc.set(Channel::HydrogenGas, 10);
        assert_eq!(adc.read(Channel::HydrogenGas), 10);
    }

    #[test]
    fn sequence_adc_replays_then_holds_last() {
        let mut adc = SequenceAdc::new().script(Channel::SystemPressure, &[10, 20, 30]);

        assert_eq!(adc.read(Channel::SystemPressure), 10);
        assert_eq!(adc.read(Channel::SystemPressure), 20);
        assert_eq!(adc.read(Channel::SystemPressure), 30);
        // Exhausted script holds its last value
        assert_eq!(adc.read(Channel::SystemPressure), 30);

        // Unscripted channel reads as 0
        assert_eq!(adc.read(Channel::HydrogenGas), 0);
    }

    #[test]
    fn channel_metadata() {
        assert_eq!(Channel::FuelCellVoltage.adc_channel(), 0);
        assert_eq!(Channel::HydrogenGas.name(), "gas");
        assert_eq!(Channel::ALL.len(), 3);
    }
}
