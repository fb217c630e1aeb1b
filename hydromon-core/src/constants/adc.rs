//! ADC Resolution and Reference Constants
//!
//! The monitored board uses a 10-bit successive-approximation converter
//! referenced to the 5 V supply rail. All three sensor channels share the
//! same converter, so these values apply uniformly.

/// Maximum ADC count for a 10-bit converter.
///
/// A 10-bit SAR ADC produces codes in [0, 1023]. Full-scale input
/// reads as 1023, not 1024.
///
/// Source: ATmega328P datasheet (10-bit ADC)
pub const ADC_MAX_COUNT: u16 = 1023;

/// ADC reference voltage (V).
///
/// The converter is referenced to the regulated 5 V rail. Sensor output
/// voltages are reconstructed as `count / ADC_MAX_COUNT * ADC_REFERENCE_V`.
///
/// Source: board schematic (AVcc reference)
pub const ADC_REFERENCE_V: f32 = 5.0;

/// ADC resolution in bits.
///
/// Kept alongside the max count so custom calibrations for 12-bit
/// converters (e.g. ESP32, SAMD21) can derive their own count.
pub const ADC_RESOLUTION_BITS: u8 = 10;
