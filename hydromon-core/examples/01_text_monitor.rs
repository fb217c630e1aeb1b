//! Text-backend monitor demo
//!
//! Runs the full warm-up/polling sequence against scripted analog samples,
//! writing the cycle log to stdout. Timing is shortened so the demo
//! finishes in a few seconds; on real hardware the defaults apply.
//!
//! Run with: cargo run --example 01_text_monitor

use hydromon_core::{
    adc::SequenceAdc,
    monitor::{Monitor, ThreadDelay},
    report::TextReporter,
    time::SystemTime,
    Channel, MonitorConfig,
};

/// `core::fmt::Write` sink over stdout
struct Stdout;

impl core::fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

fn main() {
    // Pressure ramps through the 8 kPa limit and back; gas spikes once
    let adc = SequenceAdc::new()
        .script(Channel::FuelCellVoltage, &[500, 510, 520, 515, 505])
        .script(Channel::SystemPressure, &[600, 700, 800, 820, 650])
        .script(Channel::HydrogenGas, &[100, 120, 140, 850, 130]);

    let mut monitor = Monitor::new(adc, TextReporter::new(Stdout), ThreadDelay, SystemTime)
        .with_config(MonitorConfig {
            warmup_ms: 3_000,
            warmup_tick_ms: 1_000,
            cycle_ms: 500,
        });

    if let Err(e) = monitor.run_cycles(5) {
        eprintln!("monitor failed: {}", e);
        std::process::exit(1);
    }
}
