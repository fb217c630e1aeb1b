//! Display-backend monitor demo
//!
//! Drives the 128×64 layout against a host framebuffer that prints each
//! committed frame to the terminal as ASCII art, so the display output can
//! be inspected without hardware.
//!
//! Run with: cargo run --example 02_display_monitor

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::Rectangle,
};
use hydromon_core::{
    adc::SequenceAdc,
    monitor::{Monitor, ThreadDelay},
    report::{DisplayReporter, Screen},
    time::SystemTime,
    Channel, MonitorConfig,
};

const WIDTH: usize = 128;
const HEIGHT: usize = 64;

/// Framebuffer that renders committed frames as ASCII art
struct AsciiScreen {
    pixels: [[bool; WIDTH]; HEIGHT],
}

impl AsciiScreen {
    fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
        }
    }
}

impl Dimensions for AsciiScreen {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(WIDTH as u32, HEIGHT as u32))
    }
}

impl DrawTarget for AsciiScreen {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if (0..WIDTH as i32).contains(&p.x) && (0..HEIGHT as i32).contains(&p.y) {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl Screen for AsciiScreen {
    fn commit(&mut self) -> Result<(), Self::Error> {
        println!("+{}+", "-".repeat(WIDTH));
        for row in &self.pixels {
            let line: String = row.iter().map(|&on| if on { '#' } else { ' ' }).collect();
            println!("|{}|", line);
        }
        println!("+{}+", "-".repeat(WIDTH));
        Ok(())
    }
}

fn main() {
    // Third cycle trips the gas alarm, fourth recovers
    let adc = SequenceAdc::new()
        .script(Channel::FuelCellVoltage, &[500, 510, 520, 505])
        .script(Channel::SystemPressure, &[600, 650, 700, 620])
        .script(Channel::HydrogenGas, &[100, 400, 850, 150]);

    let mut monitor = Monitor::new(
        adc,
        DisplayReporter::new(AsciiScreen::new()),
        ThreadDelay,
        SystemTime,
    )
    .with_config(MonitorConfig {
        warmup_ms: 2_000,
        warmup_tick_ms: 1_000,
        cycle_ms: 500,
    });

    if let Err(e) = monitor.run_cycles(4) {
        eprintln!("monitor failed: {}", e);
        std::process::exit(1);
    }
}
