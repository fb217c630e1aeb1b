//! 128×64 Monochrome Display Reporter
//!
//! ## Overview
//!
//! Renders each cycle's frame to a small OLED-class display through the
//! embedded-graphics [`DrawTarget`] abstraction, so the same layout code
//! drives an SSD1306 over I2C, an SH1106 over SPI, or a host framebuffer
//! in tests.
//!
//! ## Layout
//!
//! ```text
//! ┌────────────────────────────┐
//! │ H2 CELL MONITOR            │  header
//! │ V:  12.3 V                 │
//! │ P:   5.0 kPa !             │  '!' marker when that alarm is set
//! │ H2: 40.2 %                 │
//! │ ████ ALARM! ████ / System OK  status line, inverted when alarmed
//! └────────────────────────────┘
//! ```
//!
//! Every frame starts from a cleared surface and redraws everything -
//! no partial updates, so a frame's pixels depend only on that frame.

use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use super::{write_fixed1, Reporter, StatusFrame};
use crate::errors::ReportError;

/// Display width the layout targets (pixels)
pub const DISPLAY_WIDTH: u32 = 128;

/// Display height the layout targets (pixels)
pub const DISPLAY_HEIGHT: u32 = 64;

const HEADER_Y: i32 = 0;
const READING_Y: [i32; 3] = [14, 26, 38];
const STATUS_BAR_Y: i32 = 51;
const STATUS_TEXT_Y: i32 = 53;

/// A monochrome surface the reporter can draw on and commit
///
/// `commit` pushes the drawn frame to the panel (e.g. `flush` on an
/// SSD1306 driver). Targets that draw directly to the panel implement it
/// as a no-op.
pub trait Screen: DrawTarget<Color = BinaryColor> {
    /// Push the current frame to the panel
    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// Pixel-display backend
pub struct DisplayReporter<S: Screen> {
    screen: S,
}

impl<S: Screen> DisplayReporter<S> {
    /// Reporter drawing to the given screen
    pub fn new(screen: S) -> Self {
        Self { screen }
    }

    /// Consume the reporter, returning the screen
    pub fn into_screen(self) -> S {
        self.screen
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: BinaryColor) -> Result<(), ReportError> {
        let style = MonoTextStyle::new(&FONT_6X10, color);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut self.screen)
            .map(|_| ())
            .map_err(|_| ReportError::Draw)
    }

    fn draw_reading(
        &mut self,
        label: &str,
        value: f32,
        unit: &str,
        alarmed: bool,
        y: i32,
    ) -> Result<(), ReportError> {
        let mut line: String<21> = String::new();
        write!(line, "{} ", label)?;
        write_fixed1(&mut line, value)?;
        write!(line, " {}", unit)?;
        if alarmed {
            write!(line, " !")?;
        }
        self.draw_text(&line, 0, y, BinaryColor::On)
    }

    fn draw_status(&mut self, alarmed: bool) -> Result<(), ReportError> {
        if alarmed {
            Rectangle::new(
                Point::new(0, STATUS_BAR_Y),
                Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT - STATUS_BAR_Y as u32),
            )
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.screen)
            .map_err(|_| ReportError::Draw)?;

            self.draw_text("ALARM!", 46, STATUS_TEXT_Y, BinaryColor::Off)
        } else {
            self.draw_text("System OK", 36, STATUS_TEXT_Y, BinaryColor::On)
        }
    }

    fn clear(&mut self) -> Result<(), ReportError> {
        self.screen
            .clear(BinaryColor::Off)
            .map_err(|_| ReportError::Draw)
    }

    fn commit(&mut self) -> Result<(), ReportError> {
        self.screen.commit().map_err(|_| ReportError::Draw)
    }
}

impl<S: Screen> Reporter for DisplayReporter<S> {
    fn init(&mut self) -> Result<(), ReportError> {
        // A cleared, committed frame proves the controller responds
        self.clear()?;
        self.commit()
    }

    fn countdown(&mut self, remaining_s: u32) -> Result<(), ReportError> {
        self.clear()?;
        self.draw_text("H2 CELL MONITOR", 0, HEADER_Y, BinaryColor::On)?;
        self.draw_text("Warming up...", 0, READING_Y[0], BinaryColor::On)?;

        let mut line: String<12> = String::new();
        write!(line, "{} s", remaining_s)?;
        self.draw_text(&line, 0, READING_Y[1], BinaryColor::On)?;
        self.commit()
    }

    fn report(&mut self, frame: &StatusFrame) -> Result<(), ReportError> {
        self.clear()?;
        self.draw_text("H2 CELL MONITOR", 0, HEADER_Y, BinaryColor::On)?;

        self.draw_reading("V: ", frame.voltage_v, "V", frame.alarms.voltage, READING_Y[0])?;
        self.draw_reading("P: ", frame.pressure_kpa, "kPa", frame.alarms.pressure, READING_Y[1])?;
        self.draw_reading("H2:", frame.gas_pct, "%", frame.alarms.gas, READING_Y[2])?;

        self.draw_status(frame.alarms.any())?;
        self.commit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::AlarmFlags;

    /// Host framebuffer standing in for a panel
    struct FrameBuffer {
        pixels: [[bool; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
        commits: usize,
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self {
                pixels: [[false; DISPLAY_WIDTH as usize]; DISPLAY_HEIGHT as usize],
                commits: 0,
            }
        }

        fn lit(&self) -> usize {
            self.pixels
                .iter()
                .flatten()
                .filter(|&&on| on)
                .count()
        }
    }

    impl Dimensions for FrameBuffer {
        fn bounding_box(&self) -> Rectangle {
            Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT))
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if (0..DISPLAY_WIDTH as i32).contains(&p.x)
                    && (0..DISPLAY_HEIGHT as i32).contains(&p.y)
                {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl Screen for FrameBuffer {
        fn commit(&mut self) -> Result<(), Self::Error> {
            self.commits += 1;
            Ok(())
        }
    }

    fn frame(alarms: AlarmFlags) -> StatusFrame {
        StatusFrame {
            voltage_v: 12.3,
            pressure_kpa: 5.0,
            gas_pct: 40.2,
            alarms,
            timestamp: 0,
        }
    }

    #[test]
    fn init_commits_a_blank_frame() {
        let mut reporter = DisplayReporter::new(FrameBuffer::new());
        reporter.init().unwrap();

        let screen = reporter.into_screen();
        assert_eq!(screen.commits, 1);
        assert_eq!(screen.lit(), 0);
    }

    #[test]
    fn report_draws_and_commits() {
        let mut reporter = DisplayReporter::new(FrameBuffer::new());
        reporter.report(&frame(AlarmFlags::none())).unwrap();

        let screen = reporter.into_screen();
        assert_eq!(screen.commits, 1);
        assert!(screen.lit() > 0);
    }

    #[test]
    fn alarm_inverts_status_bar() {
        let mut ok = DisplayReporter::new(FrameBuffer::new());
        ok.report(&frame(AlarmFlags::none())).unwrap();

        let mut alarmed = DisplayReporter::new(FrameBuffer::new());
        alarmed
            .report(&frame(AlarmFlags {
                voltage: false,
                pressure: false,
                gas: true,
            }))
            .unwrap();

        let ok_screen = ok.into_screen();
        let alarm_screen = alarmed.into_screen();

        // The filled bar lights far more of the status rows than text does
        let bar_rows = STATUS_BAR_Y as usize..DISPLAY_HEIGHT as usize;
        let count = |s: &FrameBuffer| -> usize {
            s.pixels[bar_rows.clone()]
                .iter()
                .flatten()
                .filter(|&&on| on)
                .count()
        };
        assert!(count(&alarm_screen) > count(&ok_screen) * 2);
    }

    #[test]
    fn full_redraw_leaves_no_residue() {
        let all = AlarmFlags {
            voltage: true,
            pressure: true,
            gas: true,
        };

        // Render the quiet frame on a fresh screen
        let mut fresh = DisplayReporter::new(FrameBuffer::new());
        fresh.report(&frame(AlarmFlags::none())).unwrap();
        let expected = fresh.into_screen().pixels;

        // Render an alarmed frame first, then the quiet one on the same screen
        let mut reused = DisplayReporter::new(FrameBuffer::new());
        reused.report(&frame(all)).unwrap();
        reused.report(&frame(AlarmFlags::none())).unwrap();

        assert_eq!(reused.into_screen().pixels, expected);
    }

    #[test]
    fn countdown_renders_remaining_time() {
        let mut reporter = DisplayReporter::new(FrameBuffer::new());
        reporter.countdown(30).unwrap();

        let a = reporter.into_screen();
        assert_eq!(a.commits, 1);
        assert!(a.lit() > 0);

        // Different remaining time renders differently
        let mut other = DisplayReporter::new(FrameBuffer::new());
        other.countdown(5).unwrap();
        assert_ne!(other.into_screen().pixels, a.pixels);
    }
}
