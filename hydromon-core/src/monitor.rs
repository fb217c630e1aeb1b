//! Monitor Loop: Warm-Up Hold and Polling Cycles
//!
//! ## Overview
//!
//! The monitor owns one of everything - analog source, converter,
//! evaluator, reporter, delay, clock - and orchestrates the single data
//! path: read all three channels → convert → evaluate thresholds → report,
//! once per cycle.
//!
//! ## State Machine
//!
//! Exactly two states:
//!
//! ```text
//! ┌────────┐  warm-up elapsed   ┌─────────┐
//! │ WarmUp ├───────────────────▶│ Running │──┐ every cycle_ms
//! └────────┘   (unconditional)  └─────────┘◀─┘
//! ```
//!
//! WarmUp is entered at startup and holds for the configured duration,
//! sleeping in fixed ticks and reporting a countdown after each. The
//! transition to Running is unconditional and permanent; Running has no
//! exit - [`Monitor::run`] returns only on a reporter error.
//!
//! Reporter initialization happens before warm-up; a failure there is
//! returned to the caller as [`MonitorError::ReporterInit`] instead of
//! halting in place, so the process decides whether to abort.
//!
//! ## Alarm Edges
//!
//! The evaluator is memoryless; the monitor keeps only the previous
//! cycle's flags, and only to log a one-shot notice when a flag goes
//! false→true. Reporters re-render every set flag every cycle regardless.

use crate::{
    adc::{AnalogSource, Channel},
    config::{CellCalibration, MonitorConfig, SafetyLimits},
    convert::Converter,
    errors::{MonitorError, MonitorResult},
    report::{Reporter, StatusFrame},
    threshold::{AlarmFlags, ThresholdEvaluator},
    time::TimeSource,
};

/// Suspension point for the monitor loop
///
/// The only blocking the monitor ever does. Implement over the target's
/// busy-wait or timer delay; on the host, [`ThreadDelay`] sleeps the
/// thread.
pub trait Delay {
    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Thread-sleeping delay (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}

/// Recording delay for tests
///
/// Returns immediately and remembers every requested sleep, so tests can
/// assert on warm-up and cycle timing without waiting for it.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    sleeps: heapless::Vec<u32, 256>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every sleep requested so far, in order
    pub fn sleeps(&self) -> &[u32] {
        &self.sleeps
    }

    /// Total time slept (ms)
    pub fn total_ms(&self) -> u64 {
        self.sleeps.iter().map(|&ms| ms as u64).sum()
    }
}

impl Delay for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        // Past capacity, sleeps are still "taken" but no longer recorded
        let _ = self.sleeps.push(ms);
    }
}

/// Monitor loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    /// Initial hold; readings are not yet trusted
    WarmUp,
    /// Steady-state polling
    Running,
}

/// The monitoring loop
///
/// Generic over the four seams that touch the outside world: the analog
/// source, the reporter backend, the delay provider, and the clock.
pub struct Monitor<A, R, D, T> {
    adc: A,
    reporter: R,
    delay: D,
    time: T,
    converter: Converter,
    evaluator: ThresholdEvaluator,
    config: MonitorConfig,
    state: MonitorState,
    last_alarms: AlarmFlags,
}

impl<A, R, D, T> Monitor<A, R, D, T>
where
    A: AnalogSource,
    R: Reporter,
    D: Delay,
    T: TimeSource,
{
    /// Monitor with default calibration, limits, and timing
    pub fn new(adc: A, reporter: R, delay: D, time: T) -> Self {
        Self {
            adc,
            reporter,
            delay,
            time,
            converter: Converter::default(),
            evaluator: ThresholdEvaluator::default(),
            config: MonitorConfig::default(),
            state: MonitorState::WarmUp,
            last_alarms: AlarmFlags::none(),
        }
    }

    /// Replace the analog front-end calibration
    pub fn with_calibration(mut self, calibration: CellCalibration) -> Self {
        self.converter = Converter::new(calibration);
        self
    }

    /// Replace the safety limits
    pub fn with_limits(mut self, limits: SafetyLimits) -> Self {
        self.evaluator = ThresholdEvaluator::new(limits);
        self
    }

    /// Replace the loop timing
    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Current loop state
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Reporter borrowed for inspection (tests, demos)
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Delay provider borrowed for inspection (tests)
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Bring the reporter backend up
    ///
    /// Called before warm-up. A failure is fatal: the monitor never enters
    /// warm-up and the caller decides whether to abort the process.
    pub fn init(&mut self) -> MonitorResult<()> {
        self.reporter.init().map_err(|_| MonitorError::ReporterInit {
            reason: "reporter backend did not come up",
        })
    }

    /// Hold for the configured warm-up duration
    ///
    /// Sleeps in `warmup_tick_ms` increments, reporting the remaining
    /// seconds after each tick. The total time slept is exactly
    /// `warmup_ms` regardless of the tick size. Transitions to Running
    /// unconditionally on expiry.
    pub fn warm_up(&mut self) -> MonitorResult<()> {
        let mut remaining = self.config.warmup_ms;
        while remaining > 0 {
            let remaining_s = remaining.div_ceil(1000);
            #[cfg(feature = "std")]
            log::info!("warming up, {} s remaining", remaining_s);
            self.reporter.countdown(remaining_s)?;

            // A zero tick would spin forever; sleep the rest instead
            let tick = match self.config.warmup_tick_ms {
                0 => remaining,
                t => t.min(remaining),
            };
            self.delay.delay_ms(tick);
            remaining -= tick;
        }

        self.state = MonitorState::Running;
        Ok(())
    }

    /// One round of read → convert → evaluate → report
    pub fn run_cycle(&mut self) -> MonitorResult<StatusFrame> {
        let voltage_v = self.converter.voltage(self.adc.read(Channel::FuelCellVoltage));
        let pressure_kpa = self.converter.pressure(self.adc.read(Channel::SystemPressure));
        let gas_pct = self
            .converter
            .gas_concentration(self.adc.read(Channel::HydrogenGas));

        let alarms = self.evaluator.evaluate(voltage_v, pressure_kpa, gas_pct);
        self.notify_raised(alarms.raised_since(&self.last_alarms));

        #[cfg(feature = "std")]
        log::debug!(
            "cycle: {:.2} V, {:.2} kPa, {:.2} %, alarms: {:?}",
            voltage_v,
            pressure_kpa,
            gas_pct,
            alarms
        );

        let frame = StatusFrame {
            voltage_v,
            pressure_kpa,
            gas_pct,
            alarms,
            timestamp: self.time.now(),
        };
        self.reporter.report(&frame)?;

        self.last_alarms = alarms;
        Ok(frame)
    }

    /// Run forever: init, warm up, then poll every `cycle_ms`
    ///
    /// Returns only on a reporter failure; the system otherwise runs until
    /// externally powered off.
    pub fn run(&mut self) -> MonitorResult<core::convert::Infallible> {
        self.init()?;
        self.warm_up()?;
        loop {
            self.run_cycle()?;
            self.delay.delay_ms(self.config.cycle_ms);
        }
    }

    /// Run a bounded number of cycles (tests and host demos)
    ///
    /// Same sequence as [`Monitor::run`], stopping after `cycles` rounds.
    pub fn run_cycles(&mut self, cycles: usize) -> MonitorResult<()> {
        self.init()?;
        self.warm_up()?;
        for _ in 0..cycles {
            self.run_cycle()?;
            self.delay.delay_ms(self.config.cycle_ms);
        }
        Ok(())
    }

    fn notify_raised(&self, raised: AlarmFlags) {
        #[cfg(feature = "std")]
        {
            if raised.voltage {
                log::warn!("voltage alarm raised");
            }
            if raised.pressure {
                log::warn!("pressure alarm raised");
            }
            if raised.gas {
                log::warn!("hydrogen concentration alarm raised");
            }
        }
        #[cfg(not(feature = "std"))]
        let _ = raised;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adc::FixedAdc;
    use crate::report::TextReporter;
    use crate::time::FixedTime;
    use heapless::String;

    type TestMonitor =
        Monitor<FixedAdc, TextReporter<String<2048>>, MockDelay, FixedTime>;

    fn monitor(adc: FixedAdc) -> TestMonitor {
        Monitor::new(
            adc,
            TextReporter::new(String::new()),
            MockDelay::new(),
            FixedTime::new(0),
        )
    }

    #[test]
    fn starts_in_warmup() {
        let m = monitor(FixedAdc::new(0, 0, 0));
        assert_eq!(m.state(), MonitorState::WarmUp);
    }

    #[test]
    fn warmup_sleeps_exactly_the_configured_duration() {
        let mut m = monitor(FixedAdc::new(0, 0, 0));
        m.warm_up().unwrap();

        assert_eq!(m.state(), MonitorState::Running);
        assert_eq!(m.delay().total_ms(), 30_000);
        assert_eq!(m.delay().sleeps().len(), 30);
    }

    #[test]
    fn warmup_duration_is_independent_of_tick_size() {
        // 7000 ms warm-up with a 3000 ms tick: 3000 + 3000 + 1000
        let mut m = monitor(FixedAdc::new(0, 0, 0)).with_config(MonitorConfig {
            warmup_ms: 7_000,
            warmup_tick_ms: 3_000,
            cycle_ms: 2_000,
        });
        m.warm_up().unwrap();

        assert_eq!(m.delay().sleeps(), &[3_000, 3_000, 1_000]);
        assert_eq!(m.delay().total_ms(), 7_000);
    }

    #[test]
    fn zero_tick_does_not_spin() {
        let mut m = monitor(FixedAdc::new(0, 0, 0)).with_config(MonitorConfig {
            warmup_ms: 5_000,
            warmup_tick_ms: 0,
            cycle_ms: 2_000,
        });
        m.warm_up().unwrap();
        assert_eq!(m.delay().sleeps(), &[5_000]);
    }

    #[test]
    fn cycle_period_is_constant() {
        let mut m = monitor(FixedAdc::new(900, 100, 50)).with_config(MonitorConfig {
            warmup_ms: 0,
            warmup_tick_ms: 1_000,
            cycle_ms: 2_000,
        });
        m.run_cycles(3).unwrap();

        // No warm-up sleeps, three inter-cycle sleeps of 2000 ms each
        assert_eq!(m.delay().sleeps(), &[2_000, 2_000, 2_000]);
    }

    #[test]
    fn cycle_converts_and_evaluates() {
        // Full-scale samples: 25 V (below limit), 0 kPa, 100 % (alarms)
        let mut m = monitor(FixedAdc::new(1023, 0, 1023));
        m.init().unwrap();

        let frame = m.run_cycle().unwrap();
        assert!((frame.voltage_v - 25.0).abs() < 1e-3);
        assert_eq!(frame.pressure_kpa, 0.0);
        assert!((frame.gas_pct - 100.0).abs() < 1e-3);

        assert!(!frame.alarms.voltage);
        assert!(!frame.alarms.pressure);
        assert!(frame.alarms.gas);
    }

    #[test]
    fn frames_are_timestamped_from_the_clock() {
        let mut m = Monitor::new(
            FixedAdc::new(0, 0, 0),
            TextReporter::new(String::<2048>::new()),
            MockDelay::new(),
            FixedTime::new(12_345),
        );
        let frame = m.run_cycle().unwrap();
        assert_eq!(frame.timestamp, 12_345);
    }

    #[test]
    fn countdown_is_reported_each_tick() {
        let mut m = monitor(FixedAdc::new(0, 0, 0)).with_config(MonitorConfig {
            warmup_ms: 3_000,
            warmup_tick_ms: 1_000,
            cycle_ms: 2_000,
        });
        m.warm_up().unwrap();

        let out = m.reporter().sink().as_str();
        assert!(out.contains("Warming up sensors... 3 s"));
        assert!(out.contains("Warming up sensors... 2 s"));
        assert!(out.contains("Warming up sensors... 1 s"));
    }
}
