//! The polling control loop.
//!
//! Provides [`ControlLoop`], which owns the digit, the renderer, the LED
//! string and the blink controller, and advances both button channels on a
//! fixed cadence. It is the only place outside the GPIO interrupt that
//! mutates shared state.

use core::fmt::Write;

use heapless::Vec;

use crate::blink::{BlinkController, IndicatorLed};
use crate::button::{ButtonChannel, ButtonId, ButtonInput};
use crate::config::{Config, ConfigError};
use crate::debounce::{ConfirmedPress, Debouncer};
use crate::digit::Digit;
use crate::render::{Frame, LedString, Renderer};
use crate::time::{TimeInstant, TimeSource};

/// A button channel paired with the pin it reads.
pub struct Button<'a, P: ButtonInput> {
    pub channel: &'a ButtonChannel,
    pub input: P,
}

impl<'a, P: ButtonInput> Button<'a, P> {
    pub fn new(channel: &'a ButtonChannel, input: P) -> Self {
        Self { channel, input }
    }
}

/// The digit after a confirmed press, and which button caused it.
///
/// Displays as the diagnostic line, e.g. `A: 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitChange {
    pub button: ButtonId,
    pub digit: Digit,
}

impl core::fmt::Display for DigitChange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.button, self.digit)
    }
}

/// Drives the matrix and indicator from two debounced buttons.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source and button channels
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `S` - LED string driver type
/// * `L` - Indicator LED type
/// * `A` - Input type of the increment button
/// * `B` - Input type of the decrement button
pub struct ControlLoop<'t, I, T, S, L, A, B>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedString,
    L: IndicatorLed,
    A: ButtonInput,
    B: ButtonInput,
{
    time_source: &'t T,
    button_a: Button<'t, A>,
    button_b: Button<'t, B>,
    debouncer: Debouncer<I::Duration>,
    renderer: Renderer,
    string: S,
    blink: BlinkController<I, L>,
    digit: Digit,
    poll_interval: I::Duration,
}

impl<'t, I, T, S, L, A, B> ControlLoop<'t, I, T, S, L, A, B>
where
    I: TimeInstant,
    T: TimeSource<I>,
    S: LedString,
    L: IndicatorLed,
    A: ButtonInput,
    B: ButtonInput,
{
    /// Creates a loop showing digit 0. Nothing is sent to the LED string
    /// until [`start`](Self::start).
    pub fn new(
        config: Config<I::Duration>,
        time_source: &'t T,
        button_a: Button<'t, A>,
        button_b: Button<'t, B>,
        string: S,
        indicator: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let renderer = Renderer::new(
            config.patterns,
            config.physical_map,
            config.foreground,
            config.channel_order,
        );
        let blink = BlinkController::new(
            indicator,
            config.indicator_color,
            config.blink_period,
            time_source.now(),
        );

        Ok(Self {
            time_source,
            button_a,
            button_b,
            debouncer: Debouncer::new(config.debounce_interval),
            renderer,
            string,
            blink,
            digit: Digit::ZERO,
            poll_interval: config.poll_interval,
        })
    }

    /// Shows the current digit. Call once before the first tick.
    pub fn start(&mut self) -> Frame {
        self.renderer.show(self.digit, &mut self.string)
    }

    /// Runs one loop iteration: both buttons, then the blink timer.
    ///
    /// Every confirmed press updates the digit and redraws the matrix before
    /// this returns. Changes are listed A before B.
    pub fn tick(&mut self) -> Vec<DigitChange, 2> {
        let now = self.time_source.now();
        let mut changes = Vec::new();

        let press_a = self
            .debouncer
            .poll_input(self.button_a.channel, &mut self.button_a.input, now);
        if let Some(press) = press_a {
            let _ = changes.push(self.apply(press));
        }

        let press_b = self
            .debouncer
            .poll_input(self.button_b.channel, &mut self.button_b.input, now);
        if let Some(press) = press_b {
            let _ = changes.push(self.apply(press));
        }

        self.blink.service(now);

        changes
    }

    /// Runs forever: tick, print one line per change, sleep.
    ///
    /// `sleep` blocks for the given duration; `console` receives the
    /// diagnostic lines. Console errors are ignored.
    pub fn run<F, W>(&mut self, mut sleep: F, console: &mut W) -> !
    where
        F: FnMut(I::Duration),
        W: Write,
    {
        loop {
            for change in self.tick() {
                let _ = writeln!(console, "{}", change);
            }
            sleep(self.poll_interval);
        }
    }

    /// Suspends or resumes the indicator blink.
    pub fn set_blink_active(&mut self, active: bool) {
        let now = self.time_source.now();
        self.blink.set_active(active, now);
    }

    pub fn digit(&self) -> Digit {
        self.digit
    }

    pub fn poll_interval(&self) -> I::Duration {
        self.poll_interval
    }

    pub fn blink(&self) -> &BlinkController<I, L> {
        &self.blink
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn led_string(&self) -> &S {
        &self.string
    }

    fn apply(&mut self, press: ConfirmedPress) -> DigitChange {
        self.digit = self.digit.apply(press.button);
        self.renderer.show(self.digit, &mut self.string);

        DigitChange {
            button: press.button,
            digit: self.digit,
        }
    }
}
