//! Fixed-period blinking of the three-channel indicator LED.

use crate::color::IndicatorColor;
use crate::time::{TimeDuration, TimeInstant};

/// Default blink half-period in milliseconds.
pub const DEFAULT_BLINK_MS: u64 = 100;

/// Trait for abstracting the indicator LED hardware.
///
/// One binary output per channel. Handle any hardware errors internally -
/// this method cannot fail.
pub trait IndicatorLed {
    /// Drives each channel on or off.
    fn set(&mut self, color: IndicatorColor);
}

/// Snapshot of the blink timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkState<I> {
    pub active: bool,
    /// `true` while the indicator is lit.
    pub phase: bool,
    pub last_toggle: I,
}

/// Toggles an indicator every `period`, independent of everything else.
pub struct BlinkController<I: TimeInstant, L: IndicatorLed> {
    led: L,
    color: IndicatorColor,
    period: I::Duration,
    state: BlinkState<I>,
}

impl<I: TimeInstant, L: IndicatorLed> BlinkController<I, L> {
    /// Creates an active controller with the indicator off, timed from `now`.
    pub fn new(mut led: L, color: IndicatorColor, period: I::Duration, now: I) -> Self {
        led.set(IndicatorColor::OFF);

        Self {
            led,
            color,
            period,
            state: BlinkState {
                active: true,
                phase: false,
                last_toggle: now,
            },
        }
    }

    /// Toggles the indicator if a full period has elapsed.
    ///
    /// Returns the new phase when a toggle happened.
    pub fn service(&mut self, now: I) -> Option<bool> {
        if !self.state.active {
            return None;
        }

        if now.duration_since(self.state.last_toggle) < self.period {
            return None;
        }

        self.state.phase = !self.state.phase;
        self.state.last_toggle = now;
        self.drive();

        #[cfg(feature = "defmt")]
        defmt::trace!("indicator phase {}", self.state.phase);

        Some(self.state.phase)
    }

    /// Suspends or resumes blinking.
    ///
    /// Suspending turns the indicator off. Resuming starts a fresh period
    /// from `now` in the off phase.
    pub fn set_active(&mut self, active: bool, now: I) {
        if active == self.state.active {
            return;
        }

        self.state.active = active;
        self.state.phase = false;
        self.state.last_toggle = now;
        self.drive();
    }

    pub fn state(&self) -> BlinkState<I> {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn period(&self) -> I::Duration {
        self.period
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    fn drive(&mut self) {
        let color = if self.state.phase {
            self.color
        } else {
            IndicatorColor::OFF
        };
        self.led.set(color);
    }
}

impl<I: TimeInstant, L: IndicatorLed> core::fmt::Debug for BlinkController<I, L>
where
    I: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BlinkController")
            .field("color", &self.color)
            .field("period_ms", &self.period.as_millis())
            .field("state", &self.state)
            .finish()
    }
}
