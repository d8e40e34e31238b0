//! Debounce state machine, advanced from the poll loop.
//!
//! ```text
//! Released --(edge)--> Debouncing --(window elapsed, still pressed)--> Pressed
//!    ^                     |                                              |
//!    +--(window elapsed, released: bounce)                                |
//!    +------------------------------------------------(pin released)------+
//! ```
//!
//! A confirmed press is reported once per press-and-hold; holding never
//! repeats it.

use crate::button::{ButtonChannel, ButtonId, ButtonInput, ButtonState};
use crate::time::{TimeDuration, TimeInstant};

/// Default debounce window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// A button press that survived the debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfirmedPress {
    pub button: ButtonId,
}

/// Advances [`ButtonChannel`]s past the edge the interrupt recorded.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer<D: TimeDuration> {
    interval: D,
}

impl<D: TimeDuration> Debouncer<D> {
    pub fn new(interval: D) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> D {
        self.interval
    }

    /// Advances one channel given the pin's current level.
    ///
    /// Returns the confirmed press, if this poll confirmed one.
    pub fn poll<I>(&self, channel: &ButtonChannel, pressed: bool, now: I) -> Option<ConfirmedPress>
    where
        I: TimeInstant<Duration = D>,
    {
        match channel.state() {
            ButtonState::Debouncing => {
                let started: I = channel.last_edge();
                if now.duration_since(started) < self.interval {
                    return None;
                }

                if pressed {
                    channel.set_state(ButtonState::Pressed);
                    #[cfg(feature = "defmt")]
                    defmt::debug!("button {} confirmed", channel.id());
                    Some(ConfirmedPress {
                        button: channel.id(),
                    })
                } else {
                    channel.set_state(ButtonState::Released);
                    #[cfg(feature = "defmt")]
                    defmt::debug!("button {} bounce rejected", channel.id());
                    None
                }
            }
            ButtonState::Pressed if !pressed => {
                channel.set_state(ButtonState::Released);
                None
            }
            ButtonState::Pressed | ButtonState::Released => None,
        }
    }

    /// Reads the pin through `input` and advances the channel.
    pub fn poll_input<I, B>(
        &self,
        channel: &ButtonChannel,
        input: &mut B,
        now: I,
    ) -> Option<ConfirmedPress>
    where
        I: TimeInstant<Duration = D>,
        B: ButtonInput,
    {
        let pressed = input.is_pressed();
        self.poll(channel, pressed, now)
    }
}

impl<D: TimeDuration> Default for Debouncer<D> {
    fn default() -> Self {
        Self::new(D::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}
