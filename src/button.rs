//! Button channels shared between the GPIO interrupt and the poll loop.
//!
//! A [`ButtonChannel`] is meant to live in a `static`. The interrupt handler
//! calls [`capture_edge`](ButtonChannel::capture_edge), which only ever moves
//! the channel from `Released` to `Debouncing`. Everything past that is done
//! by [`Debouncer::poll`](crate::debounce::Debouncer::poll) from the loop.
//!
//! Each field has one writer at a time: the interrupt writes the timestamp
//! and then publishes `Debouncing` with release ordering, and only while the
//! channel is `Released`; the loop reads the state with acquire ordering
//! before reading the timestamp, and only writes while the channel is
//! `Debouncing` or `Pressed`.

use crate::time::TimeInstant;
use portable_atomic::{AtomicU8, AtomicU64, Ordering};

/// Which of the two buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Increment button.
    A,
    /// Decrement button.
    B,
}

impl core::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ButtonId::A => f.write_str("A"),
            ButtonId::B => f.write_str("B"),
        }
    }
}

/// Debounce state of a button channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ButtonState {
    /// Idle, waiting for a press edge.
    Released = 0,
    /// Confirmed press, waiting for release.
    Pressed = 1,
    /// Press edge seen, waiting out the debounce window.
    Debouncing = 2,
}

impl ButtonState {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => ButtonState::Pressed,
            2 => ButtonState::Debouncing,
            _ => ButtonState::Released,
        }
    }
}

/// Trait for reading a button's current level.
///
/// Implement this for your input pin. Polarity (active-low, active-high) is
/// the implementation's business: return `true` while the button is held.
pub trait ButtonInput {
    /// Returns `true` while the button is physically held.
    fn is_pressed(&mut self) -> bool;
}

/// One physical button's state, shared between interrupt and poll context.
pub struct ButtonChannel {
    id: ButtonId,
    state: AtomicU8,
    last_edge: AtomicU64,
}

impl ButtonChannel {
    /// Creates a released channel. `const` so it can back a `static`.
    pub const fn new(id: ButtonId) -> Self {
        Self {
            id,
            state: AtomicU8::new(ButtonState::Released as u8),
            last_edge: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn state(&self) -> ButtonState {
        ButtonState::from_raw(self.state.load(Ordering::Acquire))
    }

    /// Time of the edge that started the current debounce window.
    pub fn last_edge<I: TimeInstant>(&self) -> I {
        I::from_ticks(self.last_edge.load(Ordering::Acquire))
    }

    /// Records a pin transition. Call from the GPIO interrupt handler.
    ///
    /// Starts a debounce window only when the channel is `Released` and the
    /// pin reads pressed; every other edge is ignored. Does no timing math.
    #[inline]
    pub fn capture_edge<I: TimeInstant>(&self, pressed: bool, now: I) {
        if pressed && self.state() == ButtonState::Released {
            self.last_edge.store(now.as_ticks(), Ordering::Relaxed);
            self.state
                .store(ButtonState::Debouncing as u8, Ordering::Release);
        }
    }

    /// Advances the state. Poll context only.
    pub(crate) fn set_state(&self, state: ButtonState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

impl core::fmt::Debug for ButtonChannel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonChannel")
            .field("id", &self.id)
            .field("state", &self.state())
            .field("last_edge", &self.last_edge.load(Ordering::Relaxed))
            .finish()
    }
}
