#![cfg_attr(not(feature = "std"), no_std)]

//! Debounced two-button digit counter for a 5×5 addressable RGB LED matrix.
//!
//! # Core Concepts
//!
//! - **`ButtonChannel`**: Per-button state shared with the GPIO interrupt; the interrupt only records press edges
//! - **`Debouncer`**: Advances channels from the poll loop and reports confirmed presses
//! - **`Digit`**: The displayed value, A counts up and B counts down, both wrapping within 0-9
//! - **`PatternTable`** / **`PhysicalMap`**: Digit bitmaps and the wiring order of the LED string
//! - **`Renderer`**: Turns a digit into a `Frame` and pushes it to an `LedString` in its `ChannelOrder`
//! - **`BlinkController`**: Toggles an `IndicatorLed` at a fixed period
//! - **`ControlLoop`**: Ties it together on a fixed poll cadence
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! Hardware stays behind traits (`ButtonInput`, `LedString`, `IndicatorLed`,
//! `TimeSource`), so the whole pipeline runs on the host under test.

pub use palette::Srgb;

pub mod blink;
pub mod button;
pub mod color;
pub mod config;
pub mod control;
pub mod debounce;
pub mod digit;
pub mod pattern;
pub mod render;
pub mod time;

pub use blink::{BlinkController, BlinkState, IndicatorLed};
pub use button::{ButtonChannel, ButtonId, ButtonInput, ButtonState};
pub use color::{ChannelOrder, IndicatorColor, PixelColor};
pub use config::{Config, ConfigError};
pub use control::{Button, ControlLoop, DigitChange};
pub use debounce::{ConfirmedPress, Debouncer};
pub use digit::{Digit, DigitError};
pub use pattern::{DigitPattern, LED_COUNT, MapError, PatternTable, PhysicalMap};
pub use render::{Frame, LedString, Renderer};
pub use time::{TimeDuration, TimeInstant, TimeSource};
