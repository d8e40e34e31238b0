//! Digit-to-frame rendering.
//!
//! Provides [`Renderer`], which turns a [`Digit`] into a [`Frame`] of physical
//! LED colors, and the [`LedString`] trait the LED string driver implements.

use crate::color::{ChannelOrder, OFF, PixelColor};
use crate::digit::Digit;
use crate::pattern::{LED_COUNT, PatternTable, PhysicalMap};

/// Trait for abstracting the addressable LED string driver.
///
/// Implement this for your driver (PIO, SPI, bit-banged, etc.). Words are
/// already packed in the driver's channel order, first channel in bits
/// 23..16, in physical string order. The call is expected to block until
/// the whole frame is shifted out and cannot fail.
pub trait LedString {
    /// Shifts out one complete frame.
    fn write_frame(&mut self, words: &[u32; LED_COUNT]);
}

/// One full display update, indexed by physical LED position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame([PixelColor; LED_COUNT]);

impl Frame {
    /// A frame with every LED off.
    pub const fn blank() -> Self {
        Self([OFF; LED_COUNT])
    }

    /// Pixels in physical order.
    pub fn pixels(&self) -> &[PixelColor; LED_COUNT] {
        &self.0
    }

    /// Number of LEDs that are not fully off.
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&pixel| pixel != OFF).count()
    }

    /// Packs every pixel for a driver using `order`.
    pub fn encode(&self, order: ChannelOrder) -> [u32; LED_COUNT] {
        self.0.map(|pixel| order.encode(pixel))
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::blank()
    }
}

/// Renders digits onto the matrix through a pattern table and physical map.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    patterns: PatternTable,
    map: PhysicalMap,
    foreground: PixelColor,
    order: ChannelOrder,
}

impl Renderer {
    pub fn new(
        patterns: PatternTable,
        map: PhysicalMap,
        foreground: PixelColor,
        order: ChannelOrder,
    ) -> Self {
        Self {
            patterns,
            map,
            foreground,
            order,
        }
    }

    /// Lays out `digit` in physical LED order.
    ///
    /// Every logical cell is scattered to its physical position, lit cells
    /// get the foreground color and the rest are off.
    pub fn render(&self, digit: Digit) -> Frame {
        let pattern = self.patterns.pattern(digit.value());
        let mut frame = Frame::blank();
        for (logical, &lit) in pattern.cells().iter().enumerate() {
            if lit {
                frame.0[self.map.physical(logical)] = self.foreground;
            }
        }
        frame
    }

    /// Renders `digit` and pushes it to the driver as one frame.
    pub fn show<S: LedString>(&self, digit: Digit, string: &mut S) -> Frame {
        let frame = self.render(digit);
        string.write_frame(&frame.encode(self.order));
        #[cfg(feature = "defmt")]
        defmt::debug!("frame pushed for digit {}", digit);
        frame
    }

    pub fn foreground(&self) -> PixelColor {
        self.foreground
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub fn physical_map(&self) -> &PhysicalMap {
        &self.map
    }
}
