//! Pixel colors, wire channel ordering and indicator colors.
//!
//! Pixels are `palette::Srgb<u8>` (24-bit, 8 bits per channel). How those
//! three bytes are shifted onto an LED string is a property of the driver and
//! the physical LEDs, described by [`ChannelOrder`].

use palette::{FromColor, Hsv, Srgb};

/// 24-bit tri-channel color of a single matrix LED.
pub type PixelColor = Srgb<u8>;

/// All channels off.
pub const OFF: PixelColor = Srgb::new(0, 0, 0);
/// Full red.
pub const RED: PixelColor = Srgb::new(255, 0, 0);
/// Full green.
pub const GREEN: PixelColor = Srgb::new(0, 255, 0);
/// Full blue.
pub const BLUE: PixelColor = Srgb::new(0, 0, 255);

/// Creates a pixel color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> PixelColor {
    let hsv: Hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}

/// Order in which a pixel's channels are shifted onto the wire.
///
/// The first named channel is sent first and lands in bits 23..16 of the
/// encoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelOrder {
    /// Red, green, blue.
    Rgb,
    /// Red, blue, green.
    Rbg,
    /// Green, red, blue (WS2812 native).
    #[default]
    Grb,
    /// Green, blue, red.
    Gbr,
    /// Blue, red, green.
    Brg,
    /// Blue, green, red.
    Bgr,
}

impl ChannelOrder {
    /// Packs a color into a 24-bit word, first wire channel most significant.
    pub fn encode(self, color: PixelColor) -> u32 {
        let (r, g, b) = (
            u32::from(color.red),
            u32::from(color.green),
            u32::from(color.blue),
        );
        let (first, second, third) = match self {
            ChannelOrder::Rgb => (r, g, b),
            ChannelOrder::Rbg => (r, b, g),
            ChannelOrder::Grb => (g, r, b),
            ChannelOrder::Gbr => (g, b, r),
            ChannelOrder::Brg => (b, r, g),
            ChannelOrder::Bgr => (b, g, r),
        };
        (first << 16) | (second << 8) | third
    }

    /// Unpacks a word produced by [`encode`](Self::encode). Bits above 23 are ignored.
    pub fn decode(self, word: u32) -> PixelColor {
        let [_, first, second, third] = word.to_be_bytes();
        let (r, g, b) = match self {
            ChannelOrder::Rgb => (first, second, third),
            ChannelOrder::Rbg => (first, third, second),
            ChannelOrder::Grb => (second, first, third),
            ChannelOrder::Gbr => (third, first, second),
            ChannelOrder::Brg => (second, third, first),
            ChannelOrder::Bgr => (third, second, first),
        };
        Srgb::new(r, g, b)
    }
}

/// On/off state of a three-channel indicator LED (no PWM).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorColor {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl IndicatorColor {
    pub const OFF: Self = Self::new(false, false, false);
    pub const RED: Self = Self::new(true, false, false);
    pub const GREEN: Self = Self::new(false, true, false);
    pub const BLUE: Self = Self::new(false, false, true);

    pub const fn new(red: bool, green: bool, blue: bool) -> Self {
        Self { red, green, blue }
    }
}
