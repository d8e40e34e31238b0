//! Board adapters for the digit-matrix traits.

use core::cell::RefCell;

use critical_section::Mutex;
use digit_matrix::{
    ButtonInput, ChannelOrder, IndicatorColor, IndicatorLed, LED_COUNT, LedString,
};
use embedded_hal::digital::{InputPin, OutputPin};
use smart_leds::{RGB8, SmartLedsWrite};

/// Active-low button whose pin is shared with the GPIO interrupt
///
/// The interrupt handler owns the pin inside the mutex so it can clear its
/// interrupt flags; the poll loop borrows it briefly to read the level.
pub struct SharedButton<P: 'static> {
    pin: &'static Mutex<RefCell<Option<P>>>,
}

impl<P: 'static> SharedButton<P> {
    pub fn new(pin: &'static Mutex<RefCell<Option<P>>>) -> Self {
        Self { pin }
    }
}

impl<P: InputPin + 'static> ButtonInput for SharedButton<P> {
    fn is_pressed(&mut self) -> bool {
        critical_section::with(|cs| {
            self.pin
                .borrow_ref_mut(cs)
                .as_mut()
                .is_some_and(|pin| pin.is_low().unwrap_or(false))
        })
    }
}

/// Three-pin indicator LED, one digital output per channel
///
/// Pins are driven high for an active channel (common cathode).
pub struct GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) {
    let _ = if on { pin.set_high() } else { pin.set_low() };
}

impl<R, G, B> IndicatorLed for GpioIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn set(&mut self, color: IndicatorColor) {
        drive(&mut self.red, color.red);
        drive(&mut self.green, color.green);
        drive(&mut self.blue, color.blue);
    }
}

/// LED string backed by a `smart-leds` writer such as `ws2812_pio::Ws2812`
///
/// WS2812 writers re-pack every `RGB8` as G, R, B on the wire. Words are
/// unpacked as GRB here so the bytes go out exactly as the renderer packed
/// them, whatever channel order it was configured with.
pub struct SmartLedString<W> {
    writer: W,
}

impl<W> SmartLedString<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W> LedString for SmartLedString<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn write_frame(&mut self, words: &[u32; LED_COUNT]) {
        let pixels = words.iter().map(|&word| {
            let color = ChannelOrder::Grb.decode(word);
            RGB8::new(color.red, color.green, color.blue)
        });
        let _ = self.writer.write(pixels);
    }
}
