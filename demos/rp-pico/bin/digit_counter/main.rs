#![no_std]
#![no_main]

use core::cell::RefCell;
use core::fmt;

use cortex_m::delay::Delay;
use critical_section::Mutex;
use embedded_hal::digital::InputPin;
use defmt::{info, unwrap};
use defmt_rtt as _;
use panic_probe as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::{
        FunctionPio0, FunctionSioInput, Interrupt::EdgeHigh, Interrupt::EdgeLow, Pin, PinId,
        PullUp,
        bank0::{Gpio5, Gpio6},
    },
    pac::{self, interrupt},
    pio::PIOExt,
    watchdog::Watchdog,
};
use ws2812_pio::Ws2812;

use rp_pico_digit_counter::hardware::{GpioIndicator, SharedButton, SmartLedString};
use rp_pico_digit_counter::time::{Duration, HardwareTimer, Instant};

use digit_matrix::color::hsv;
use digit_matrix::{Button, ButtonChannel, ButtonId, Config, ControlLoop, TimeDuration, TimeSource};

type ButtonAPin = Pin<Gpio5, FunctionSioInput, PullUp>;
type ButtonBPin = Pin<Gpio6, FunctionSioInput, PullUp>;

static BUTTON_A: ButtonChannel = ButtonChannel::new(ButtonId::A);
static BUTTON_B: ButtonChannel = ButtonChannel::new(ButtonId::B);

static BUTTON_A_PIN: Mutex<RefCell<Option<ButtonAPin>>> = Mutex::new(RefCell::new(None));
static BUTTON_B_PIN: Mutex<RefCell<Option<ButtonBPin>>> = Mutex::new(RefCell::new(None));
static IRQ_TIMER: Mutex<RefCell<Option<HardwareTimer>>> = Mutex::new(RefCell::new(None));

/// Console sink for the `A: n` / `B: n` lines, sent over the defmt channel
struct DefmtConsole;

impl fmt::Write for DefmtConsole {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        defmt::print!("{=str}", s);
        Ok(())
    }
}

/// Clears the pin's edge flags and hands the edge to its channel
fn capture<I: PinId>(pin: &mut Pin<I, FunctionSioInput, PullUp>, channel: &ButtonChannel, now: Instant) {
    let fired = pin.interrupt_status(EdgeLow) || pin.interrupt_status(EdgeHigh);
    if !fired {
        return;
    }
    pin.clear_interrupt(EdgeLow);
    pin.clear_interrupt(EdgeHigh);

    let pressed = pin.is_low().unwrap_or(false);
    channel.capture_edge(pressed, now);
}

#[interrupt]
fn IO_IRQ_BANK0() {
    critical_section::with(|cs| {
        let Some(timer) = *IRQ_TIMER.borrow_ref(cs) else {
            return;
        };
        let now = timer.now();

        if let Some(pin) = BUTTON_A_PIN.borrow_ref_mut(cs).as_mut() {
            capture(pin, &BUTTON_A, now);
        }
        if let Some(pin) = BUTTON_B_PIN.borrow_ref_mut(cs).as_mut() {
            capture(pin, &BUTTON_B, now);
        }
    });
}

#[entry]
fn main() -> ! {
    info!("=== RP Pico Digit Counter ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    // 5x5 WS2812 matrix on GPIO7, driven by PIO0 state machine 0
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws = Ws2812::new(
        pins.gpio7.into_function::<FunctionPio0>(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
        timer.count_down(),
    );

    // Indicator LED on GPIO13 (R), GPIO11 (G), GPIO12 (B)
    let indicator = GpioIndicator::new(
        pins.gpio13.into_push_pull_output(),
        pins.gpio11.into_push_pull_output(),
        pins.gpio12.into_push_pull_output(),
    );

    // Buttons on GPIO5 (A) and GPIO6 (B), active low, both edges
    let button_a = pins.gpio5.into_pull_up_input();
    let button_b = pins.gpio6.into_pull_up_input();
    for edge in [EdgeLow, EdgeHigh] {
        button_a.set_interrupt_enabled(edge, true);
        button_b.set_interrupt_enabled(edge, true);
    }

    critical_section::with(|cs| {
        BUTTON_A_PIN.borrow_ref_mut(cs).replace(button_a);
        BUTTON_B_PIN.borrow_ref_mut(cs).replace(button_b);
        IRQ_TIMER.borrow_ref_mut(cs).replace(time_source);
    });

    // SAFETY: the handler only touches state initialized above.
    unsafe {
        pac::NVIC::unmask(pac::Interrupt::IO_IRQ_BANK0);
    }

    info!("Matrix on GPIO7, buttons on GPIO5 (A) and GPIO6 (B)");

    // Quarter-brightness green
    let config = Config::<Duration>::default().with_foreground(hsv(120.0, 1.0, 0.25));

    let mut control = unwrap!(ControlLoop::new(
        config,
        &time_source,
        Button::new(&BUTTON_A, SharedButton::new(&BUTTON_A_PIN)),
        Button::new(&BUTTON_B, SharedButton::new(&BUTTON_B_PIN)),
        SmartLedString::new(ws),
        indicator,
    ));

    control.start();
    info!("=== Ready ===");

    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());
    control.run(
        |interval: Duration| delay.delay_ms(interval.as_millis() as u32),
        &mut DefmtConsole,
    )
}
