//! Integration tests for edge capture and the debounce state machine

mod common;
use common::*;

use digit_matrix::{ButtonChannel, ButtonId, ButtonState, ConfirmedPress, Debouncer};

fn debouncer() -> Debouncer<TestDuration> {
    Debouncer::new(TestDuration(50))
}

#[test]
fn default_interval_is_fifty_millis() {
    assert_eq!(Debouncer::<TestDuration>::default().interval(), TestDuration(50));
}

#[test]
fn released_channel_stays_released_without_edge() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();

    // Level alone does nothing; only the interrupt starts a window.
    assert_eq!(debouncer.poll(&channel, true, TestInstant(500)), None);
    assert_eq!(channel.state(), ButtonState::Released);
}

#[test]
fn press_is_not_confirmed_before_window_elapses() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();

    channel.capture_edge(true, TestInstant(100));
    assert_eq!(debouncer.poll(&channel, true, TestInstant(149)), None);
    assert_eq!(channel.state(), ButtonState::Debouncing);
}

#[test]
fn press_held_at_exact_boundary_confirms_once() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();

    channel.capture_edge(true, TestInstant(100));
    assert_eq!(
        debouncer.poll(&channel, true, TestInstant(150)),
        Some(ConfirmedPress { button: ButtonId::A })
    );
    assert_eq!(channel.state(), ButtonState::Pressed);

    // Holding does not repeat.
    for t in (160..2000).step_by(10) {
        assert_eq!(debouncer.poll(&channel, true, TestInstant(t)), None);
    }
    assert_eq!(channel.state(), ButtonState::Pressed);
}

#[test]
fn release_inside_window_is_rejected_as_bounce() {
    let channel = ButtonChannel::new(ButtonId::B);
    let debouncer = debouncer();

    channel.capture_edge(true, TestInstant(0));
    channel.capture_edge(false, TestInstant(20));

    assert_eq!(debouncer.poll(&channel, false, TestInstant(30)), None);
    assert_eq!(debouncer.poll(&channel, false, TestInstant(50)), None);
    assert_eq!(channel.state(), ButtonState::Released);
}

#[test]
fn bouncing_then_stable_press_confirms_exactly_once() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();
    let mut confirmed = 0;

    // pressed, released, pressed within the window, then held
    channel.capture_edge(true, TestInstant(0));
    channel.capture_edge(false, TestInstant(8));
    channel.capture_edge(true, TestInstant(15));

    for t in (0..=300).step_by(10) {
        if debouncer.poll(&channel, true, TestInstant(t)).is_some() {
            confirmed += 1;
        }
    }

    assert_eq!(confirmed, 1);
}

#[test]
fn release_after_confirmed_press_rearms_channel() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();

    channel.capture_edge(true, TestInstant(0));
    assert!(debouncer.poll(&channel, true, TestInstant(50)).is_some());

    assert_eq!(debouncer.poll(&channel, false, TestInstant(200)), None);
    assert_eq!(channel.state(), ButtonState::Released);

    channel.capture_edge(true, TestInstant(300));
    assert_eq!(channel.state(), ButtonState::Debouncing);
    assert!(debouncer.poll(&channel, true, TestInstant(360)).is_some());
}

#[test]
fn stuck_button_stays_pressed() {
    let channel = ButtonChannel::new(ButtonId::B);
    let debouncer = debouncer();

    channel.capture_edge(true, TestInstant(0));
    assert!(debouncer.poll(&channel, true, TestInstant(60)).is_some());

    for t in (70..10_000).step_by(10) {
        assert_eq!(debouncer.poll(&channel, true, TestInstant(t)), None);
    }
    assert_eq!(channel.state(), ButtonState::Pressed);
}

#[test]
fn poll_input_reads_level_from_pin() {
    let channel = ButtonChannel::new(ButtonId::A);
    let debouncer = debouncer();
    let timer = MockTimeSource::new();
    let pin = MockPin::new();

    edge(&pin, &channel, true, &timer);
    timer.advance(50);
    assert_eq!(
        debouncer.poll_input(&channel, &mut &pin, TestInstant(50)),
        Some(ConfirmedPress { button: ButtonId::A })
    );

    pin.set(false);
    assert_eq!(debouncer.poll_input(&channel, &mut &pin, TestInstant(60)), None);
    assert_eq!(channel.state(), ButtonState::Released);
}

#[test]
fn channels_are_independent() {
    let a = ButtonChannel::new(ButtonId::A);
    let b = ButtonChannel::new(ButtonId::B);
    let debouncer = debouncer();

    a.capture_edge(true, TestInstant(0));
    b.capture_edge(true, TestInstant(30));

    assert_eq!(
        debouncer.poll(&a, true, TestInstant(50)),
        Some(ConfirmedPress { button: ButtonId::A })
    );
    assert_eq!(debouncer.poll(&b, true, TestInstant(50)), None);
    assert_eq!(
        debouncer.poll(&b, true, TestInstant(80)),
        Some(ConfirmedPress { button: ButtonId::B })
    );
}
