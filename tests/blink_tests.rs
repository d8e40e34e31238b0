//! Integration tests for BlinkController

mod common;
use common::*;

use digit_matrix::{BlinkController, IndicatorColor};

type Blink = BlinkController<TestInstant, MockIndicator>;

fn blink(period: u64) -> Blink {
    BlinkController::new(
        MockIndicator::new(),
        IndicatorColor::RED,
        TestDuration(period),
        TestInstant(0),
    )
}

#[test]
fn new_controller_starts_active_and_off() {
    let blink = blink(100);
    let state = blink.state();

    assert!(state.active);
    assert!(!state.phase);
    assert_eq!(state.last_toggle, TestInstant(0));
    assert_eq!(blink.led().current(), IndicatorColor::OFF);
    assert_eq!(blink.led().writes(), 1);
}

#[test]
fn toggles_when_period_elapses() {
    let mut blink = blink(100);

    assert_eq!(blink.service(TestInstant(99)), None);
    assert_eq!(blink.service(TestInstant(100)), Some(true));
    assert_eq!(blink.led().current(), IndicatorColor::RED);

    assert_eq!(blink.service(TestInstant(150)), None);
    assert_eq!(blink.service(TestInstant(200)), Some(false));
    assert_eq!(blink.led().current(), IndicatorColor::OFF);
}

#[test]
fn toggle_interval_is_within_one_poll_tick() {
    for poll in [10u64, 30, 70] {
        let mut blink = blink(100);
        let mut last = 0;
        let mut toggles = 0;

        let mut t = 0;
        while t < 20_000 {
            if blink.service(TestInstant(t)).is_some() {
                let interval = t - last;
                assert!(
                    (100..100 + poll).contains(&interval),
                    "poll {} interval {}",
                    poll,
                    interval
                );
                last = t;
                toggles += 1;
            }
            t += poll;
        }

        assert!(toggles > 20_000 / (100 + poll));
    }
}

#[test]
fn phase_alternates_indefinitely() {
    let mut blink = blink(100);
    let mut expected = true;

    for step in 1..=1_000u64 {
        assert_eq!(blink.service(TestInstant(step * 100)), Some(expected));
        expected = !expected;
    }
}

#[test]
fn inactive_controller_never_toggles() {
    let mut blink = blink(100);
    blink.set_active(false, TestInstant(0));

    for t in (0..5_000).step_by(10) {
        assert_eq!(blink.service(TestInstant(t)), None);
    }
    assert_eq!(blink.led().current(), IndicatorColor::OFF);
    assert!(!blink.is_active());
}

#[test]
fn suspending_turns_indicator_off_and_resume_restarts_period() {
    let mut blink = blink(100);
    assert_eq!(blink.service(TestInstant(100)), Some(true));

    blink.set_active(false, TestInstant(130));
    assert_eq!(blink.led().current(), IndicatorColor::OFF);

    blink.set_active(true, TestInstant(500));
    assert_eq!(blink.service(TestInstant(599)), None);
    assert_eq!(blink.service(TestInstant(600)), Some(true));
}

#[test]
fn setting_same_activity_is_a_no_op() {
    let mut blink = blink(100);
    blink.service(TestInstant(100));
    let writes = blink.led().writes();

    blink.set_active(true, TestInstant(120));

    assert_eq!(blink.led().writes(), writes);
    assert!(blink.state().phase);
}
