//! Shared test infrastructure for digit-matrix integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;

use digit_matrix::{
    ButtonChannel, ButtonInput, ControlLoop, DigitChange, IndicatorColor, IndicatorLed,
    LED_COUNT, LedString, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing (milliseconds since boot)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }

    fn as_ticks(&self) -> u64 {
        self.0
    }

    fn from_ticks(ticks: u64) -> Self {
        TestInstant(ticks)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Button Pin
// ============================================================================

/// Button pin whose level the test sets directly
pub struct MockPin {
    pressed: Cell<bool>,
}

impl MockPin {
    pub fn new() -> Self {
        Self {
            pressed: Cell::new(false),
        }
    }

    pub fn set(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

impl ButtonInput for &MockPin {
    fn is_pressed(&mut self) -> bool {
        self.pressed.get()
    }
}

/// Changes the pin level and fires the edge interrupt, like the GPIO IRQ would
pub fn edge(pin: &MockPin, channel: &ButtonChannel, pressed: bool, timer: &MockTimeSource) {
    pin.set(pressed);
    channel.capture_edge(pressed, timer.now());
}

// ============================================================================
// Mock LED String
// ============================================================================

/// Mock LED string that records every frame written
pub struct MockLedString {
    frames: heapless::Vec<[u32; LED_COUNT], 128>,
}

impl MockLedString {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
        }
    }

    pub fn frames(&self) -> &[[u32; LED_COUNT]] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[u32; LED_COUNT]> {
        self.frames.last()
    }
}

impl LedString for MockLedString {
    fn write_frame(&mut self, words: &[u32; LED_COUNT]) {
        let _ = self.frames.push(*words);
    }
}

// ============================================================================
// Mock Indicator
// ============================================================================

/// Mock indicator that counts writes and remembers the last color
pub struct MockIndicator {
    current: IndicatorColor,
    writes: usize,
}

impl MockIndicator {
    pub fn new() -> Self {
        Self {
            current: IndicatorColor::OFF,
            writes: 0,
        }
    }

    pub fn current(&self) -> IndicatorColor {
        self.current
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl IndicatorLed for MockIndicator {
    fn set(&mut self, color: IndicatorColor) {
        self.current = color;
        self.writes += 1;
    }
}

// ============================================================================
// Control Loop Helpers
// ============================================================================

pub type TestLoop<'a> = ControlLoop<
    'a,
    TestInstant,
    MockTimeSource,
    MockLedString,
    MockIndicator,
    &'a MockPin,
    &'a MockPin,
>;

/// Ticks every 10 ms for `millis` milliseconds and collects the digit changes
pub fn run_for(control: &mut TestLoop<'_>, timer: &MockTimeSource, millis: u64) -> Vec<DigitChange> {
    let mut changes = Vec::new();
    for _ in 0..millis / 10 {
        changes.extend(control.tick());
        timer.advance(10);
    }
    changes
}
