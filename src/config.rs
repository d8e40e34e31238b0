//! Runtime configuration of the control loop.

use crate::blink::DEFAULT_BLINK_MS;
use crate::color::{ChannelOrder, GREEN, IndicatorColor, PixelColor};
use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::pattern::{PatternTable, PhysicalMap};
use crate::time::TimeDuration;

/// Default control loop cadence in milliseconds.
pub const DEFAULT_POLL_MS: u64 = 10;

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Poll interval is zero.
    ZeroPollInterval,

    /// Blink period is zero.
    ZeroBlinkPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPollInterval => {
                write!(f, "poll interval must be greater than zero")
            }
            ConfigError::ZeroBlinkPeriod => {
                write!(f, "blink period must be greater than zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Everything the control loop needs besides hardware.
///
/// Defaults: 50 ms debounce, 100 ms blink period, 10 ms poll interval, green
/// digits on the shipped row-reversed wiring in GRB order, red indicator.
#[derive(Debug, Clone, Copy)]
pub struct Config<D: TimeDuration> {
    pub debounce_interval: D,
    pub blink_period: D,
    pub poll_interval: D,
    pub patterns: PatternTable,
    pub physical_map: PhysicalMap,
    pub channel_order: ChannelOrder,
    pub foreground: PixelColor,
    pub indicator_color: IndicatorColor,
}

impl<D: TimeDuration> Config<D> {
    pub fn with_debounce_interval(mut self, interval: D) -> Self {
        self.debounce_interval = interval;
        self
    }

    pub fn with_blink_period(mut self, period: D) -> Self {
        self.blink_period = period;
        self
    }

    pub fn with_poll_interval(mut self, interval: D) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_patterns(mut self, patterns: PatternTable) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_physical_map(mut self, map: PhysicalMap) -> Self {
        self.physical_map = map;
        self
    }

    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.channel_order = order;
        self
    }

    pub fn with_foreground(mut self, color: PixelColor) -> Self {
        self.foreground = color;
        self
    }

    pub fn with_indicator_color(mut self, color: IndicatorColor) -> Self {
        self.indicator_color = color;
        self
    }

    /// Checks the timing values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.poll_interval == D::ZERO {
            return Err(ConfigError::ZeroPollInterval);
        }

        if self.blink_period == D::ZERO {
            return Err(ConfigError::ZeroBlinkPeriod);
        }

        Ok(())
    }
}

impl<D: TimeDuration> Default for Config<D> {
    fn default() -> Self {
        Self {
            debounce_interval: D::from_millis(DEFAULT_DEBOUNCE_MS),
            blink_period: D::from_millis(DEFAULT_BLINK_MS),
            poll_interval: D::from_millis(DEFAULT_POLL_MS),
            patterns: PatternTable::standard(),
            physical_map: PhysicalMap::row_reversed(),
            channel_order: ChannelOrder::Grb,
            foreground: GREEN,
            indicator_color: IndicatorColor::RED,
        }
    }
}
