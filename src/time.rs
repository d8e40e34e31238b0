//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq + PartialOrd {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
///
/// Instants must round-trip through raw ticks so they can be handed from an
/// interrupt handler to the poll loop through a single atomic word.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant (zero if `earlier` is later).
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Raw tick count of the underlying monotonic clock.
    fn as_ticks(&self) -> u64;

    /// Rebuilds an instant from a raw tick count.
    fn from_ticks(ticks: u64) -> Self;
}
