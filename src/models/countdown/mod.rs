//! Core types for the ticket-sale countdown.
//!
//! A `TimeBreakdown` is the four-unit decomposition of the remaining
//! duration; `CountdownStatus` distinguishes a live countdown from the
//! terminal sales-open state.

use serde::Serialize;

/// Milliseconds per day.
pub const MS_PER_DAY: u64 = 86_400_000;
/// Milliseconds per hour.
pub const MS_PER_HOUR: u64 = 3_600_000;
/// Milliseconds per minute.
pub const MS_PER_MINUTE: u64 = 60_000;
/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1_000;

/// Remaining time decomposed into days/hours/minutes/seconds.
///
/// Invariant: `total_millis() <= source duration < total_millis() + 1000`,
/// i.e. the breakdown floors the sub-second remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeBreakdown {
    /// Decompose a positive millisecond duration by successive integer
    /// division. Hours/minutes/seconds stay below their carry bound;
    /// days are unbounded.
    pub fn from_millis(millis: u64) -> Self {
        Self {
            days: millis / MS_PER_DAY,
            hours: (millis % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (millis % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (millis % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Reconstruct the floored duration this breakdown represents.
    pub fn total_millis(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

/// One displayed unit: a count plus its localized label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeUnit {
    pub value: u64,
    pub label: &'static str,
}

/// Result of evaluating the countdown against a clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// Sales have not opened yet; remaining time attached.
    Counting(TimeBreakdown),
    /// The target instant has passed; sales are open.
    Expired,
}

impl CountdownStatus {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}
