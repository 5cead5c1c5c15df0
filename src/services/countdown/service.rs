//! Tick-driven countdown state for the display layer.
//!
//! The calculation itself is pure; this service adds the two things the
//! page needs on top of it: the one-way `Counting -> Expired` transition
//! and change detection between ticks so the caller only redraws when a
//! displayed value actually moved.

use chrono::{DateTime, FixedOffset, Utc};
use std::time::Duration;

use super::breakdown::compute_breakdown;
use crate::models::countdown::{CountdownStatus, TimeBreakdown};

/// Re-evaluation period. Ticks are not phase-aligned to wall-clock
/// second boundaries; the expiry transition is observed within one
/// period of the true instant.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct CountdownService {
    target: DateTime<FixedOffset>,
    /// Latched once expiry is observed. Time only advances for a fixed
    /// target, so the transition is irreversible for the process
    /// lifetime even if the supplied clock jumps backwards.
    expired: bool,
    last_breakdown: Option<TimeBreakdown>,
}

impl CountdownService {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self {
            target,
            expired: false,
            last_breakdown: None,
        }
    }

    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Evaluate the countdown at `now`, latching the terminal state.
    pub fn status(&mut self, now: DateTime<Utc>) -> CountdownStatus {
        if self.expired {
            return CountdownStatus::Expired;
        }
        let status = compute_breakdown(self.target, now);
        if status.is_expired() {
            log::info!("Countdown reached target {}", self.target);
            self.expired = true;
        }
        status
    }

    /// Evaluate at `now` and report only when the displayed value changed
    /// since the previous refresh. The expiry transition is reported
    /// exactly once; afterwards there is nothing left to tick for.
    pub fn refresh(&mut self, now: DateTime<Utc>) -> Option<CountdownStatus> {
        let was_expired = self.expired;
        match self.status(now) {
            CountdownStatus::Expired => (!was_expired).then_some(CountdownStatus::Expired),
            CountdownStatus::Counting(breakdown) => {
                if self.last_breakdown == Some(breakdown) {
                    return None;
                }
                self.last_breakdown = Some(breakdown);
                Some(CountdownStatus::Counting(breakdown))
            }
        }
    }
}
