//! The countdown calculation itself: a pure function of target and clock.

use chrono::{DateTime, FixedOffset, Utc};

use crate::models::countdown::{CountdownStatus, TimeBreakdown};

/// Evaluate the countdown at a given clock reading.
///
/// Returns `Expired` as soon as `now` reaches the target; otherwise the
/// positive millisecond difference decomposed into days/hours/minutes/
/// seconds. No partial breakdown is ever produced for a passed target.
pub fn compute_breakdown(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> CountdownStatus {
    let diff_ms = target.signed_duration_since(now).num_milliseconds();
    if diff_ms <= 0 {
        return CountdownStatus::Expired;
    }
    CountdownStatus::Counting(TimeBreakdown::from_millis(diff_ms as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn msk() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn sale_start() -> DateTime<FixedOffset> {
        msk().with_ymd_and_hms(2026, 1, 20, 12, 0, 0).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        msk()
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn one_day_before_target() {
        let status = compute_breakdown(sale_start(), at(2026, 1, 19, 12, 0, 0));
        assert_eq!(
            status,
            CountdownStatus::Counting(TimeBreakdown {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            })
        );
    }

    #[test]
    fn one_second_before_target() {
        let status = compute_breakdown(sale_start(), at(2026, 1, 20, 11, 59, 59));
        assert_eq!(
            status,
            CountdownStatus::Counting(TimeBreakdown {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            })
        );
    }

    #[test]
    fn exact_target_is_expired() {
        let status = compute_breakdown(sale_start(), at(2026, 1, 20, 12, 0, 0));
        assert_eq!(status, CountdownStatus::Expired);
    }

    #[test]
    fn after_target_is_expired() {
        let status = compute_breakdown(sale_start(), at(2026, 3, 1, 0, 0, 0));
        assert_eq!(status, CountdownStatus::Expired);
    }

    #[test]
    fn offsets_are_respected() {
        // Noon Moscow time is 09:00 UTC, so 09:00 UTC exactly is expired
        // while 08:59:59 UTC is still counting.
        let counting = compute_breakdown(
            sale_start(),
            Utc.with_ymd_and_hms(2026, 1, 20, 8, 59, 59).unwrap(),
        );
        assert!(matches!(counting, CountdownStatus::Counting(_)));

        let expired = compute_breakdown(
            sale_start(),
            Utc.with_ymd_and_hms(2026, 1, 20, 9, 0, 0).unwrap(),
        );
        assert_eq!(expired, CountdownStatus::Expired);
    }
}
