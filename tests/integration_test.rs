// Integration tests for the countdown lifecycle and settings loading

use chrono::{Duration, FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;

use kolixx_tour::models::countdown::{CountdownStatus, TimeBreakdown};
use kolixx_tour::services::countdown::{compute_breakdown, labeled_units, CountdownService};
use kolixx_tour::services::settings::{default_target, Settings};

#[test]
fn test_countdown_lifecycle() {
    let target = default_target();
    let mut service = CountdownService::new(target);

    // A week out: counting, and the first refresh reports a value.
    let week_before = target.with_timezone(&Utc) - Duration::days(7);
    let status = service.refresh(week_before).expect("initial value");
    match status {
        CountdownStatus::Counting(b) => {
            assert_eq!(b.days, 7);
            assert_eq!((b.hours, b.minutes, b.seconds), (0, 0, 0));
        }
        CountdownStatus::Expired => panic!("should still be counting"),
    }

    // Within the same second nothing changes, so nothing is reported.
    assert_eq!(service.refresh(week_before + Duration::milliseconds(300)), None);

    // Crossing the target reports Expired exactly once, then the ticking
    // caller has nothing further to observe.
    let after = target.with_timezone(&Utc) + Duration::seconds(1);
    assert_eq!(service.refresh(after), Some(CountdownStatus::Expired));
    assert_eq!(service.refresh(after + Duration::seconds(5)), None);
    assert!(service.is_expired());
}

#[test]
fn test_one_day_before_sale_start() {
    let target = default_target();
    let now = target.with_timezone(&Utc) - Duration::days(1);
    let status = compute_breakdown(target, now);
    assert_eq!(
        status,
        CountdownStatus::Counting(TimeBreakdown { days: 1, hours: 0, minutes: 0, seconds: 0 })
    );
    if let CountdownStatus::Counting(b) = status {
        assert_eq!(labeled_units(&b)[0].label, "день");
    }
}

#[test]
fn test_last_second_before_sale_start() {
    let target = default_target();
    let now = target.with_timezone(&Utc) - Duration::seconds(1);
    let status = compute_breakdown(target, now);
    assert_eq!(
        status,
        CountdownStatus::Counting(TimeBreakdown { days: 0, hours: 0, minutes: 0, seconds: 1 })
    );
    if let CountdownStatus::Counting(b) = status {
        assert_eq!(labeled_units(&b)[3].label, "секунда");
    }
}

#[test]
fn test_exact_sale_start_is_expired() {
    let target = default_target();
    assert_eq!(
        compute_breakdown(target, target.with_timezone(&Utc)),
        CountdownStatus::Expired
    );
}

#[test]
fn test_settings_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tour.toml");

    std::fs::write(
        &path,
        "target = \"2026-02-01T20:00:00+03:00\"\nticket_url = \"https://example.com/tickets\"\n",
    )
    .expect("write settings");

    let settings = Settings::load_from_path(&path).expect("parse settings");
    let expected = FixedOffset::east_opt(3 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 2, 1, 20, 0, 0)
        .unwrap();
    assert_eq!(settings.target, expected);
    assert_eq!(settings.ticket_url.as_deref(), Some("https://example.com/tickets"));
}

#[test]
fn test_settings_file_partial_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tour.toml");
    std::fs::write(&path, "ticket_url = \"https://example.com\"\n").expect("write settings");

    let settings = Settings::load_from_path(&path).expect("parse settings");
    assert_eq!(settings.target, default_target());
}

#[test]
fn test_settings_file_rejects_garbage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tour.toml");
    std::fs::write(&path, "target = \"next tuesday\"\n").expect("write settings");

    assert!(Settings::load_from_path(&path).is_err());
}
