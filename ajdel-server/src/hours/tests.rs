use super::*;
use chrono::TimeZone;

/// Build a UTC instant from Riyadh wall-clock components.
///
/// 2025-01-02 is a Thursday, 2025-01-03 a Friday, 2025-01-05 a Sunday.
fn riyadh(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    FixedOffset::east_opt(UTC_OFFSET_SECS)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, min, s)
        .unwrap()
        .with_timezone(&Utc)
}

fn default_hours() -> BusinessHours {
    BusinessHours::default()
}

#[test]
fn test_regular_day_midday_is_open() {
    let status = default_hours().status_at(riyadh(2025, 1, 2, 12, 0, 0));
    assert!(status.is_open);
    assert_eq!(status.seconds_remaining, 12 * 3600);
    assert_eq!(status.countdown, "12:00:00");
    assert_eq!(status.message.en, "We Close After");
    assert_eq!(status.message.ar, "نغلق بعد");
}

#[test]
fn test_regular_day_one_second_before_opening() {
    // 10:59:59 on a regular day
    let status = default_hours().status_at(riyadh(2025, 1, 2, 10, 59, 59));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 1);
    assert_eq!(status.countdown, "0:00:01");
    assert_eq!(status.message.en, "We Open At");
    assert_eq!(status.message.ar, "نفتح بعد");
}

#[test]
fn test_regular_day_opening_instant() {
    // 11:00:00 sharp: open, 13 hours to midnight
    let status = default_hours().status_at(riyadh(2025, 1, 2, 11, 0, 0));
    assert!(status.is_open);
    assert_eq!(status.seconds_remaining, 46_800);
    assert_eq!(status.countdown, "13:00:00");
}

#[test]
fn test_friday_closed_until_special_open() {
    let hours = default_hours();

    // One second before the 16:00 Friday opening
    let status = hours.status_at(riyadh(2025, 1, 3, 15, 59, 59));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 1);
    assert_eq!(status.message.en, "We Open At");

    // Friday morning counts down to 16:00, not 11:00
    let status = hours.status_at(riyadh(2025, 1, 3, 10, 0, 0));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 6 * 3600);
    assert_eq!(status.countdown, "6:00:00");
}

#[test]
fn test_friday_evening_is_open() {
    let status = default_hours().status_at(riyadh(2025, 1, 3, 20, 0, 0));
    assert!(status.is_open);
    assert_eq!(status.seconds_remaining, 4 * 3600);
}

#[test]
fn test_last_second_before_midnight_still_open() {
    let status = default_hours().status_at(riyadh(2025, 1, 2, 23, 59, 59));
    assert!(status.is_open);
    assert_eq!(status.seconds_remaining, 1);
    assert_eq!(status.countdown, "0:00:01");
}

#[test]
fn test_midnight_rollover_uses_the_new_days_window() {
    let hours = default_hours();

    // Sunday 00:00:00 - closed until the regular 11:00 opening
    let status = hours.status_at(riyadh(2025, 1, 5, 0, 0, 0));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 11 * 3600);
    assert_eq!(status.countdown, "11:00:00");

    // Friday 00:00:00 - the day-class switch must land on Friday's own
    // window, so the countdown targets 16:00
    let status = hours.status_at(riyadh(2025, 1, 3, 0, 0, 0));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 16 * 3600);
}

#[test]
fn test_after_close_looks_ahead_to_tomorrows_window() {
    // Early close exposes the after-closing branch. Thursday 23:00 with a
    // 22:00 close must count one hour to midnight plus sixteen hours to
    // Friday's special opening, not to the regular 11:00.
    let hours = BusinessHours::new(
        DayWindow { open: 11, close: 22 },
        DayWindow { open: 16, close: 22 },
    )
    .unwrap();

    let status = hours.status_at(riyadh(2025, 1, 2, 23, 0, 0));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 3600 + 16 * 3600);
    assert_eq!(status.countdown, "17:00:00");
    assert_eq!(status.message.en, "We Open At");

    // Saturday 23:00 targets Sunday's regular 11:00
    let status = hours.status_at(riyadh(2025, 1, 4, 23, 0, 0));
    assert!(!status.is_open);
    assert_eq!(status.seconds_remaining, 3600 + 11 * 3600);
}

#[test]
fn test_countdown_formatting() {
    assert_eq!(format_countdown(3661), "1:01:01");
    assert_eq!(format_countdown(59), "0:00:59");
    assert_eq!(format_countdown(0), "0:00:00");
    assert_eq!(format_countdown(90_000), "25:00:00");
}

#[test]
fn test_countdown_decreases_by_one_per_tick() {
    let hours = default_hours();
    let start = riyadh(2025, 1, 2, 11, 0, 0);
    let initial = hours.status_at(start).seconds_remaining;
    for i in 1..=5i64 {
        let status = hours.status_at(start + chrono::Duration::seconds(i));
        assert_eq!(status.seconds_remaining, initial - i as u32);
    }
}

#[test]
fn test_state_flip_jumps_to_the_new_window_span() {
    let hours = default_hours();

    // Friday 15:59:59 -> one second left closed
    let before = hours.status_at(riyadh(2025, 1, 3, 15, 59, 59));
    assert!(!before.is_open);
    assert_eq!(before.seconds_remaining, 1);

    // One tick later the state flips and the countdown jumps to the full
    // 16:00-24:00 span
    let after = hours.status_at(riyadh(2025, 1, 3, 16, 0, 0));
    assert!(after.is_open);
    assert_eq!(after.seconds_remaining, 8 * 3600);
}

#[test]
fn test_invalid_windows_are_rejected() {
    let ok = DayWindow { open: 11, close: 24 };
    assert!(BusinessHours::new(DayWindow { open: 12, close: 12 }, ok).is_err());
    assert!(BusinessHours::new(DayWindow { open: 18, close: 11 }, ok).is_err());
    assert!(BusinessHours::new(ok, DayWindow { open: 16, close: 25 }).is_err());

    // Full-day window is legal
    assert!(BusinessHours::new(DayWindow { open: 0, close: 24 }, ok).is_ok());
}

#[test]
fn test_default_schedule() {
    let hours = BusinessHours::default();
    assert_eq!(hours.regular, DayWindow { open: 11, close: 24 });
    assert_eq!(hours.friday, DayWindow { open: 16, close: 24 });
    assert_eq!(hours.window_for(5), &hours.friday);
    assert_eq!(hours.window_for(2), &hours.regular);
}

#[test]
fn test_total_over_a_full_week() {
    // Walk a whole week in 17-second steps; the evaluation must stay
    // within sane bounds at every instant.
    let hours = BusinessHours::new(
        DayWindow { open: 9, close: 21 },
        DayWindow { open: 16, close: 21 },
    )
    .unwrap();

    let mut t = riyadh(2025, 1, 5, 0, 0, 0);
    let end = t + chrono::Duration::days(7);
    while t < end {
        let status = hours.status_at(t);
        assert!(status.seconds_remaining >= 1);
        assert!(status.seconds_remaining <= 2 * SECONDS_PER_DAY);
        assert_eq!(status.countdown, format_countdown(status.seconds_remaining));
        t += chrono::Duration::seconds(17);
    }
}
