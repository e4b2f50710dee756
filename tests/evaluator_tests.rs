use chrono::NaiveDate;
use workcal::core::evaluator::{DAILY_QUOTA, evaluate};
use workcal::errors::AppError;
use workcal::models::DayNote;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// 2025-08-04 is a Monday, 2025-08-09 a Saturday, 2025-08-10 a Sunday.

#[test]
fn weekday_blank_and_zero_are_day_off() {
    for entry in ["", "0", "  "] {
        let rec = evaluate(entry, day(2025, 8, 4)).unwrap();
        assert_eq!(rec.worked, 0);
        assert_eq!(rec.deviation, 0);
        assert!(!rec.holiday);
        assert_eq!(rec.note, DayNote::DayOff);
    }
}

#[test]
fn weekend_blank_like_tokens_are_weekend() {
    for entry in ["", "0", "-", "x"] {
        let rec = evaluate(entry, day(2025, 8, 10)).unwrap();
        assert_eq!(rec.worked, 0);
        assert_eq!(rec.deviation, 0);
        assert!(!rec.holiday);
        assert_eq!(rec.note, DayNote::Weekend);
    }
}

#[test]
fn weekend_x_never_sets_the_holiday_flag() {
    // the weekend branch matches 'x' first; the holiday marker is
    // silently discarded on weekends
    let rec = evaluate("x", day(2025, 8, 9)).unwrap();
    assert_eq!(rec.note, DayNote::Weekend);
    assert!(!rec.holiday);
}

#[test]
fn weekday_x_is_a_legal_holiday() {
    let rec = evaluate("x", day(2025, 8, 5)).unwrap();
    assert_eq!(rec.worked, 0);
    assert_eq!(rec.deviation, 0);
    assert!(rec.holiday);
    assert_eq!(rec.note, DayNote::LegalHoliday);
}

#[test]
fn weekday_dash_is_a_missing_workday() {
    let rec = evaluate("-", day(2025, 8, 6)).unwrap();
    assert_eq!(rec.worked, 0);
    // the record itself reports no deviation; the owed quota surfaces in
    // the aggregation as required hours with nothing worked against them
    assert_eq!(rec.deviation, 0);
    assert!(!rec.holiday);
    assert_eq!(rec.note, DayNote::MissingWorkday);
}

#[test]
fn interval_computes_worked_and_deviation() {
    let rec = evaluate("9-17", day(2025, 8, 4)).unwrap();
    assert_eq!(rec.worked, 8);
    assert_eq!(rec.deviation, 8 - DAILY_QUOTA);
    assert!(!rec.holiday);
    assert_eq!(rec.note, DayNote::WorkingDay);

    let short = evaluate("9-12", day(2025, 8, 4)).unwrap();
    assert_eq!(short.worked, 3);
    assert_eq!(short.deviation, -1);
}

#[test]
fn interval_on_weekend_notes_weekend_work() {
    let rec = evaluate("9-17", day(2025, 8, 9)).unwrap();
    assert_eq!(rec.worked, 8);
    assert_eq!(rec.deviation, 4);
    assert!(!rec.holiday);
    assert_eq!(rec.note, DayNote::WorkedWeekend);
}

#[test]
fn reversed_or_empty_interval_is_a_soft_invalid_record() {
    for entry in ["17-9", "9-9"] {
        let rec = evaluate(entry, day(2025, 8, 4)).unwrap();
        assert_eq!(rec.worked, 0);
        assert_eq!(rec.deviation, 0);
        assert_eq!(rec.note, DayNote::InvalidInterval);
    }
}

#[test]
fn entry_is_normalized_for_interpretation_but_stored_verbatim() {
    let rec = evaluate("  X ", day(2025, 8, 5)).unwrap();
    assert_eq!(rec.note, DayNote::LegalHoliday);
    assert_eq!(rec.raw, "  X ");

    let spaced = evaluate("9 - 17", day(2025, 8, 4)).unwrap();
    assert_eq!(spaced.worked, 8);
    assert_eq!(spaced.raw, "9 - 17");
}

#[test]
fn malformed_entries_are_rejected() {
    for entry in ["abc", "9-", "-17", "9:17", "nine-five", "9-17-20", "1.5-8"] {
        let err = evaluate(entry, day(2025, 8, 4)).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidEntry(_)),
            "expected InvalidEntry for {entry:?}, got {err:?}"
        );
    }
}
