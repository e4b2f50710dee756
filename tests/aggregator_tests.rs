use chrono::NaiveDate;
use workcal::core::aggregator::{WeekStatus, aggregate};
use workcal::core::evaluator::evaluate;
use workcal::store::Records;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seed(entries: &[(NaiveDate, &str)]) -> Records {
    let mut records = Records::new();
    for (date, entry) in entries {
        records.insert(*date, evaluate(entry, *date).unwrap());
    }
    records
}

// August 2025: the 4th is a Monday and ISO week 32 runs Aug 4-10.

#[test]
fn month_rolls_up_into_weeks_and_totals() {
    let records = seed(&[
        (day(2025, 8, 4), "9-17"), // worked 8, required 4
        (day(2025, 8, 5), "x"),    // holiday: required 0
        (day(2025, 8, 6), "-"),    // missing: required 4, worked 0
        (day(2025, 8, 9), "9-17"), // Saturday: worked 8, required 0
        (day(2025, 8, 10), ""),    // Sunday off
        (day(2025, 8, 11), "8-17"), // week 33: worked 9, required 4
    ]);

    let report = aggregate(&records, 2025, 8);

    assert_eq!(report.rows.len(), 6);
    assert_eq!(report.weekly.len(), 2);

    let w32 = &report.weekly[0];
    assert_eq!(w32.week, 32);
    assert_eq!(w32.worked, 16);
    assert_eq!(w32.required, 8);
    assert_eq!(w32.deviation, 8);
    assert_eq!(w32.status, WeekStatus::Ok);

    let w33 = &report.weekly[1];
    assert_eq!(w33.week, 33);
    assert_eq!(w33.worked, 9);
    assert_eq!(w33.required, 4);

    assert_eq!(report.monthly.worked, 25);
    assert_eq!(report.monthly.required, 12);
    assert_eq!(report.monthly.overtime, 13);
}

#[test]
fn stored_and_report_deviations_differ_on_worked_weekends() {
    let date = day(2025, 8, 9); // Saturday
    let records = seed(&[(date, "9-17")]);

    // stored field nets against the flat quota
    assert_eq!(records[&date].deviation, 4);

    // report row nets against required hours, which are 0 on a weekend
    let report = aggregate(&records, 2025, 8);
    assert_eq!(report.rows[0].deviation, 8);
}

#[test]
fn missing_weekday_leaves_the_week_incomplete() {
    let records = seed(&[(day(2025, 8, 6), "-")]);

    let report = aggregate(&records, 2025, 8);

    let week = &report.weekly[0];
    assert_eq!(week.worked, 0);
    assert_eq!(week.required, 4);
    assert_eq!(week.deviation, -4);
    assert_eq!(week.status, WeekStatus::Incomplete);

    // a shortfall never shows up as negative overtime
    assert_eq!(report.monthly.overtime, 0);
}

#[test]
fn holiday_owes_no_required_hours() {
    let records = seed(&[(day(2025, 8, 5), "x")]);

    let report = aggregate(&records, 2025, 8);

    assert_eq!(report.weekly[0].required, 0);
    assert_eq!(report.weekly[0].status, WeekStatus::Ok);
    assert_eq!(report.rows[0].deviation, 0);
}

#[test]
fn only_in_month_days_are_counted() {
    // Jul 31 and Aug 1 share ISO week 31; only the August day may count
    let records = seed(&[
        (day(2025, 7, 31), "9-17"),
        (day(2025, 8, 1), "9-13"),
    ]);

    let report = aggregate(&records, 2025, 8);

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].date, day(2025, 8, 1));

    let week = &report.weekly[0];
    assert_eq!(week.week, 31);
    assert_eq!(week.worked, 4);
    assert_eq!(week.required, 4);

    assert_eq!(report.monthly.worked, 4);
}

#[test]
fn empty_month_produces_zero_totals() {
    let records = Records::new();
    let report = aggregate(&records, 2025, 2);

    assert!(report.rows.is_empty());
    assert!(report.weekly.is_empty());
    assert_eq!(report.monthly.worked, 0);
    assert_eq!(report.monthly.required, 0);
    assert_eq!(report.monthly.overtime, 0);
}

#[test]
fn aggregation_is_idempotent() {
    let records = seed(&[
        (day(2025, 8, 4), "9-17"),
        (day(2025, 8, 6), "-"),
        (day(2025, 8, 9), "10-14"),
    ]);

    let first = serde_json::to_string(&aggregate(&records, 2025, 8)).unwrap();
    let second = serde_json::to_string(&aggregate(&records, 2025, 8)).unwrap();
    assert_eq!(first, second);
}
