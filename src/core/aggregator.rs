//! Period aggregator: rolls the saved days of one month into daily report
//! rows, ISO-week aggregates and a monthly summary.

use crate::core::evaluator::DAILY_QUOTA;
use crate::models::DayNote;
use crate::store::Records;
use crate::utils::date::{is_weekend, month_name};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub raw: String,
    pub worked: i64,
    pub quota: i64,
    /// Net against the day's required hours (0 on weekends and holidays).
    /// NOT the stored per-day deviation, which always nets against the
    /// flat quota; the two differ on worked weekends.
    pub deviation: i64,
    pub holiday: bool,
    pub note: DayNote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WeekStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
}

impl WeekStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeekStatus::Ok => "OK",
            WeekStatus::Incomplete => "INCOMPLETE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeeklyAggregate {
    /// ISO-8601 week number. Weeks at the month edges may hold fewer than
    /// seven days here, since only in-month days are summed.
    pub week: u32,
    pub worked: i64,
    pub required: i64,
    pub deviation: i64,
    pub status: WeekStatus,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MonthlySummary {
    pub worked: i64,
    pub required: i64,
    /// Positive overtime only; a monthly shortfall is reported as 0 here
    /// and shows up in the weekly statuses instead.
    pub overtime: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<DailyRow>,
    pub weekly: Vec<WeeklyAggregate>,
    pub monthly: MonthlySummary,
}

impl MonthReport {
    pub fn title(&self) -> String {
        format!("Report {} {}", month_name(self.month), self.year)
    }
}

/// Aggregate all records falling in `year`/`month`.
///
/// `Records` is ordered by date, so daily rows come out chronological and
/// weekly totals accumulate in calendar order for free.
pub fn aggregate(records: &Records, year: i32, month: u32) -> MonthReport {
    let mut rows = Vec::new();
    let mut weeks: BTreeMap<u32, (i64, i64)> = BTreeMap::new();
    let mut monthly = MonthlySummary::default();

    for (date, rec) in records {
        if date.year() != year || date.month() != month {
            continue;
        }

        let required = if is_weekend(date) || rec.holiday {
            0
        } else {
            DAILY_QUOTA
        };

        let slot = weeks.entry(date.iso_week().week()).or_default();
        slot.0 += rec.worked;
        slot.1 += required;

        monthly.worked += rec.worked;
        monthly.required += required;

        rows.push(DailyRow {
            date: *date,
            raw: rec.raw.clone(),
            worked: rec.worked,
            quota: DAILY_QUOTA,
            deviation: rec.worked - required,
            holiday: rec.holiday,
            note: rec.note,
        });
    }

    monthly.overtime = (monthly.worked - monthly.required).max(0);

    let weekly = weeks
        .into_iter()
        .map(|(week, (worked, required))| {
            let deviation = worked - required;
            WeeklyAggregate {
                week,
                worked,
                required,
                deviation,
                status: if deviation >= 0 {
                    WeekStatus::Ok
                } else {
                    WeekStatus::Incomplete
                },
            }
        })
        .collect();

    MonthReport {
        year,
        month,
        rows,
        weekly,
        monthly,
    }
}
