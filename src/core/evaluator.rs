//! Day evaluator: classifies one day's raw entry and computes worked hours,
//! deviation from the daily quota, and the holiday flag.

use crate::errors::{AppError, AppResult};
use crate::models::{DayNote, DayRecord};
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Hours a normal non-weekend, non-holiday day is expected to contribute.
pub const DAILY_QUOTA: i64 = 4;

fn interval_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*-\s*(\d+)$").unwrap())
}

/// Evaluate one day's shorthand entry.
///
/// Branch order matters and must stay as-is: a weekend with a blank-like
/// token (including 'x') resolves to "Weekend (non-working)" before the
/// holiday marker is ever considered, so a weekend 'x' never sets the
/// holiday flag. Downstream reports depend on that precedence.
pub fn evaluate(raw: &str, date: NaiveDate) -> AppResult<DayRecord> {
    let entry = raw.trim().to_lowercase();

    if is_weekend(&date) && matches!(entry.as_str(), "" | "0" | "-" | "x") {
        return Ok(record(raw, 0, 0, false, DayNote::Weekend));
    }

    if entry == "x" {
        return Ok(record(raw, 0, 0, true, DayNote::LegalHoliday));
    }

    // The quota of a missing weekday is still owed: the aggregator counts
    // its required hours with nothing worked against them.
    if entry == "-" {
        return Ok(record(raw, 0, 0, false, DayNote::MissingWorkday));
    }

    if entry.is_empty() || entry == "0" {
        return Ok(record(raw, 0, 0, false, DayNote::DayOff));
    }

    let caps = interval_re()
        .captures(&entry)
        .ok_or_else(|| AppError::InvalidEntry(entry.clone()))?;

    let start: i64 = caps[1]
        .parse()
        .map_err(|_| AppError::InvalidEntry(entry.clone()))?;
    let end: i64 = caps[2]
        .parse()
        .map_err(|_| AppError::InvalidEntry(entry.clone()))?;

    let total = end - start;

    // Soft invalid: stored as a normal zero-hour record so the user can
    // spot and correct it later.
    if total <= 0 {
        return Ok(record(raw, 0, 0, false, DayNote::InvalidInterval));
    }

    let note = if is_weekend(&date) {
        DayNote::WorkedWeekend
    } else {
        DayNote::WorkingDay
    };

    Ok(record(raw, total, total - DAILY_QUOTA, false, note))
}

fn record(raw: &str, worked: i64, deviation: i64, holiday: bool, note: DayNote) -> DayRecord {
    DayRecord {
        raw: raw.to_string(),
        worked,
        deviation,
        holiday,
        note,
    }
}
