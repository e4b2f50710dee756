//! Flattening of a MonthReport into rows of cells, shared by the XLSX and
//! CSV renderers.

use crate::core::aggregator::{DailyRow, MonthReport, MonthlySummary, WeeklyAggregate};

pub(crate) const WEEKLY_TITLE: &str = "WEEKLY REPORT";
pub(crate) const MONTHLY_TITLE: &str = "MONTHLY SUMMARY";

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Input",
        "Worked Hours",
        "Quota (4h)",
        "Deviation",
        "Holiday",
        "Notes",
    ]
}

pub(crate) fn daily_cells(row: &DailyRow) -> Vec<String> {
    let holiday = if row.holiday { "YES" } else { "" };

    vec![
        row.date.format("%Y-%m-%d").to_string(),
        row.raw.clone(),
        row.worked.to_string(),
        row.quota.to_string(),
        row.deviation.to_string(),
        holiday.to_string(),
        row.note.label().to_string(),
    ]
}

pub(crate) fn weekly_cells(week: &WeeklyAggregate) -> Vec<String> {
    vec![
        format!("Week {}", week.week),
        String::new(),
        week.worked.to_string(),
        week.required.to_string(),
        week.deviation.to_string(),
        String::new(),
        week.status.as_str().to_string(),
    ]
}

pub(crate) fn summary_cells(summary: &MonthlySummary) -> Vec<Vec<String>> {
    vec![
        vec![
            "Total worked hours".to_string(),
            String::new(),
            summary.worked.to_string(),
        ],
        vec![
            "Total required hours".to_string(),
            String::new(),
            summary.required.to_string(),
        ],
        vec![
            "Monthly overtime".to_string(),
            String::new(),
            summary.overtime.to_string(),
        ],
    ]
}

/// The whole report as one table: header, daily rows, then the weekly and
/// monthly sections separated by blank rows. Used verbatim by the CSV
/// renderer; the XLSX renderer walks the sections itself to style them.
pub(crate) fn report_to_table(report: &MonthReport) -> Vec<Vec<String>> {
    let mut table = Vec::new();

    table.push(get_headers().into_iter().map(String::from).collect());

    for row in &report.rows {
        table.push(daily_cells(row));
    }

    table.push(vec![String::new()]);
    table.push(vec![WEEKLY_TITLE.to_string()]);
    for week in &report.weekly {
        table.push(weekly_cells(week));
    }

    table.push(vec![String::new()]);
    table.push(vec![MONTHLY_TITLE.to_string()]);
    for row in summary_cells(&report.monthly) {
        table.push(row);
    }

    table
}
