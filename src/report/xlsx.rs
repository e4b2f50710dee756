use crate::core::aggregator::MonthReport;
use crate::errors::{AppError, AppResult};
use crate::report::model::{
    MONTHLY_TITLE, WEEKLY_TITLE, daily_cells, get_headers, summary_cells, weekly_cells,
};
use crate::report::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const BAND1: Color = Color::RGB(0xEAF3FB);
const BAND2: Color = Color::RGB(0xFFFFFF);

/// XLSX report with styling and auto column widths. One sheet per export,
/// named after the target month.
pub(crate) fn write_xlsx(report: &MonthReport, path: &Path) -> AppResult<()> {
    info(format!("Writing XLSX report: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(report.title()).map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();
    let mut next_row: u32 = 1;

    // ---------------------------
    // Daily rows (banded)
    // ---------------------------
    for (i, day) in report.rows.iter().enumerate() {
        let band = if i % 2 == 0 { BAND1 } else { BAND2 };
        write_row(worksheet, next_row, &daily_cells(day), band, &mut col_widths)?;
        next_row += 1;
    }

    // ---------------------------
    // Weekly section
    // ---------------------------
    next_row += 1;
    write_section_title(worksheet, next_row, WEEKLY_TITLE)?;
    next_row += 1;

    for week in &report.weekly {
        write_row(worksheet, next_row, &weekly_cells(week), BAND2, &mut col_widths)?;
        next_row += 1;
    }

    // ---------------------------
    // Monthly section
    // ---------------------------
    next_row += 1;
    write_section_title(worksheet, next_row, MONTHLY_TITLE)?;
    next_row += 1;

    for cells in summary_cells(&report.monthly) {
        write_row(worksheet, next_row, &cells, BAND2, &mut col_widths)?;
        next_row += 1;
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_row(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    cells: &[String],
    bg: Color,
    col_widths: &mut [usize],
) -> AppResult<()> {
    for (col, value) in cells.iter().enumerate() {
        write_cell(worksheet, row, col as u16, value, bg)?;
        col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
    }
    Ok(())
}

/// Write one cell, as a right-aligned number when the text parses as one.
fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    s: &str,
    bg: Color,
) -> AppResult<()> {
    if let Ok(num) = s.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_io_app_error)?;
        return Ok(());
    }

    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_io_app_error)?;

    Ok(())
}

fn write_section_title(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    title: &str,
) -> AppResult<()> {
    let fmt = Format::new().set_bold();
    worksheet
        .write_with_format(row, 0, title, &fmt)
        .map_err(to_io_app_error)?;
    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}
