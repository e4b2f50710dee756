use crate::core::aggregator::MonthReport;
use crate::errors::{AppError, AppResult};
use crate::report::model::report_to_table;
use crate::report::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// JSON report: the structured aggregate, pretty-printed.
pub(crate) fn write_json(report: &MonthReport, path: &Path) -> AppResult<()> {
    info(format!("Writing JSON report: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::from(io::Error::other(format!("JSON serialization error: {e}"))))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV report: the same table the spreadsheet shows, sections included.
/// Rows have differing arities (separators, section titles), hence the
/// flexible writer.
pub(crate) fn write_csv(report: &MonthReport, path: &Path) -> AppResult<()> {
    info(format!("Writing CSV report: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::from(io::Error::other(format!("CSV open error: {e}"))))?;

    for row in report_to_table(report) {
        wtr.write_record(&row)
            .map_err(|e| AppError::from(io::Error::other(format!("CSV write error: {e}"))))?;
    }

    wtr.flush()
        .map_err(|e| AppError::from(io::Error::other(format!("CSV flush error: {e}"))))?;

    notify_export_success("CSV", path);
    Ok(())
}
