use crate::config::Config;
use crate::core::aggregator;
use crate::errors::AppResult;
use crate::report::{self, ReportFormat};
use crate::store::Store;
use crate::utils::date::month_name;
use crate::utils::fs::ensure_writable;
use std::fs;
use std::path::PathBuf;

pub struct ExportLogic;

impl ExportLogic {
    /// Build the report for `year`/`month` and write it to disk.
    ///
    /// A month with no records still produces a file with headers and
    /// zero-total sections. Returns the path written.
    pub fn export(
        store: &Store,
        cfg: &Config,
        format: &ReportFormat,
        file: &Option<String>,
        year: i32,
        month: u32,
        force: bool,
    ) -> AppResult<PathBuf> {
        let records = store.load()?;
        let month_report = aggregator::aggregate(&records, year, month);

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(&cfg.export_dir).join(format!(
                "report_{}_{}.{}",
                month_name(month).to_lowercase(),
                year,
                format.extension()
            )),
        };

        ensure_writable(&path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        match format {
            ReportFormat::Xlsx => report::xlsx::write_xlsx(&month_report, &path)?,
            ReportFormat::Csv => report::json_csv::write_csv(&month_report, &path)?,
            ReportFormat::Json => report::json_csv::write_json(&month_report, &path)?,
        }

        Ok(path)
    }
}
