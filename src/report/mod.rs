pub(crate) mod json_csv;
pub(crate) mod model;
pub(crate) mod xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper shared by the renderers for completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} report written: {}", path.display()));
}

#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "xlsx",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }

    /// File extension; same spelling as the format name.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Used to resolve the configured default format.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xlsx" => Some(ReportFormat::Xlsx),
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}
