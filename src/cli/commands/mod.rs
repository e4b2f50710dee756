pub mod add;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod show;

use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// Resolve an optional "YYYY-MM" argument, defaulting to the current month.
pub(crate) fn resolve_month(month: &Option<String>) -> AppResult<(i32, u32)> {
    use chrono::Datelike;

    match month {
        Some(m) => date::parse_month(m).ok_or_else(|| AppError::InvalidMonth(m.to_string())),
        None => {
            let today = date::today();
            Ok((today.year(), today.month()))
        }
    }
}
