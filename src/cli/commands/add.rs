use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;

/// Save (or overwrite) the entry for one day, then echo the stored record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, entry } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let store = Store::new(&cfg.store);
        let record = AddLogic::apply(&store, d, entry)?;

        success(format!("Saved entry for {}", d));
        println!("\n{}", record.describe(&d));
    }

    Ok(())
}
