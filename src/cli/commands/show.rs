use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::utils::date;

/// Print the stored record for a day, or "No record" when absent.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = match date {
            Some(s) => {
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?
            }
            None => date::today(),
        };

        let store = Store::new(&cfg.store);

        match store.get(&d)? {
            Some(record) => println!("{}", record.describe(&d)),
            None => println!("No record for {}", d),
        }
    }

    Ok(())
}
