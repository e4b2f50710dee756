use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::utils::date::{month_name, weekday_short};
use crate::utils::table::Table;
use chrono::Datelike;

/// Print the saved records of one month as a fixed-width table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let (year, m) = resolve_month(month)?;

        let store = Store::new(&cfg.store);
        let records = store.load()?;

        let mut headers = vec!["Date"];
        if cfg.show_weekday {
            headers.push("Day");
        }
        headers.extend(["Input", "Worked", "Deviation", "Holiday", "Note"]);

        let mut table = Table::new(headers);

        for (date, rec) in &records {
            if date.year() != year || date.month() != m {
                continue;
            }

            let mut row = vec![date.format("%Y-%m-%d").to_string()];
            if cfg.show_weekday {
                row.push(weekday_short(date).to_string());
            }
            let holiday = if rec.holiday { "yes" } else { "" };
            row.extend([
                rec.raw.clone(),
                rec.worked.to_string(),
                rec.deviation.to_string(),
                holiday.to_string(),
                rec.note.label().to_string(),
            ]);

            table.add_row(row);
        }

        if table.is_empty() {
            println!("No records for {} {}", month_name(m), year);
        } else {
            print!("{}", table.render());
        }
    }

    Ok(())
}
