use crate::cli::commands::resolve_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::{AppError, AppResult};
use crate::report::ReportFormat;
use crate::store::Store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        month,
        format,
        file,
        force,
    } = cmd
    {
        let (year, m) = resolve_month(month)?;

        let format = match format {
            Some(f) => f.clone(),
            None => ReportFormat::from_name(&cfg.default_format)
                .ok_or_else(|| AppError::InvalidExportFormat(cfg.default_format.clone()))?,
        };

        let store = Store::new(&cfg.store);
        ExportLogic::export(&store, cfg, &format, file, year, m, *force)?;
    }

    Ok(())
}
