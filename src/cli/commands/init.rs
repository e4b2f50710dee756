use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty JSON store
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.store.clone(), cli.test)?;

    println!("⚙️  Initializing workcal…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Store      : {}", cfg.store);

    success("workcal initialization completed");
    Ok(())
}
