use clap::Subcommand;

use crate::app::commands::config;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the stored configuration as TOML
    Show,
    /// Assign one field, e.g. `set httpPort 8080`
    Set {
        /// Field name (camelCase, case-insensitive)
        field: String,
        value: String,
    },
    /// Delete the stored configuration
    Reset,
}

pub fn run_config(command: ConfigCommands) -> Result<(), AppError> {
    let ctx = super::context()?;

    match command {
        ConfigCommands::Show => {
            print!("{}", toml::to_string_pretty(&config::show(&ctx)?)?);
        }
        ConfigCommands::Set { field, value } => {
            config::set(&ctx, &field, &value)?;
            println!("✅ Set {} = {}", field, value);
        }
        ConfigCommands::Reset => {
            config::reset(&ctx)?;
            println!("✅ Configuration reset to defaults");
        }
    }
    Ok(())
}
