//! Validate command implementation.

use std::path::PathBuf;

use super::OutputFormat;
use crate::app::commands::validate;
use crate::domain::AppError;

pub fn run_validate(config_file: Option<PathBuf>, format: OutputFormat) -> Result<i32, AppError> {
    let errors = validate::execute(&super::context()?, config_file.as_ref())?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&errors)?),
        OutputFormat::Text if errors.is_empty() => println!("✅ Configuration is valid"),
        OutputFormat::Text => {
            println!("❌ {} validation error(s):", errors.len());
            for error in &errors {
                println!("  • {}: {}", error.field, error.message);
            }
        }
    }

    Ok(if errors.is_empty() { 0 } else { 1 })
}
