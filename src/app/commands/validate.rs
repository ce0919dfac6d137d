use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::generate::resolve_config;
use crate::domain::{AppError, ValidationError, validate};
use crate::ports::{ConfigStore, Translator};

/// Execute the validate command.
pub fn execute<S, T>(
    ctx: &AppContext<S, T>,
    config_file: Option<&PathBuf>,
) -> Result<Vec<ValidationError>, AppError>
where
    S: ConfigStore,
    T: Translator,
{
    let config = resolve_config(ctx, config_file)?;
    Ok(validate(&config))
}
