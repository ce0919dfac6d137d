use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::app::AppContext;
use crate::app::config::read_config_file;
use crate::domain::manifest::generate_with;
use crate::domain::{AppError, ComposeConfig, Locale, ValidationError, validate};
use crate::ports::{ConfigStore, Translator};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Config file to render instead of the stored configuration.
    pub config_file: Option<PathBuf>,
    pub locale: Locale,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub manifest: String,
    /// Problems found in the configuration. They never block rendering.
    pub errors: Vec<ValidationError>,
}

/// Execute the generate command.
pub fn execute<S, T>(ctx: &AppContext<S, T>, options: &GenerateOptions) -> Result<GenerateOutcome, AppError>
where
    S: ConfigStore,
    T: Translator,
{
    let config = resolve_config(ctx, options.config_file.as_ref())?;

    let errors = validate(&config);
    for error in &errors {
        warn!(field = %error.field, "{}", error.message);
    }

    let manifest = generate_with(&config, options.locale, options.timestamp, ctx.translator());
    Ok(GenerateOutcome { manifest, errors })
}

/// Config from `file` when given, otherwise from the store.
pub(crate) fn resolve_config<S, T>(
    ctx: &AppContext<S, T>,
    file: Option<&PathBuf>,
) -> Result<ComposeConfig, AppError>
where
    S: ConfigStore,
    T: Translator,
{
    match file {
        Some(path) => read_config_file(path),
        None => ctx.store().load(),
    }
}
