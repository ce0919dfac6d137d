use crate::app::AppContext;
use crate::domain::{AppError, ComposeConfig, Field};
use crate::ports::{ConfigStore, Translator};

pub fn show<S, T>(ctx: &AppContext<S, T>) -> Result<ComposeConfig, AppError>
where
    S: ConfigStore,
    T: Translator,
{
    ctx.store().load()
}

/// Assign one field of the stored configuration and persist it.
///
/// Returns the updated configuration.
pub fn set<S, T>(ctx: &AppContext<S, T>, field: &str, value: &str) -> Result<ComposeConfig, AppError>
where
    S: ConfigStore,
    T: Translator,
{
    let field: Field = field.parse()?;
    let mut config = ctx.store().load()?;
    config.set_field(field, value)?;
    ctx.store().save(&config)?;
    Ok(config)
}

pub fn reset<S, T>(ctx: &AppContext<S, T>) -> Result<(), AppError>
where
    S: ConfigStore,
    T: Translator,
{
    ctx.store().clear()
}
