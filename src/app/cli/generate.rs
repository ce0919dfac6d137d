//! Generate command implementation.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::app::commands::generate::{self, GenerateOptions};
use crate::domain::{AppError, Locale};

pub fn run_generate(
    config_file: Option<PathBuf>,
    locale: &str,
    timestamp: Option<&str>,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = GenerateOptions {
        config_file,
        locale: locale.parse::<Locale>()?,
        timestamp: parse_timestamp(timestamp)?,
    };
    let outcome = generate::execute(&super::context()?, &options)?;

    match output {
        Some(path) => {
            fs::write(&path, &outcome.manifest)?;
            println!("✅ Wrote manifest to {}", path.display());
        }
        None => print!("{}", outcome.manifest),
    }
    Ok(())
}

fn parse_timestamp(value: Option<&str>) -> Result<DateTime<Utc>, AppError> {
    match value {
        Some(text) => DateTime::parse_from_rfc3339(text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| AppError::InvalidTimestamp(text.to_string())),
        None => Ok(Utc::now()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixed_date;

    #[test]
    fn timestamp_is_normalized_to_utc() {
        assert_eq!(parse_timestamp(Some("2024-01-01T08:00:00+08:00")).unwrap(), fixed_date());
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        assert!(matches!(parse_timestamp(Some("yesterday")), Err(AppError::InvalidTimestamp(_))));
    }
}
