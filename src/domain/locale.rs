use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::domain::AppError;

/// Language used for the localized parts of the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::EnUs];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::ZhCn => "zh-CN",
            Locale::EnUs => "en-US",
        }
    }

    /// Format a timestamp the way the locale writes date and time.
    ///
    /// `zh-CN` renders `2024/1/1 00:00:00`, `en-US` renders
    /// `1/1/2024, 12:00:00 AM`. Timestamps are shown in UTC.
    pub fn format_timestamp(self, timestamp: DateTime<Utc>) -> String {
        let (year, month, day) = (timestamp.year(), timestamp.month(), timestamp.day());
        let (minute, second) = (timestamp.minute(), timestamp.second());
        match self {
            Locale::ZhCn => format!(
                "{year}/{month}/{day} {:02}:{minute:02}:{second:02}",
                timestamp.hour()
            ),
            Locale::EnUs => {
                let (is_pm, hour) = timestamp.hour12();
                let meridiem = if is_pm { "PM" } else { "AM" };
                format!("{month}/{day}/{year}, {hour}:{minute:02}:{second:02} {meridiem}")
            }
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" => Ok(Locale::ZhCn),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(AppError::InvalidLocale(s.to_string())),
        }
    }
}
