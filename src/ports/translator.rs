use crate::domain::Locale;

/// Port for looking up localized strings.
///
/// Lookups are total: a missing key yields some text (typically the key
/// itself) rather than an error.
pub trait Translator {
    /// Translate `key` for `locale`, substituting `{{name}}` placeholders from
    /// `params`.
    fn translate(&self, locale: Locale, key: &str, params: &[(&str, &str)]) -> String;
}
