use std::collections::HashMap;
use std::sync::OnceLock;

use serde_yaml::Value;
use tracing::warn;

use crate::domain::Locale;
use crate::ports::Translator;

static ZH_CN: &str = include_str!("../assets/locales/zh-CN.yml");
static EN_US: &str = include_str!("../assets/locales/en-US.yml");

type Messages = HashMap<String, String>;

static CATALOG: OnceLock<HashMap<Locale, Messages>> = OnceLock::new();

/// Translator backed by the locale files compiled into the binary.
///
/// Unknown keys translate to the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    fn messages(locale: Locale) -> Option<&'static Messages> {
        CATALOG.get_or_init(load_catalog).get(&locale)
    }
}

impl Translator for EmbeddedCatalog {
    fn translate(&self, locale: Locale, key: &str, params: &[(&str, &str)]) -> String {
        match Self::messages(locale).and_then(|messages| messages.get(key)) {
            Some(template) => interpolate(template, params),
            None => key.to_string(),
        }
    }
}

fn load_catalog() -> HashMap<Locale, Messages> {
    Locale::ALL
        .iter()
        .map(|&locale| {
            let source = match locale {
                Locale::ZhCn => ZH_CN,
                Locale::EnUs => EN_US,
            };
            (locale, parse_messages(locale, source))
        })
        .collect()
}

fn parse_messages(locale: Locale, source: &str) -> Messages {
    let mut messages = Messages::new();
    match serde_yaml::from_str::<Value>(source) {
        Ok(root) => flatten("", &root, &mut messages),
        Err(err) => warn!(locale = %locale, error = %err, "failed to parse embedded locale"),
    }
    messages
}

/// Nested mappings become dotted keys: `support: {title: ..}` -> `support.title`.
fn flatten(prefix: &str, value: &Value, out: &mut Messages) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else { continue };
                let path = if prefix.is_empty() { key.to_string() } else { format!("{prefix}.{key}") };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    params.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{{{name}}}}}"), value)
    })
}
