use chrono::{DateTime, Utc};

use crate::domain::Locale;
use crate::ports::Translator;

pub const TITLE: &str = "# Hagicode Docker Compose Configuration";

/// Community QQ group advertised in the support block.
pub const SUPPORT_QQ_GROUP: &str = "610394020";

pub const KEY_GENERATED_AT: &str = "header.generatedAt";
pub const KEY_SUPPORT_TITLE: &str = "support.title";
pub const KEY_SUPPORT_INTRO: &str = "support.intro";
pub const KEY_SUPPORT_QQ_GROUP: &str = "support.qqGroup";

pub fn build_header(
    locale: Locale,
    timestamp: DateTime<Utc>,
    translator: &dyn Translator,
) -> Vec<String> {
    let t = |key: &str, params: &[(&str, &str)]| translator.translate(locale, key, params);

    vec![
        TITLE.to_string(),
        comment(&format!("{}: {}", t(KEY_GENERATED_AT, &[]), locale.format_timestamp(timestamp))),
        "#".to_string(),
        comment(&t(KEY_SUPPORT_TITLE, &[])),
        comment(&t(KEY_SUPPORT_INTRO, &[])),
        comment(&format!("- {}", t(KEY_SUPPORT_QQ_GROUP, &[("group", SUPPORT_QQ_GROUP)]))),
    ]
}

/// A single comment line; embedded line breaks are flattened.
fn comment(text: &str) -> String {
    let flat: String = text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }).collect();
    format!("# {flat}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::EmbeddedCatalog;
    use crate::testing::fixed_date;

    struct KeyEcho;

    impl Translator for KeyEcho {
        fn translate(&self, _locale: Locale, key: &str, _params: &[(&str, &str)]) -> String {
            format!("<{key}>\nnext")
        }
    }

    #[test]
    fn chinese_header_has_support_block() {
        let header = build_header(Locale::ZhCn, fixed_date(), &EmbeddedCatalog);
        let text = header.join("\n");

        assert_eq!(header[0], TITLE);
        assert!(text.contains("# 支持信息"));
        assert!(text.contains("2024/1/1"));
        assert!(header.contains(&"# - 加入我们的 QQ 群: 610394020".to_string()));
    }

    #[test]
    fn english_header_uses_month_first_date() {
        let text = build_header(Locale::EnUs, fixed_date(), &EmbeddedCatalog).join("\n");

        assert!(text.contains("# Support Information"));
        assert!(text.contains("# If you encounter any issues or need technical support:"));
        assert!(text.contains("1/1/2024"));
    }

    #[test]
    fn every_line_is_a_comment_even_with_multiline_translations() {
        let header = build_header(Locale::EnUs, fixed_date(), &KeyEcho);

        assert!(header.iter().all(|line| line.starts_with('#') && !line.contains('\n')));
        assert!(header.contains(&"# <support.title> next".to_string()));
    }
}
