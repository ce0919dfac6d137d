//! YAML scalar rendering.
//!
//! Every value placed in the manifest goes through one of these helpers so the
//! document always parses back to the exact input string.

/// Render `value` as a double-quoted scalar.
pub(crate) fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if needs_escape(c) => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render `value` plain when YAML would read it back as the same string,
/// quoted otherwise.
///
/// The quoted fallback is single-quoted so backslashes stay literal, unless
/// the value holds characters that need escaping.
pub(crate) fn plain_or_quoted(value: &str) -> String {
    if is_plain_safe(value) && !resolves_to_non_string(value) {
        value.to_string()
    } else if value.chars().any(needs_escape) {
        double_quoted(value)
    } else {
        format!("'{}'", value.replace('\'', "''"))
    }
}

/// Render a decimal ID such as PUID plain; anything else is treated as a string.
pub(crate) fn plain_or_quoted_number(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.to_string()
    } else {
        plain_or_quoted(value)
    }
}

/// Characters YAML would reject, fold as line breaks, or strip as a BOM.
fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{FEFF}' | '\u{FFFE}' | '\u{FFFF}')
}

fn is_plain_safe(value: &str) -> bool {
    const INDICATORS: &[char] =
        &['-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`'];

    let Some(first) = value.chars().next() else {
        return false;
    };
    if INDICATORS.contains(&first) || first.is_whitespace() {
        return false;
    }
    if value.ends_with(char::is_whitespace) || value.ends_with(':') {
        return false;
    }
    if value.starts_with("...") || value.chars().any(needs_escape) {
        return false;
    }
    !value.contains(": ") && !value.contains(" #")
}

fn resolves_to_non_string(value: &str) -> bool {
    const RESERVED: &[&str] =
        &["true", "false", "yes", "no", "on", "off", "y", "n", "null", "~"];

    let lower = value.to_ascii_lowercase();
    if RESERVED.contains(&lower.as_str()) || lower.trim_start_matches(['+', '-']).starts_with(".inf") {
        return true;
    }
    if lower == ".nan" || value.parse::<f64>().is_ok() {
        return true;
    }
    if ["0x", "0o", "0b"].iter().any(|prefix| lower.starts_with(prefix)) {
        return true;
    }
    let numeric_like = value.chars().all(|c| c.is_ascii_digit() || "_.:+-eExXoObB".contains(c));
    numeric_like && value.chars().any(|c| c.is_ascii_digit())
}
