//! Single-pass `{{key}}` substitution.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::EmailConfig;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("Invalid token regex"));

/// Replace every `{{key}}` token whose key is in `config`.
///
/// The template is scanned once. Inserted values are never re-scanned, so a
/// value that itself contains `{{other}}` ends up in the output literally.
/// Tokens with no matching key are left untouched. The key is the exact text
/// between the braces; `{{ key }}` does not match `key`.
pub fn substitute(template: &str, config: &EmailConfig) -> String {
    TOKEN_RE
        .replace_all(template, |caps: &Captures| match config.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
