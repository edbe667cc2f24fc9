//! Email configuration values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sample confirmation link shown in previews.
pub const PREVIEW_CONFIRM_URL: &str = "https://yourdomain.com/api/confirm?token=abc123...";

/// Sample unsubscribe link shown in previews.
pub const PREVIEW_UNSUBSCRIBE_URL: &str = "https://yourdomain.com/api/unsubscribe?token=xyz789...";

/// A single configuration value.
///
/// Every value has a text form for substitution. Lists render as their items
/// joined with commas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean switch, e.g. `brandedHeaderTextOnly`
    Flag(bool),
    /// Integer value
    Number(i64),
    /// Fractional value, e.g. `lineHeight = 1.5`
    Float(f64),
    /// Free text: names, colors, URLs, subjects
    Text(String),
    /// Array of values
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    /// True only for the boolean `true`; the text `"true"` does not count.
    pub fn is_true(&self) -> bool {
        matches!(self, ConfigValue::Flag(true))
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Flag(b) => write!(f, "{}", b),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Flag(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Number(n)
    }
}

impl From<f64> for ConfigValue {
    fn from(x: f64) -> Self {
        ConfigValue::Float(x)
    }
}

/// Mapping from placeholder keys to values.
///
/// Keys are author-defined; no schema is enforced beyond what templates
/// happen to reference. Values are never mutated in place: overrides go
/// through [`EmailConfig::with`] and [`EmailConfig::merged`], which return
/// new mappings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailConfig {
    values: BTreeMap<String, ConfigValue>,
}

impl EmailConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in base configuration used when no overrides are supplied.
    pub fn default_base() -> Self {
        Self::new()
            .with("projectName", "The Widget")
            .with("primaryColor", "#6366f1")
            .with("logoUrl", "")
            .with("brandedHeaderTextOnly", false)
            .with("fromName", "The Widget Team")
            .with("supportEmail", "support@yourdomain.com")
            .with("confirmationSubject", "Please confirm your email address")
            .with(
                "confirmationPreheader",
                "One quick click and you're on the list.",
            )
            .with("welcomeSubject", "Welcome aboard!")
            .with(
                "welcomePreheader",
                "Thanks for confirming. Here's what happens next.",
            )
            .with("footerText", "You received this email because you signed up on our website.")
            .with("companyAddress", "123 Main Street, Springfield")
    }

    /// Derive the preview variant: sample links filled in, everything else
    /// (including an empty `logoUrl`) kept as-is.
    pub fn preview(&self) -> Self {
        self.clone()
            .with("confirmUrl", PREVIEW_CONFIRM_URL)
            .with("unsubscribeUrl", PREVIEW_UNSUBSCRIBE_URL)
    }

    /// Return this configuration with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Return a copy with every entry of `overrides` applied on top.
    pub fn merged(&self, overrides: &EmailConfig) -> Self {
        let mut values = self.values.clone();
        values.extend(
            overrides
                .values
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Self { values }
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Look up a value and render it as text, if present.
    pub fn text(&self, key: &str) -> Option<String> {
        self.values.get(key).map(ToString::to_string)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
