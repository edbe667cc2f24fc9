//! Configuration file (mailframe.toml).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mailframe_render::EmailConfig;
use serde::{Deserialize, Serialize};

/// Configuration file structure.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub build: BuildSettings,

    /// Sample values layered over the built-in base configuration
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BuildSettings {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}
fn default_output() -> String {
    "example_emails".to_string()
}

impl ConfigFile {
    /// The base configuration with this file's `[email]` entries applied.
    pub fn email_config(&self) -> EmailConfig {
        EmailConfig::default_base().merged(&self.email)
    }
}

/// Load configuration from `path` if it exists.
///
/// Returns `None` when there is no file. Returns an error if the file exists
/// but is malformed.
pub fn load_config(path: &Path) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailframe_render::ConfigValue;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = tempdir().unwrap();

        let loaded = load_config(&temp.path().join("mailframe.toml")).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn email_section_overrides_base() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mailframe.toml");
        fs::write(
            &path,
            r##"
[email]
projectName = "Acme"
brandedHeaderTextOnly = true
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap().unwrap();
        let email = config.email_config();

        assert_eq!(config.build.output, "example_emails");
        assert_eq!(email.text("projectName").as_deref(), Some("Acme"));
        assert_eq!(email.get("brandedHeaderTextOnly"), Some(&ConfigValue::Flag(true)));
        assert_eq!(email.text("primaryColor").as_deref(), Some("#6366f1"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mailframe.toml");
        fs::write(&path, "[build\nroot = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
