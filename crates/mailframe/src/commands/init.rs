//! Write a starter config file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mailframe_render::EmailConfig;

use crate::config::{BuildSettings, ConfigFile};

const HEADER: &str = "# mailframe configuration
#
# [email] values are substituted into {{key}} placeholders.
# Leave logoUrl empty to preview the placeholder logo, or set
# brandedHeaderTextOnly = true for a text header on primaryColor.

";

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::write(config_path, starter_config()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'mailframe build' to generate previews.");

    Ok(())
}

fn starter_config() -> Result<String> {
    let file = ConfigFile {
        build: BuildSettings::default(),
        email: EmailConfig::default_base(),
    };
    let body = toml::to_string(&file).context("Failed to serialize default config")?;

    Ok(format!("{}{}", HEADER, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_loadable_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mailframe.toml");

        run(&path, false).await.unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.email, EmailConfig::default_base());
        assert_eq!(config.build.root, ".");
    }

    #[tokio::test]
    async fn keeps_existing_file_without_yes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("mailframe.toml");
        fs::write(&path, "# mine\n").unwrap();

        run(&path, false).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");

        run(&path, true).await.unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[email]"));
    }
}
