//! Preview build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use mailframe_static::{BuildConfig, PreviewBuilder, TemplateConfigs, DEFAULT_TEMPLATES};

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, root: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Generating HTML email previews...");

    let loaded = load_config(config_path)?;
    let config_source = if loaded.is_some() {
        config_path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };
    let file_config = loaded.unwrap_or_default();

    let config = BuildConfig {
        root: root.unwrap_or_else(|| PathBuf::from(&file_config.build.root)),
        output_dir: output.unwrap_or_else(|| PathBuf::from(&file_config.build.output)),
        templates: DEFAULT_TEMPLATES.to_vec(),
        configs: TemplateConfigs::preview(&file_config.email_config()),
        config_source,
    };

    let result = PreviewBuilder::new(config).build()?;

    tracing::info!(
        "Generated {} previews ({} skipped) in {}ms",
        result.generated.len(),
        result.skipped.len(),
        result.duration_ms
    );

    tracing::info!("Files saved to: {}", result.output_dir.display());
    tracing::info!("Open {} in your browser", result.index_path().display());

    Ok(())
}
