//! Preview builder.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use mailframe_render::{render, EmailConfig};

use crate::descriptor::{
    display_name, EmailKind, TemplateConfigs, TemplateDescriptor, DEFAULT_TEMPLATES,
};
use crate::templates::{FrameContext, IndexCard, IndexContext, TemplateEngine};

/// Configuration for a preview build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root that template source paths are relative to
    pub root: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Templates to render, in order
    pub templates: Vec<TemplateDescriptor>,

    /// Configuration variants referenced by the templates
    pub configs: TemplateConfigs,

    /// Where the sample configuration came from (shown on the index page)
    pub config_source: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: PathBuf::from("example_emails"),
            templates: DEFAULT_TEMPLATES.to_vec(),
            configs: TemplateConfigs::preview(&EmailConfig::default_base()),
            config_source: "built-in defaults".to_string(),
        }
    }
}

/// A preview that was written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPreview {
    /// Template name
    pub name: String,

    /// Output file path
    pub path: PathBuf,
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Previews written, in template order
    pub generated: Vec<GeneratedPreview>,

    /// Templates skipped because their source file was missing
    pub skipped: Vec<String>,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl BuildResult {
    /// Path of the generated index page.
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read template {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("Failed to render template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Template '{template}' references unknown config '{key}'")]
    UnknownConfig { template: String, key: String },
}

/// Renders every configured template into a framed preview page.
pub struct PreviewBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl PreviewBuilder {
    /// Create a new preview builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    /// Render all templates, then write the index.
    ///
    /// Templates are processed one at a time in list order. A missing source
    /// file is logged and skipped; any other failure aborts the build.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();
        let output_dir = &self.config.output_dir;

        fs::create_dir_all(output_dir).map_err(|source| BuildError::Write {
            path: output_dir.display().to_string(),
            source,
        })?;

        let mut generated = Vec::new();
        let mut skipped = Vec::new();

        for descriptor in &self.config.templates {
            tracing::info!("Processing {}...", descriptor.name);

            match self.build_preview(descriptor)? {
                Some(preview) => {
                    tracing::info!("Generated {}", descriptor.output_file());
                    generated.push(preview);
                }
                None => skipped.push(descriptor.name.to_string()),
            }
        }

        self.generate_index(&generated)?;

        Ok(BuildResult {
            generated,
            skipped,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: output_dir.clone(),
        })
    }

    /// Render and write a single preview. Returns `None` if the source is missing.
    fn build_preview(
        &self,
        descriptor: &TemplateDescriptor,
    ) -> Result<Option<GeneratedPreview>, BuildError> {
        let source_path = self.config.root.join(descriptor.source_path);

        let template_html = match fs::read_to_string(&source_path) {
            Ok(html) => html,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("Template file not found: {}", descriptor.source_path);
                return Ok(None);
            }
            Err(source) => {
                return Err(BuildError::Read {
                    path: source_path.display().to_string(),
                    source,
                })
            }
        };

        let email_config =
            self.config
                .configs
                .get(descriptor.config_key)
                .ok_or_else(|| BuildError::UnknownConfig {
                    template: descriptor.name.to_string(),
                    key: descriptor.config_key.to_string(),
                })?;

        let kind = descriptor.kind();
        let frame = FrameContext {
            name: descriptor.name.to_string(),
            label: display_name(descriptor.name),
            subject: email_config.text(kind.subject_key()).unwrap_or_default(),
            preheader: email_config.text(kind.preheader_key()).unwrap_or_default(),
            content: render(&template_html, email_config),
        };

        let html = self.templates.render_frame(&frame)?;

        let output_path = self.config.output_dir.join(descriptor.output_file());
        write_file(&output_path, html)?;

        Ok(Some(GeneratedPreview {
            name: descriptor.name.to_string(),
            path: output_path,
        }))
    }

    /// Write `index.html` linking every generated preview.
    fn generate_index(&self, generated: &[GeneratedPreview]) -> Result<(), BuildError> {
        let cards = generated
            .iter()
            .map(|preview| {
                let kind = EmailKind::from_name(&preview.name);
                IndexCard {
                    title: display_name(&preview.name),
                    path: format!("{}.html", preview.name),
                    kind_class: kind.css_class().to_string(),
                    kind_label: kind.label().to_string(),
                }
            })
            .collect();

        let context = IndexContext {
            cards,
            generated_on: chrono::Local::now().format("%Y-%m-%d").to_string(),
            config_source: self.config.config_source.clone(),
        };

        let html = self.templates.render_index(&context)?;
        write_file(&self.config.output_dir.join("index.html"), html)?;

        tracing::info!("Generated index.html");

        Ok(())
    }
}

fn write_file(path: &Path, contents: String) -> Result<(), BuildError> {
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const CONFIRMATION: TemplateDescriptor = TemplateDescriptor {
        name: "confirmation-email-branded",
        source_path: "templates/confirmation.html",
        config_key: "branded",
    };

    const WELCOME: TemplateDescriptor = TemplateDescriptor {
        name: "welcome-email-minimal",
        source_path: "templates/welcome.html",
        config_key: "minimal",
    };

    const MISSING: TemplateDescriptor = TemplateDescriptor {
        name: "welcome-email-professional",
        source_path: "templates/does-not-exist.html",
        config_key: "professional",
    };

    fn write_templates(root: &Path) {
        let dir = root.join("templates");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("confirmation.html"),
            r#"<div style="background: {{brandedHeaderBgColor}}">{{logoHeaderHtml}}</div><a href="{{confirmUrl}}">Confirm for {{projectName}}</a>"#,
        )
        .unwrap();
        fs::write(
            dir.join("welcome.html"),
            "<p>Welcome to {{projectName}}. {{unknownKey}}</p>",
        )
        .unwrap();
    }

    fn config_for(root: &Path, templates: Vec<TemplateDescriptor>) -> BuildConfig {
        BuildConfig {
            root: root.to_path_buf(),
            output_dir: root.join("out"),
            templates,
            ..Default::default()
        }
    }

    #[test]
    fn builds_previews_and_index() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());

        let result = PreviewBuilder::new(config_for(temp.path(), vec![CONFIRMATION, WELCOME]))
            .build()
            .unwrap();

        assert_eq!(result.generated.len(), 2);
        assert!(result.skipped.is_empty());

        let out = temp.path().join("out");
        let confirmation = fs::read_to_string(out.join("confirmation-email-branded.html")).unwrap();
        assert!(confirmation.contains("Confirm for The Widget"));
        assert!(confirmation.contains("https://yourdomain.com/api/confirm?token=abc123..."));
        assert!(confirmation.contains("background: transparent"));
        assert!(confirmation.contains("Please confirm your email address"));

        let welcome = fs::read_to_string(out.join("welcome-email-minimal.html")).unwrap();
        assert!(welcome.contains("Welcome aboard!"));
        assert!(welcome.contains("{{unknownKey}}"));

        let index = fs::read_to_string(result.index_path()).unwrap();
        assert!(index.contains(r#"src="confirmation-email-branded.html""#));
        assert!(index.contains(r#"src="welcome-email-minimal.html""#));
        assert!(index.contains("Welcome Email Minimal"));
    }

    #[test]
    fn skips_missing_templates() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());

        let result = PreviewBuilder::new(config_for(
            temp.path(),
            vec![CONFIRMATION, MISSING, WELCOME],
        ))
        .build()
        .unwrap();

        assert_eq!(result.skipped, vec!["welcome-email-professional".to_string()]);
        assert_eq!(
            result
                .generated
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>(),
            vec!["confirmation-email-branded", "welcome-email-minimal"]
        );

        let out = temp.path().join("out");
        assert!(!out.join("welcome-email-professional.html").exists());
        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(!index.contains("welcome-email-professional"));
    }

    #[test]
    fn rebuild_overwrites_outputs() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());
        let builder = PreviewBuilder::new(config_for(temp.path(), vec![WELCOME]));

        builder.build().unwrap();
        fs::write(
            temp.path().join("templates/welcome.html"),
            "<p>Second run for {{projectName}}</p>",
        )
        .unwrap();
        builder.build().unwrap();

        let welcome =
            fs::read_to_string(temp.path().join("out/welcome-email-minimal.html")).unwrap();
        assert!(welcome.contains("Second run for The Widget"));
    }

    #[test]
    fn unreadable_template_is_fatal() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());
        fs::create_dir_all(temp.path().join("templates/unreadable.html")).unwrap();

        let unreadable = TemplateDescriptor {
            source_path: "templates/unreadable.html",
            ..WELCOME
        };
        let result = PreviewBuilder::new(config_for(temp.path(), vec![unreadable])).build();

        assert!(matches!(result, Err(BuildError::Read { .. })));
        assert!(!temp.path().join("out/welcome-email-minimal.html").exists());
    }

    #[test]
    fn unknown_config_key_is_fatal() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());

        let bogus = TemplateDescriptor {
            config_key: "retro",
            ..WELCOME
        };
        let result = PreviewBuilder::new(config_for(temp.path(), vec![bogus])).build();

        assert!(matches!(result, Err(BuildError::UnknownConfig { .. })));
    }

    #[test]
    fn empty_template_list_still_writes_index() {
        let temp = tempdir().unwrap();

        let result = PreviewBuilder::new(config_for(temp.path(), vec![]))
            .build()
            .unwrap();

        assert!(result.generated.is_empty());
        assert!(result.index_path().exists());
    }

    #[test]
    fn text_only_header_uses_primary_color() {
        let temp = tempdir().unwrap();
        write_templates(temp.path());

        let base = EmailConfig::default_base()
            .with("brandedHeaderTextOnly", true)
            .with("primaryColor", "#ff0000");
        let config = BuildConfig {
            configs: TemplateConfigs::preview(&base),
            ..config_for(temp.path(), vec![CONFIRMATION])
        };

        PreviewBuilder::new(config).build().unwrap();

        let html = fs::read_to_string(temp.path().join("out/confirmation-email-branded.html"))
            .unwrap();
        assert!(html.contains("background: #ff0000"));
    }
}
