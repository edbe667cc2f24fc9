//! Preview generator for HTML email templates.
//!
//! Renders each template with its sample configuration, wraps it in a preview
//! frame and writes one page per template plus an `index.html` to browse them.

pub mod builder;
pub mod descriptor;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, GeneratedPreview, PreviewBuilder};
pub use descriptor::{EmailKind, TemplateConfigs, TemplateDescriptor, DEFAULT_TEMPLATES};
