//! Placeholder substitution for HTML email templates.
//!
//! Resolves the branding slots (content logo, header logo, header background)
//! from an [`EmailConfig`] and substitutes `{{key}}` tokens in a single pass.

pub mod branding;
pub mod config;
pub mod placeholder;
pub mod renderer;

pub use branding::{Branding, HeaderKind, DEFAULT_PLACEHOLDER_LOGO};
pub use config::{ConfigValue, EmailConfig};
pub use placeholder::substitute;
pub use renderer::render;
