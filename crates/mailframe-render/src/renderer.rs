//! Template rendering entry point.

use crate::branding::Branding;
use crate::config::EmailConfig;
use crate::placeholder::substitute;

/// Render an email template against a configuration.
///
/// Derived branding fields are merged into a copy of `config` before
/// substitution. A key the caller already supplies is never overwritten by a
/// derived value.
pub fn render(template_html: &str, config: &EmailConfig) -> String {
    let branding = Branding::resolve(config);
    let merged = with_derived_fields(config, &branding);

    substitute(template_html, &merged)
}

fn with_derived_fields(config: &EmailConfig, branding: &Branding) -> EmailConfig {
    let mut merged = config.clone();

    for (key, value) in branding.fields() {
        if config.contains(key) {
            tracing::debug!("Keeping user-supplied '{}' over derived value", key);
            continue;
        }
        merged = merged.with(key, value);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::DEFAULT_PLACEHOLDER_LOGO;
    use pretty_assertions::assert_eq;

    const BRANDED: &str = r#"<div class="header" style="background: {{brandedHeaderBgColor}};">{{logoHeaderHtml}}</div>
{{logoHtml}}
<h1>Welcome to {{projectName}}</h1>
<a href="{{confirmUrl}}">Confirm</a>"#;

    #[test]
    fn renders_logo_variant() {
        let config = EmailConfig::new()
            .with("projectName", "Acme")
            .with("logoUrl", "https://x/logo.png")
            .with("confirmUrl", "https://acme.test/confirm");

        let html = render(BRANDED, &config);

        assert!(html.contains("background: transparent;"));
        assert!(html.contains("<img src=\"https://x/logo.png\" alt=\"Acme\""));
        assert!(html.contains("<h1>Welcome to Acme</h1>"));
        assert!(html.contains("href=\"https://acme.test/confirm\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn renders_text_only_variant() {
        let config = EmailConfig::new()
            .with("projectName", "Acme")
            .with("logoUrl", "")
            .with("brandedHeaderTextOnly", true)
            .with("primaryColor", "#ff0000");

        let html = render(BRANDED, &config);

        assert!(html.contains("background: #ff0000;"));
        assert!(html.contains(">Acme</div>"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn renders_placeholder_variant() {
        let config = EmailConfig::new().with("projectName", "Acme").with("logoUrl", "");

        let html = render(BRANDED, &config);

        assert!(html.contains("background: transparent;"));
        assert!(html.contains(DEFAULT_PLACEHOLDER_LOGO));
    }

    #[test]
    fn leaves_missing_keys_in_place() {
        let config = EmailConfig::new().with("projectName", "Acme");

        let html = render(BRANDED, &config);

        assert!(html.contains("href=\"{{confirmUrl}}\""));
    }

    #[test]
    fn token_free_template_is_unchanged() {
        let html = "<html><body><p>Plain { braces } stay</p></body></html>";

        assert_eq!(render(html, &EmailConfig::default_base()), html);
    }

    #[test]
    fn does_not_mutate_caller_config() {
        let config = EmailConfig::default_base();
        let before = config.clone();

        render(BRANDED, &config);

        assert_eq!(config, before);
        assert!(!config.contains("logoHtml"));
    }

    #[test]
    fn user_supplied_derived_key_wins() {
        let config = EmailConfig::new()
            .with("logoUrl", "https://x/logo.png")
            .with("logoHtml", "<b>custom</b>");

        assert_eq!(render("{{logoHtml}}", &config), "<b>custom</b>");
    }
}
