//! Template descriptors and the configurations they reference.

use std::collections::BTreeMap;

use mailframe_render::EmailConfig;

/// One template file and the configuration variant applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDescriptor {
    /// Output name, also used for the preview file name
    pub name: &'static str,
    /// Source path relative to the project root
    pub source_path: &'static str,
    /// Key into [`TemplateConfigs`]
    pub config_key: &'static str,
}

/// The templates rendered by a default build, in output order.
pub const DEFAULT_TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        name: "confirmation-email-minimal",
        source_path: "the-widget/templates/confirmation-email.html",
        config_key: "minimal",
    },
    TemplateDescriptor {
        name: "confirmation-email-professional",
        source_path: "the-widget/templates/examples/confirmation-email-professional.html",
        config_key: "professional",
    },
    TemplateDescriptor {
        name: "confirmation-email-branded",
        source_path: "the-widget/templates/examples/confirmation-email-branded.html",
        config_key: "branded",
    },
    TemplateDescriptor {
        name: "welcome-email-minimal",
        source_path: "the-widget/templates/welcome-email.html",
        config_key: "minimal",
    },
    TemplateDescriptor {
        name: "welcome-email-professional",
        source_path: "the-widget/templates/examples/welcome-email-professional.html",
        config_key: "professional",
    },
    TemplateDescriptor {
        name: "welcome-email-branded",
        source_path: "the-widget/templates/examples/welcome-email-branded.html",
        config_key: "branded",
    },
];

impl TemplateDescriptor {
    /// Kind of email, inferred from the name.
    pub fn kind(&self) -> EmailKind {
        EmailKind::from_name(self.name)
    }

    /// File name of the generated preview.
    pub fn output_file(&self) -> String {
        format!("{}.html", self.name)
    }
}

/// Email kind, used to pick subject and preheader and to label index cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailKind {
    Confirmation,
    Welcome,
}

impl EmailKind {
    /// Any name containing `confirmation` is a confirmation email; everything
    /// else is treated as a welcome email.
    pub fn from_name(name: &str) -> Self {
        if name.contains("confirmation") {
            Self::Confirmation
        } else {
            Self::Welcome
        }
    }

    pub fn subject_key(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmationSubject",
            Self::Welcome => "welcomeSubject",
        }
    }

    pub fn preheader_key(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmationPreheader",
            Self::Welcome => "welcomePreheader",
        }
    }

    /// CSS class for the index badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Confirmation => "confirmation",
            Self::Welcome => "welcome",
        }
    }

    /// Badge label, e.g. "Confirmation Email".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Confirmation => "Confirmation Email",
            Self::Welcome => "Welcome Email",
        }
    }
}

/// Named configuration variants referenced by descriptors.
#[derive(Debug, Clone, Default)]
pub struct TemplateConfigs {
    configs: BTreeMap<String, EmailConfig>,
}

impl TemplateConfigs {
    /// Create an empty set of variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in style shares the preview variant of `base`.
    ///
    /// `default` is kept as an alias for `minimal`.
    pub fn preview(base: &EmailConfig) -> Self {
        let preview = base.preview();
        ["default", "minimal", "professional", "branded"]
            .into_iter()
            .fold(Self::new(), |configs, key| configs.with(key, preview.clone()))
    }

    /// Return these variants with `key` bound to `config`.
    pub fn with(mut self, key: impl Into<String>, config: EmailConfig) -> Self {
        self.configs.insert(key.into(), config);
        self
    }

    /// Look up a variant by key.
    pub fn get(&self, key: &str) -> Option<&EmailConfig> {
        self.configs.get(key)
    }
}

/// Turn `welcome-email-branded` into `Welcome Email Branded`.
///
/// Dashes become spaces, and the first character of every run of word
/// characters (alphanumerics and `_`) is upper-cased, so `v1.promo/blast`
/// becomes `V1.Promo/Blast`.
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if c == '-' {
            out.push(' ');
        } else if is_word && !in_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        in_word = is_word;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn infers_kind_from_name() {
        assert_eq!(
            EmailKind::from_name("confirmation-email-branded"),
            EmailKind::Confirmation
        );
        assert_eq!(EmailKind::from_name("welcome-email-minimal"), EmailKind::Welcome);
        assert_eq!(EmailKind::from_name("password-reset"), EmailKind::Welcome);
    }

    #[test]
    fn formats_display_name() {
        assert_eq!(
            display_name("confirmation-email-professional"),
            "Confirmation Email Professional"
        );
        assert_eq!(display_name("welcome"), "Welcome");
    }

    #[test]
    fn capitalizes_after_any_separator() {
        assert_eq!(display_name("v1.promo/blast"), "V1.Promo/Blast");
        assert_eq!(display_name("re_send-now"), "Re_send Now");
    }

    #[test]
    fn default_templates_reference_known_configs() {
        let configs = TemplateConfigs::preview(&EmailConfig::default_base());

        for descriptor in DEFAULT_TEMPLATES {
            assert!(
                configs.get(descriptor.config_key).is_some(),
                "{} has no config",
                descriptor.name
            );
        }
        assert_eq!(configs.get("default"), configs.get("minimal"));
    }

    #[test]
    fn output_file_uses_name() {
        assert_eq!(
            DEFAULT_TEMPLATES[0].output_file(),
            "confirmation-email-minimal.html"
        );
    }
}
