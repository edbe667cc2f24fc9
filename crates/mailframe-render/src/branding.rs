//! Logo and header resolution.
//!
//! Every template gets three derived slots:
//! - `logoHtml`: logo shown above the content (only when a real logo is set)
//! - `logoHeaderHtml`: logo or project name shown inside a branded header
//! - `brandedHeaderBgColor`: background behind that header

use crate::config::EmailConfig;

/// Built-in "Your Logo" gradient badge, inlined as an SVG data URI.
pub const DEFAULT_PLACEHOLDER_LOGO: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMjAwIiBoZWlnaHQ9IjYwIiB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciPjxkZWZzPjxsaW5lYXJHcmFkaWVudCBpZD0iZ3JhZCIgeDE9IjAlIiB5MT0iMCUiIHgyPSIxMDAlIiB5Mj0iMCUiPjxzdG9wIG9mZnNldD0iMCUiIHN0eWxlPSJzdG9wLWNvbG9yOiM2MzY2ZjE7c3RvcC1vcGFjaXR5OjEiLz48c3RvcCBvZmZzZXQ9IjEwMCUiIHN0eWxlPSJzdG9wLWNvbG9yOiM4YjVjZjY7c3RvcC1vcGFjaXR5OjEiLz48L2xpbmVhckdyYWRpZW50PjwvZGVmcz48cmVjdCB3aWR0aD0iMjAwIiBoZWlnaHQ9IjYwIiBmaWxsPSJ1cmwoI2dyYWQpIiByeD0iNiIvPjx0ZXh0IHg9IjEwMCIgeT0iMzgiIGZvbnQtZmFtaWx5PSJzeXN0ZW0tdWksIC1hcHBsZS1zeXN0ZW0sIHNhbnMtc2VyaWYiIGZvbnQtc2l6ZT0iMTgiIGZvbnQtd2VpZ2h0PSI2MDAiIGZpbGw9IndoaXRlIiB0ZXh0LWFuY2hvcj0ibWlkZGxlIiBsZXR0ZXItc3BhY2luZz0iMC41cHgiPllvdXIgTG9nbzwvdGV4dD48L3N2Zz4=";

/// Key holding the user's logo URL.
pub const LOGO_URL_KEY: &str = "logoUrl";

/// Key of the text-only header switch.
pub const TEXT_ONLY_KEY: &str = "brandedHeaderTextOnly";

/// Derived key: logo above the content.
pub const LOGO_HTML_KEY: &str = "logoHtml";

/// Derived key: header logo slot.
pub const LOGO_HEADER_HTML_KEY: &str = "logoHeaderHtml";

/// Derived key: header background color.
pub const HEADER_BG_KEY: &str = "brandedHeaderBgColor";

const TRANSPARENT: &str = "transparent";

const IMG_STYLE: &str = "max-width: 250px; width: auto; height: auto; display: block; margin: 0 auto;";

const HEADER_STYLE: &str = "color: white; font-size: 24px; font-weight: bold;";

/// Which header variant was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    /// User-supplied logo image
    Logo,
    /// Project name on the brand color
    TextOnly,
    /// Built-in placeholder image
    Placeholder,
}

/// The derived branding fields for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub kind: HeaderKind,
    pub logo_html: String,
    pub logo_header_html: String,
    pub header_bg_color: String,
}

impl Branding {
    /// Resolve branding from a configuration.
    ///
    /// A non-blank `logoUrl` wins. Otherwise `brandedHeaderTextOnly = true`
    /// selects a text header on `primaryColor`. Otherwise the placeholder
    /// image is used. Any image (real or placeholder) gets a transparent
    /// header background.
    pub fn resolve(config: &EmailConfig) -> Self {
        let project_name = config.text("projectName").unwrap_or_default();

        let logo_url = config
            .text(LOGO_URL_KEY)
            .filter(|url| !url.trim().is_empty());

        if let Some(url) = logo_url {
            let img = image_tag(&url, &project_name);
            return Self {
                kind: HeaderKind::Logo,
                logo_html: format!(
                    "<div class=\"logo-container\" style=\"text-align: center; padding: 30px 20px 20px 20px; margin-bottom: 30px;\">\n    {}\n  </div>",
                    img
                ),
                logo_header_html: header_div(&format!("\n      {}\n    ", img)),
                header_bg_color: TRANSPARENT.to_string(),
            };
        }

        let text_only = config.get(TEXT_ONLY_KEY).is_some_and(|v| v.is_true());

        if text_only {
            return Self {
                kind: HeaderKind::TextOnly,
                logo_html: String::new(),
                logo_header_html: header_div(&project_name),
                header_bg_color: config.text("primaryColor").unwrap_or_default(),
            };
        }

        let img = image_tag(DEFAULT_PLACEHOLDER_LOGO, &project_name);
        Self {
            kind: HeaderKind::Placeholder,
            logo_html: String::new(),
            logo_header_html: header_div(&format!("\n      {}\n    ", img)),
            header_bg_color: TRANSPARENT.to_string(),
        }
    }

    /// The derived fields as `(key, value)` pairs.
    pub fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (LOGO_HTML_KEY, self.logo_html.as_str()),
            (LOGO_HEADER_HTML_KEY, self.logo_header_html.as_str()),
            (HEADER_BG_KEY, self.header_bg_color.as_str()),
        ]
    }
}

fn image_tag(src: &str, alt: &str) -> String {
    format!("<img src=\"{}\" alt=\"{}\" style=\"{}\" />", src, alt, IMG_STYLE)
}

fn header_div(inner: &str) -> String {
    format!("<div class=\"logo\" style=\"{}\">{}</div>", HEADER_STYLE, inner)
}
