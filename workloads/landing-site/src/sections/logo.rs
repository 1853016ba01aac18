//! Site logo.

use crate::config::SITE_NAME;

/// Colour scheme of the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    /// Dark text, for light backgrounds.
    Dark,
    /// Light text, for dark backgrounds.
    Light,
}

impl LogoVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Dark => "logo-dark",
            Self::Light => "logo-light",
        }
    }
}

/// Render the logo linking home.
pub fn render_logo(variant: LogoVariant) -> String {
    format!(
        r#"<a href="/" class="logo {}">{}</a>"#,
        variant.class(),
        SITE_NAME
    )
}
