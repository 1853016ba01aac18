//! Sticky site header with desktop and mobile navigation.

use landing_content::{Header, NavLink};

use super::{render_logo, LogoVariant};
use crate::html::html_escape;

/// Render the site header.
///
/// The mobile menu is a native `<details>` disclosure and needs no script.
pub fn render_header(header: &Header) -> String {
    let desktop: String = header.links.iter().map(render_nav_link).collect();
    let mobile: String = header
        .links
        .iter()
        .map(|link| format!(r#"<li class="menu-item">{}</li>"#, render_nav_link(link)))
        .collect();

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="header-container">
        {}
        <nav class="nav-links">{}</nav>
        <details class="mobile-menu">
            <summary aria-label="Menu"><span></span><span></span><span></span></summary>
            <nav><ul>{}</ul></nav>
        </details>
    </div>
</header>"#,
        render_logo(LogoVariant::Dark),
        desktop,
        mobile
    )
}

fn render_nav_link(link: &NavLink) -> String {
    format!(
        r#"<a href="{}" data-id="{}">{}</a>"#,
        html_escape(&link.href),
        html_escape(&link.id),
        html_escape(&link.text)
    )
}
