//! Site footer with link columns.

use landing_content::{Footer, FooterSectionLink};

use super::{render_logo, LogoVariant};
use crate::html::html_escape;

/// Render the site footer.
pub fn render_footer(footer: &Footer) -> String {
    let columns: String = footer.section_link.iter().map(render_column).collect();

    format!(
        r#"<footer class="site-footer" data-section="footer">
    <div class="footer-container">
        <div class="footer-brand">
            {}
            <p>{}</p>
        </div>{}
    </div>
    <div class="footer-bottom">{}</div>
</footer>"#,
        render_logo(LogoVariant::Light),
        html_escape(&footer.text),
        columns,
        html_escape(&footer.copyright_text)
    )
}

fn render_column(section: &FooterSectionLink) -> String {
    let links: String = section
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&link.href),
                html_escape(&link.text)
            )
        })
        .collect();

    format!(
        r#"
        <div class="footer-column" data-id="{}">
            <h3>{}</h3>
            <ul>{}</ul>
        </div>"#,
        html_escape(&section.id),
        html_escape(&section.title),
        links
    )
}

#[cfg(test)]
mod tests {
    use landing_content::NavLink;

    use super::*;

    #[test]
    fn test_footer_columns_and_copyright() {
        let footer = Footer {
            text: "Made with Rust".into(),
            copyright_text: "(c) 2025 Landing".into(),
            section_link: vec![FooterSectionLink {
                id: "docs".into(),
                title: "Docs".into(),
                links: vec![NavLink {
                    id: "l1".into(),
                    text: "Guide".into(),
                    href: "/guide".into(),
                }],
            }],
        };
        let html = render_footer(&footer);
        assert!(html.contains(r#"<li><a href="/guide">Guide</a></li>"#));
        assert!(html.contains(r#"<div class="footer-bottom">(c) 2025 Landing</div>"#));
        assert!(html.contains("logo-light"));
    }
}
