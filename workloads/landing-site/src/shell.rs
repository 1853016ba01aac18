//! Document shell wrapped around rendered sections.

use crate::config::{LANGUAGE, SITE_NAME};
use crate::html::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title, without the site suffix.
    pub title: Option<String>,
    /// Meta tags as `(name, content)`.
    pub meta: Vec<(String, String)>,
    /// Inline CSS.
    pub styles: Vec<String>,
}

impl HeadContent {
    /// Create head content with a page title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.styles.push(css.to_string());
        self
    }

    /// `Title | Site`, or the bare site name without a title.
    pub fn full_title(&self) -> String {
        match &self.title {
            Some(title) => format!("{} | {}", title, SITE_NAME),
            None => SITE_NAME.to_string(),
        }
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        html.push_str(r#"<meta charset="utf-8">"#);
        html.push('\n');
        html.push_str(&format!("<title>{}</title>\n", html_escape(&self.full_title())));

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for css in &self.styles {
            html.push_str(&format!("<style>{}</style>\n", css));
        }

        html
    }
}

/// A full HTML document around a body.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self { head }
    }

    /// Render the document up to and including the opening `<body>`.
    pub fn render_opening(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}</head>\n<body>\n",
            LANGUAGE,
            self.head.render()
        )
    }

    /// Render the closing part of the document.
    pub fn render_closing(&self) -> String {
        "</body>\n</html>".to_string()
    }

    /// Wrap `body` into a complete document.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}{}\n{}", self.render_opening(), body, self.render_closing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_title_template() {
        assert_eq!(HeadContent::new("Home").full_title(), "Home | Landing");
        assert_eq!(HeadContent::default().full_title(), "Landing");
    }

    #[test]
    fn test_shell_wraps_body() {
        let shell = Shell::new(HeadContent::new("Home").with_meta("csp-nonce", "n\"1"));
        let html = shell.wrap("<main></main>");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains(r#"<meta name="csp-nonce" content="n&quot;1">"#));
        assert!(html.contains("<body>\n<main></main>\n</body>\n</html>"));
    }
}
