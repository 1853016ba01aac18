//! Page assembly.

use landing_content::{ContentClient, Home, QueryResult};

use crate::config::SiteConfig;
use crate::csp::{ContentSecurityPolicy, NONCE_META_NAME};
use crate::sections::{
    render_benefits, render_close_webview, render_footer, render_get_started, render_header,
    render_hero, render_not_found, render_stack, render_stats, NOT_FOUND_TITLE,
};
use crate::shell::{HeadContent, Shell};

const HOME_TITLE: &str = "Home";
const HOME_DESCRIPTION: &str = "This is home page of the application.";
const NOT_FOUND_DESCRIPTION: &str = "Sorry, we could not find the page you were looking for...";

const LANDING_STYLES: &str = "body{margin:0;font-family:system-ui,sans-serif}\
main{min-height:100vh}\
.site-header{position:sticky;top:0;z-index:50}\
.close-webview{position:fixed;bottom:3.5rem;right:1rem;z-index:50}";

/// Per-response rendering options.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Policy whose nonce is written into the page, if any.
    pub csp: Option<ContentSecurityPolicy>,
    /// Whether to render the close-webview button.
    pub close_webview: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            csp: None,
            close_webview: true,
        }
    }
}

impl PageOptions {
    /// Options for `config`, generating a fresh policy outside development.
    pub fn for_site(config: &SiteConfig) -> Self {
        Self {
            csp: ContentSecurityPolicy::for_site(config),
            ..Self::default()
        }
    }

    pub fn nonce(&self) -> Option<&str> {
        self.csp.as_ref().map(ContentSecurityPolicy::nonce)
    }

    fn head(&self, title: &str, description: &str) -> HeadContent {
        let mut head = HeadContent::new(title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", description)
            .with_style(LANDING_STYLES);
        if let Some(nonce) = self.nonce() {
            head = head.with_meta(NONCE_META_NAME, nonce);
        }
        head
    }
}

/// Render the main content of the home page.
pub fn render_home(home: &Home) -> String {
    [
        render_hero(&home.hero),
        render_stats(&home.stats),
        render_stack(&home.stack),
        render_benefits(&home.benefits),
        render_get_started(&home.get_started),
    ]
    .join("\n")
}

/// Fetch every section concurrently and render the home page.
///
/// A failed section is omitted; a failed home query leaves `<main>` empty
/// while header and footer still render.
pub async fn render_home_page(client: &ContentClient, options: &PageOptions) -> String {
    let (header, footer, home) = futures::join!(
        client.get_header_data(),
        client.get_footer_data(),
        client.get_home_data()
    );

    let header = section_or_skip("header", header, |data| render_header(&data.header));
    let main = section_or_skip("home", home, |data| render_home(&data.home));
    let footer = section_or_skip("footer", footer, |data| render_footer(&data.footer));

    let shell = Shell::new(options.head(HOME_TITLE, HOME_DESCRIPTION));
    shell.wrap(&layout(&header, &main, &footer, options))
}

/// Render the 404 page.
pub fn render_not_found_page(options: &PageOptions) -> String {
    let head = options
        .head(NOT_FOUND_TITLE, NOT_FOUND_DESCRIPTION)
        .with_meta("robots", "noindex, nofollow");
    Shell::new(head).wrap(&layout("", &render_not_found(), "", options))
}

fn layout(header: &str, main: &str, footer: &str, options: &PageOptions) -> String {
    let mut body = String::new();
    if !header.is_empty() {
        body.push_str(header);
        body.push('\n');
    }
    body.push_str("<main>\n");
    body.push_str(main);
    body.push_str("\n</main>");
    if !footer.is_empty() {
        body.push('\n');
        body.push_str(footer);
    }
    if options.close_webview {
        body.push('\n');
        body.push_str(&render_close_webview(options.nonce()));
    }
    body
}

fn section_or_skip<T>(
    name: &str,
    result: QueryResult<T>,
    render: impl FnOnce(&T) -> String,
) -> String {
    match result {
        QueryResult::Success(data) => render(&data),
        QueryResult::Failure(error) => {
            tracing::warn!(section = name, error = %error, "omitting section");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use landing_content::{ContentClient, ContentConfig};
    use landing_http::{
        Fetch, FetchInit, FetchRestAdapter, GraphQlClient, HttpError, Response, RestClient,
    };
    use serde_json::{json, Value};
    use tracing_test::traced_test;

    use super::*;

    /// Answers each section query from a fixed table; `None` fails the query.
    struct SectionFetch {
        header: Option<Value>,
        footer: Option<Value>,
        home: Option<Value>,
    }

    #[async_trait]
    impl Fetch for SectionFetch {
        async fn fetch(&self, _url: &str, init: FetchInit) -> Result<Response, HttpError> {
            let body = init.body.unwrap_or_default();
            let data = if body.contains("header") {
                &self.header
            } else if body.contains("footer") {
                &self.footer
            } else {
                &self.home
            };
            match data {
                Some(data) => Ok(Response::new(200, "OK", json!({ "data": data }).to_string())),
                None => Err(HttpError::Network("connection reset".into())),
            }
        }
    }

    fn client(fetch: SectionFetch) -> ContentClient {
        let rest = RestClient::with_adapter(Arc::new(FetchRestAdapter::with_fetch(fetch)));
        ContentClient::with_graphql(GraphQlClient::with_rest(rest), ContentConfig::new("t"))
    }

    fn header() -> Value {
        json!({"header": {"links": [{"id": "1", "text": "Stack", "href": "#stack"}]}})
    }

    fn footer() -> Value {
        json!({"footer": {"text": "Bye", "copyrightText": "(c) 2025", "sectionLink": []}})
    }

    fn home() -> Value {
        json!({"home": {
            "hero": {"description": "Hello"},
            "stats": {"items": []},
            "stack": {"title": "Stack", "description": "", "items": []},
            "benefits": {"title": "Benefits", "description": "", "items": []},
            "getStarted": {"title": "Go", "description": "", "commands": [{"id": "c", "command": "cargo run"}]}
        }})
    }

    #[tokio::test]
    async fn test_render_home_page_all_sections() {
        let client = client(SectionFetch {
            header: Some(header()),
            footer: Some(footer()),
            home: Some(home()),
        });
        let options = PageOptions {
            csp: Some(ContentSecurityPolicy::with_nonce("n0nce")),
            close_webview: true,
        };

        let html = render_home_page(&client, &options).await;

        assert!(html.contains("<title>Home | Landing</title>"));
        assert!(html.contains(r#"<meta name="csp-nonce" content="n0nce">"#));
        assert!(html.contains(r#"<script nonce="n0nce">"#));
        let header_at = html.find(r#"data-section="header""#).unwrap();
        let hero_at = html.find(r#"data-section="hero""#).unwrap();
        let footer_at = html.find(r#"data-section="footer""#).unwrap();
        assert!(header_at < hero_at && hero_at < footer_at);
        assert!(html.contains("<code>cargo run</code>"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_failed_sections_are_omitted() {
        let client = client(SectionFetch {
            header: None,
            footer: Some(footer()),
            home: None,
        });
        let options = PageOptions {
            close_webview: false,
            ..PageOptions::default()
        };

        let html = render_home_page(&client, &options).await;

        assert!(!html.contains(r#"data-section="header""#));
        assert!(!html.contains(r#"data-section="hero""#));
        assert!(html.contains("<main>\n\n</main>"));
        assert!(html.contains(r#"data-section="footer""#));
        assert!(!html.contains(r#"id="close-webview""#));
        assert!(!html.contains("csp-nonce"));
        assert!(logs_contain("omitting section"));
        assert!(logs_contain("connection reset"));
    }

    #[test]
    fn test_not_found_page() {
        let html = render_not_found_page(&PageOptions::default());
        assert!(html.contains("<title>Error 404 - Page Not Found | Landing</title>"));
        assert!(html.contains(r#"<meta name="robots" content="noindex, nofollow">"#));
        assert!(html.contains("Page Not Found"));
    }

    #[test]
    fn test_page_options_for_dev_site_have_no_policy() {
        let config = SiteConfig {
            environment: crate::config::Environment::Development,
            ..SiteConfig::default()
        };
        assert!(PageOptions::for_site(&config).csp.is_none());
    }
}
