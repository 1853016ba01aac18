//! Landing site - CMS-driven home page assembly.
//!
//! This workload provides:
//! - Section renderers fed by [`landing_content`] models
//! - Concurrent fetching of header, footer and home content, omitting
//!   sections whose queries fail
//! - `sitemap.xml` and `robots.txt` generation
//! - A nonce-based Content Security Policy outside development
//! - The close-webview affordance for the embedding native shell

mod bridge;
mod config;
mod csp;
mod html;
mod page;
pub mod sections;
mod seo;
mod shell;

pub use bridge::{BridgeAction, BRIDGE_INTERFACE};
pub use config::{
    Environment, SiteConfig, BASE_URL_ENV_VAR, DEFAULT_SITE_URL, ENVIRONMENT_ENV_VAR, LANGUAGE,
    SITE_NAME,
};
pub use csp::{ContentSecurityPolicy, CSP_HEADER, NONCE_META_NAME};
pub use html::html_escape;
pub use page::{render_home, render_home_page, render_not_found_page, PageOptions};
pub use seo::{robots_txt, sitemap_xml};
pub use shell::{HeadContent, Shell};
