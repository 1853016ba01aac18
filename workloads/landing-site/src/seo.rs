//! Crawler documents: `sitemap.xml` and `robots.txt`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::html::xml_escape;

/// Sitemap with a single daily-changing entry for the home page.
pub fn sitemap_xml(base_url: &str, now: DateTime<Utc>) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
<url>
<loc>{}/</loc>
<lastmod>{}</lastmod>
<changefreq>daily</changefreq>
<priority>1</priority>
</url>
</urlset>
"#,
        xml_escape(base_url.trim_end_matches('/')),
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Robots rules allowing every crawler everywhere.
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-Agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}
