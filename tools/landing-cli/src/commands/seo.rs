//! Crawler document commands.

use anyhow::Result;
use chrono::Utc;
use landing_site::{robots_txt, sitemap_xml};

use crate::context::Context;

/// Print `sitemap.xml`.
pub fn sitemap(ctx: &Context) -> Result<()> {
    ctx.output
        .document(&sitemap_xml(&ctx.config.site.base_url, Utc::now()));
    Ok(())
}

/// Print `robots.txt`.
pub fn robots(ctx: &Context) -> Result<()> {
    ctx.output.document(&robots_txt(&ctx.config.site.base_url));
    Ok(())
}
