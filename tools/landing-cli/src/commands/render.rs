//! Page rendering commands.

use std::fs;

use anyhow::{Context as _, Result};
use landing_site::{render_home_page, render_not_found_page, PageOptions};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let client = ctx.content_client();
    let options = page_options(&args, ctx);

    let spinner = ctx.output.spinner("Fetching content...");
    let html = render_home_page(&client, &options).await;
    spinner.finish_and_clear();

    emit(&args, &options, &html, ctx)
}

/// Run the not-found command.
pub async fn run_not_found(args: RenderArgs, ctx: &Context) -> Result<()> {
    let options = page_options(&args, ctx);
    let html = render_not_found_page(&options);
    emit(&args, &options, &html, ctx)
}

fn page_options(args: &RenderArgs, ctx: &Context) -> PageOptions {
    let mut options = PageOptions::for_site(&ctx.config.site);
    options.close_webview = !args.no_close_webview;
    options
}

fn emit(args: &RenderArgs, options: &PageOptions, html: &str, ctx: &Context) -> Result<()> {
    match &options.csp {
        Some(csp) => {
            let (name, value) = csp.header();
            ctx.output.debug(&format!("{}: {}", name, value));
        }
        None => ctx.output.debug("Development mode: no Content-Security-Policy"),
    }

    match &args.out {
        Some(path) => {
            fs::write(path, html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            ctx.output
                .success(&format!("Wrote {} bytes to {}", html.len(), path.display()));
        }
        None => ctx.output.document(html),
    }

    Ok(())
}
