//! CLI command implementations.

pub mod check;
pub mod render;
pub mod seo;

use std::path::PathBuf;

use clap::Args;

/// Arguments for the render commands.
#[derive(Args)]
pub struct RenderArgs {
    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Omit the close-webview button.
    #[arg(long)]
    pub no_close_webview: bool,
}

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Exit successfully even when a section fails.
    #[arg(long)]
    pub allow_failures: bool,
}
