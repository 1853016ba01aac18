//! Landing CLI - Command line tool for the landing site.
//!
//! Commands:
//! - `landing render` - Render the home page from live CMS content
//! - `landing not-found` - Render the 404 page
//! - `landing sitemap` - Print `sitemap.xml`
//! - `landing robots` - Print `robots.txt`
//! - `landing check` - Query every content section and report the outcome

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs};

/// Landing CLI - Render and check the CMS-driven landing site
#[derive(Parser)]
#[command(name = "landing")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the home page
    Render(RenderArgs),

    /// Render the 404 page
    NotFound(RenderArgs),

    /// Print the sitemap
    Sitemap,

    /// Print robots.txt
    Robots,

    /// Query every content section and report success or failure
    Check(CheckArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::NotFound(args) => commands::render::run_not_found(args, &ctx).await,
        Commands::Sitemap => commands::seo::sitemap(&ctx),
        Commands::Robots => commands::seo::robots(&ctx),
        Commands::Check(args) => commands::check::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` or by `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
