//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use landing_content::ContentClient;

use crate::config::{LandingConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Configuration after environment overrides.
    pub config: LandingConfig,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = if let Some(path) = config_path {
            LandingConfig::load(Path::new(path))?
        } else {
            let cwd = std::env::current_dir().context("Failed to get current directory")?;
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        let config = config.with_env();
        tracing::debug!(content = ?config.content, site = ?config.site, "loaded configuration");

        Ok(Self { config, output })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<LandingConfig> {
        let mut current = PathBuf::from(start);
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = LandingConfig::load(&config_path) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// A content client for the configured source.
    pub fn content_client(&self) -> ContentClient {
        if self.config.content.api_token.is_empty() {
            self.output
                .warn("No content token configured; queries will be unauthenticated.");
        }
        ContentClient::new(self.config.content.clone())
    }
}
