//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use landing_content::{ContentConfig, TOKEN_ENV_VAR};
use landing_site::SiteConfig;
use serde::{Deserialize, Serialize};

/// Config file names searched for when `--config` is not given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["landing.toml", ".landing.toml", "landing.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandingConfig {
    /// Content source connection.
    #[serde(default)]
    pub content: ContentConfig,

    /// Public site settings.
    #[serde(default)]
    pub site: SiteConfig,
}

impl LandingConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Parse `content` as JSON when `path` ends in `.json`, TOML otherwise.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Apply environment overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`: the content token, `BASE_URL` and `LANDING_ENV`.
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(TOKEN_ENV_VAR).filter(|t| !t.is_empty()) {
            self.content.api_token = token;
        }
        self.site.apply_lookup(lookup);
        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use landing_site::Environment;

    use super::*;

    #[test]
    fn test_parse_toml() {
        let config = LandingConfig::parse(
            Path::new("landing.toml"),
            "[content]\nrevalidate = 60\n\n[site]\nenvironment = \"production\"\n",
        )
        .unwrap();
        assert_eq!(config.content.endpoint, "https://graphql.datocms.com/");
        assert_eq!(config.content.revalidate, 60);
        assert_eq!(config.site.environment, Environment::Production);
    }

    #[test]
    fn test_parse_json() {
        let config = LandingConfig::parse(
            Path::new("landing.json"),
            r#"{"site": {"base_url": "https://example.com", "environment": "development"}}"#,
        )
        .unwrap();
        assert_eq!(config.site.base_url, "https://example.com");
        assert!(config.site.is_dev());
        assert_eq!(config.content.endpoint, "https://graphql.datocms.com/");
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = LandingConfig::parse(Path::new("bad.toml"), "[site\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse TOML config: bad.toml"));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("DATOCMS_API_TOKEN", "from-env"),
            ("BASE_URL", "https://prod.example.com"),
        ]
        .into_iter()
        .collect();

        let config = LandingConfig::default()
            .with_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.content.api_token, "from-env");
        assert_eq!(config.site.base_url, "https://prod.example.com");
        assert_eq!(config.site.environment, Environment::Production);
    }
}
