//! Site-wide settings.

use serde::{Deserialize, Serialize};

/// Site name shown in titles and the hero.
pub const SITE_NAME: &str = "Landing";

/// Document language.
pub const LANGUAGE: &str = "en";

/// Environment variable holding the public site URL.
pub const BASE_URL_ENV_VAR: &str = "BASE_URL";

/// Environment variable selecting the runtime environment.
pub const ENVIRONMENT_ENV_VAR: &str = "LANDING_ENV";

/// Site URL used when [`BASE_URL_ENV_VAR`] is unset.
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Runtime environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    Development,
    /// Anything else.
    #[default]
    Production,
}

impl Environment {
    /// Only the exact name `development` selects development.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    pub fn is_dev(self) -> bool {
        self == Self::Development
    }
}

/// Public settings of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public URL of the site, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub environment: Environment,
}

fn default_base_url() -> String {
    DEFAULT_SITE_URL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            environment: Environment::default(),
        }
    }
}

impl SiteConfig {
    /// Read [`BASE_URL_ENV_VAR`] and [`ENVIRONMENT_ENV_VAR`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        config.apply_lookup(lookup);
        config
    }

    /// Override fields with variables present in `lookup`.
    pub fn apply_lookup(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(BASE_URL_ENV_VAR).filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(env) = lookup(ENVIRONMENT_ENV_VAR) {
            self.environment = Environment::from_name(Some(&env));
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
    }

    pub fn is_dev(&self) -> bool {
        self.environment.is_dev()
    }
}
