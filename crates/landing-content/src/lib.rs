//! Content queries for the landing site.
//!
//! Each section of the site has a caller on [`ContentClient`] that runs a
//! fixed GraphQL document against the CMS and returns a [`QueryResult`]
//! instead of an error:
//!
//! ```rust,ignore
//! use landing_content::{ContentClient, ContentConfig};
//!
//! let client = ContentClient::new(ContentConfig::from_env()?);
//! match client.get_footer_data().await {
//!     QueryResult::Success(data) => render_footer(&data.footer),
//!     QueryResult::Failure(_) => String::new(),
//! }
//! ```

mod config;
pub mod footer;
pub mod header;
pub mod home;
mod query;

pub use config::{
    ConfigError, ContentConfig, DEFAULT_ENDPOINT, DEFAULT_REVALIDATE_SECS, TOKEN_ENV_VAR,
};
pub use footer::{Footer, FooterData, FooterSectionLink};
pub use header::{Header, HeaderData, NavLink};
pub use home::{
    Benefits, BenefitsItem, GetStarted, GetStartedCommand, Hero, Home, HomeData, Image, Stack,
    StackItem, StackList, StackListItem, Stats, StatsItem,
};
pub use query::{guard, ContentClient, QueryResult, UNKNOWN_ERROR};
