//! Site header content.

use serde::{Deserialize, Serialize};

use crate::query::{ContentClient, QueryResult};

/// Log label for header failures.
pub const HEADER_ERROR_LABEL: &str = "Error fetching header data";

/// GraphQL document for the site header.
pub const HEADER_DATA_QUERY: &str = r#"
  {
    header {
      links {
        id
        text
        href
      }
    }
  }
"#;

/// A navigation link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub text: String,
    pub href: String,
}

/// The site header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub links: Vec<NavLink>,
}

/// Response shape of [`HEADER_DATA_QUERY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    pub header: Header,
}

impl ContentClient {
    /// Fetch the site header.
    pub async fn get_header_data(&self) -> QueryResult<HeaderData> {
        self.query_section(HEADER_ERROR_LABEL, HEADER_DATA_QUERY)
            .await
    }
}
