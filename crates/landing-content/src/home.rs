//! Home page content.

use serde::{Deserialize, Serialize};

use crate::query::{ContentClient, QueryResult};

/// Log label for home page failures.
pub const HOME_ERROR_LABEL: &str = "Error fetching page data";

/// GraphQL document for the home page.
pub const HOME_DATA_QUERY: &str = r#"
  {
    home {
      hero {
        description
      }
      stats {
        items {
          id
          title
          subtitle
        }
      }
      stack {
        title
        description
        items {
          id
          image {
            alt
            url
            height
            width
          }
          title
          list {
            items {
              id
              label
            }
          }
        }
      }
      benefits {
        title
        description
        items {
          image {
            alt
            url
            height
            width
          }
          id
          title
          description
        }
      }
      getStarted {
        title
        description
        commands {
          id
          command
        }
      }
    }
  }
"#;

/// An uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    pub url: String,
    pub height: u32,
    pub width: u32,
}

impl Image {
    /// Alt text, falling back to `fallback` when the CMS leaves it empty.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.is_empty())
            .unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub items: Vec<StatsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackListItem {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackList {
    pub items: Vec<StackListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackItem {
    pub id: String,
    pub image: Image,
    pub title: String,
    pub list: StackList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub title: String,
    pub description: String,
    pub items: Vec<StackItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenefitsItem {
    pub id: String,
    pub image: Image,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Benefits {
    pub title: String,
    pub description: String,
    pub items: Vec<BenefitsItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetStartedCommand {
    pub id: String,
    pub command: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetStarted {
    pub title: String,
    pub description: String,
    pub commands: Vec<GetStartedCommand>,
}

/// All sections of the home page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub hero: Hero,
    pub stats: Stats,
    pub stack: Stack,
    pub benefits: Benefits,
    pub get_started: GetStarted,
}

/// Response shape of [`HOME_DATA_QUERY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeData {
    pub home: Home,
}

impl ContentClient {
    /// Fetch the home page sections.
    pub async fn get_home_data(&self) -> QueryResult<HomeData> {
        self.query_section(HOME_ERROR_LABEL, HOME_DATA_QUERY).await
    }
}
