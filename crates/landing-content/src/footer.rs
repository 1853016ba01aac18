//! Site footer content.

use serde::{Deserialize, Serialize};

use crate::header::NavLink;
use crate::query::{ContentClient, QueryResult};

/// Log label for footer failures.
pub const FOOTER_ERROR_LABEL: &str = "Error fetching footer data";

/// GraphQL document for the site footer.
pub const FOOTER_DATA_QUERY: &str = r#"
  {
    footer {
      text
      copyrightText
      sectionLink {
        id
        title
        links {
          id
          text
          href
        }
      }
    }
  }
"#;

/// A titled group of footer links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSectionLink {
    pub id: String,
    pub title: String,
    pub links: Vec<NavLink>,
}

/// The site footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub text: String,
    pub copyright_text: String,
    pub section_link: Vec<FooterSectionLink>,
}

/// Response shape of [`FOOTER_DATA_QUERY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterData {
    pub footer: Footer,
}

impl ContentClient {
    /// Fetch the site footer.
    pub async fn get_footer_data(&self) -> QueryResult<FooterData> {
        self.query_section(FOOTER_ERROR_LABEL, FOOTER_DATA_QUERY)
            .await
    }
}

#[cfg(test)]
mod tests {
    use landing_http::HttpError;
    use serde_json::json;
    use tracing_test::traced_test;

    use crate::query::testing::{client, Reply};
    use crate::query::QueryResult;

    #[tokio::test]
    async fn test_get_footer_data_success() {
        let (client, _) = client(Reply::Json(
            200,
            json!({"data": {"footer": {
                "text": "Built with care",
                "copyrightText": "(c) 2025",
                "sectionLink": [{
                    "id": "s1",
                    "title": "Docs",
                    "links": [{"id": "l1", "text": "Guide", "href": "/guide"}]
                }]
            }}}),
        ));

        let result = client.get_footer_data().await;
        assert!(result.is_success());
        let footer = result.into_data().unwrap().footer;
        assert_eq!(footer.copyright_text, "(c) 2025");
        assert_eq!(footer.section_link[0].links[0].text, "Guide");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_get_footer_data_error_is_logged() {
        let (client, _) = client(Reply::Fail(HttpError::Network("boom".into())));

        let result = client.get_footer_data().await;
        assert_eq!(result, QueryResult::Failure("boom".to_string()));
        assert!(logs_contain("Error fetching footer data"));
        assert!(logs_contain("boom"));
    }

    #[tokio::test]
    async fn test_get_footer_data_graphql_error() {
        let (client, _) = client(Reply::Json(
            200,
            json!({"errors": [{"message": "Field 'footer' doesn't exist"}]}),
        ));
        assert_eq!(
            client.get_footer_data().await.error(),
            Some("Field 'footer' doesn't exist")
        );
    }

    #[tokio::test]
    async fn test_get_footer_data_graphql_error_with_partial_data() {
        let (client, _) = client(Reply::Json(
            200,
            json!({
                "data": {"footer": null},
                "errors": [{"message": "Not authorized to read footer"}]
            }),
        ));
        assert_eq!(
            client.get_footer_data().await.error(),
            Some("Not authorized to read footer")
        );
    }

    #[tokio::test]
    async fn test_get_footer_data_panic_is_unknown_error() {
        let (client, _) = client(Reply::Panic("exploded"));
        assert_eq!(client.get_footer_data().await.error(), Some("Unknown error"));
    }
}
