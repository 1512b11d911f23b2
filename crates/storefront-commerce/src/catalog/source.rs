//! Upstream post source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storefront_data::{FetchClient, FetchError};

use crate::ids::ProductId;

/// A record from the placeholder post source.
///
/// Only the fields the catalog uses are kept; anything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePost {
    pub id: ProductId,
    pub title: String,
    pub body: String,
}

/// Where raw catalog records come from.
#[async_trait]
pub trait ItemSource: Send + Sync {
    /// Fetch the full post listing.
    async fn fetch_posts(&self) -> Result<Vec<SourcePost>, FetchError>;
}

/// Post source backed by an HTTP endpoint.
pub struct HttpItemSource {
    client: FetchClient,
    path: String,
}

impl HttpItemSource {
    /// Create a source reading `path` through `client`.
    pub fn new(client: FetchClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_posts(&self) -> Result<Vec<SourcePost>, FetchError> {
        self.client
            .get(&self.path)
            .accept("application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignores_extra_fields() {
        let posts: Vec<SourcePost> = serde_json::from_str(
            r#"[{"userId": 1, "id": 1, "title": "sunt aut facere", "body": "quia et suscipit"}]"#,
        )
        .unwrap();
        assert_eq!(posts[0].id, ProductId::new(1));
        assert_eq!(posts[0].body, "quia et suscipit");
    }

    #[test]
    fn test_missing_body_is_rejected() {
        let result: Result<Vec<SourcePost>, _> =
            serde_json::from_str(r#"[{"id": 1, "title": "no body"}]"#);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_source_errors() {
        let client = FetchClient::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_secs(2));
        let source = HttpItemSource::new(client, "/posts");
        assert!(source.fetch_posts().await.is_err());
    }
}
