//! HTTP client utilities for the storefront.
//!
//! Wraps `reqwest` with a base URL, an optional timeout and a response type
//! that buffers the body so callers can decide how to decode it.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("https://jsonplaceholder.typicode.com");
//!
//! let posts: Vec<Post> = client
//!     .get("/posts")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

use std::time::Duration;

/// HTTP client for making outbound requests.
#[derive(Debug, Clone)]
pub struct FetchClient {
    inner: reqwest::Client,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
            base_url: None,
            timeout: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Bound every request by a total timeout. Requests are unbounded by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolve a path against the base URL.
    pub fn resolve_url(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !(url.starts_with("http://") || url.starts_with("https://")) => {
                format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    url.trim_start_matches('/')
                )
            }
            _ => url.to_string(),
        }
    }

    /// Create a GET request.
    pub fn get(&self, url: impl AsRef<str>) -> RequestBuilder {
        let mut builder = RequestBuilder::new(
            self.inner.clone(),
            reqwest::Method::GET,
            self.resolve_url(url.as_ref()),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let client = FetchClient::new().with_base_url("https://api.example.com/");
        assert_eq!(
            client.resolve_url("/posts"),
            "https://api.example.com/posts"
        );
        assert_eq!(client.resolve_url("posts"), "https://api.example.com/posts");
    }

    #[test]
    fn test_absolute_url_bypasses_base() {
        let client = FetchClient::new().with_base_url("https://api.example.com");
        assert_eq!(
            client.resolve_url("https://other.example.com/posts"),
            "https://other.example.com/posts"
        );
    }

    #[test]
    fn test_no_base_url() {
        let client = FetchClient::new();
        assert_eq!(client.resolve_url("/posts"), "/posts");
    }

    #[tokio::test]
    async fn test_get_goes_through_base_url() {
        let client = FetchClient::new()
            .with_base_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let result = client.get("/posts").accept("application/json").send().await;
        assert!(matches!(
            result,
            Err(FetchError::RequestError(_)) | Err(FetchError::Timeout)
        ));
    }
}
