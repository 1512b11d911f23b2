//! HTTP request builder.

use std::collections::HashMap;
use std::time::Duration;

use crate::{FetchError, Response};

/// A builder for a single outbound request.
#[derive(Debug)]
pub struct RequestBuilder {
    client: reqwest::Client,
    method: reqwest::Method,
    url: String,
    headers: HashMap<String, String>,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    pub(crate) fn new(client: reqwest::Client, method: reqwest::Method, url: String) -> Self {
        Self {
            client,
            method,
            url,
            headers: HashMap::new(),
            timeout: None,
        }
    }

    fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Bound this request by a total timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send the request and buffer the response body.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(method = %self.method, url = %self.url, "sending request");

        let mut request = self.client.request(self.method, &self.url);
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "received response");
        Ok(Response::new(status, body))
    }
}
