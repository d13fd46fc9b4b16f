//! HTTP client bound to a transport.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{FetchError, HttpTransport, Method, RequestBuilder, Response, Transport};

/// HTTP client for outbound requests.
///
/// Holds an optional base URL and default headers; the actual I/O is done by
/// the [`Transport`] it was built with.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers.keys())
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client backed by [`HttpTransport`].
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Create a client backed by an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            transport,
        }
    }

    /// Prepend `base_url` to every relative request path.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !is_absolute(&url) => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut builder = RequestBuilder::new(Method::Get, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder {
            builder,
            transport: Arc::clone(&self.transport),
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// A request builder bound to a client's transport.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
    transport: Arc<dyn Transport>,
}

impl ClientRequestBuilder {
    /// Append a query-string parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        tracing::trace!(
            method = self.builder.method.as_str(),
            url = %self.builder.url,
            "sending request"
        );
        self.transport.send(self.builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<RequestBuilder>>,
    }

    #[async_trait]
    impl Transport for Recording {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request);
            Ok(Response::json_ok(b"{}".to_vec()))
        }
    }

    #[tokio::test]
    async fn test_base_url_and_default_headers() {
        let transport = Arc::new(Recording::default());
        let client = FetchClient::with_transport(transport.clone())
            .with_base_url("https://api.example.com/")
            .with_default_header("Accept", "application/json");

        client.get("/items").query("q", "1").send().await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url(), "https://api.example.com/items");
        assert_eq!(seen[0].header_value("Accept"), Some("application/json"));
        assert_eq!(seen[0].query_value("q"), Some("1"));
    }

    #[tokio::test]
    async fn test_absolute_url_ignores_base() {
        let transport = Arc::new(Recording::default());
        let client =
            FetchClient::with_transport(transport.clone()).with_base_url("https://api.example.com");

        client.get("https://other.example.com/x").send().await.unwrap();

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].url(), "https://other.example.com/x");
        assert_eq!(seen[0].method(), Method::Get);
    }
}
