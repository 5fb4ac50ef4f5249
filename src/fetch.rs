//! The fetch capability handed to page loaders.
//!
//! Loaders never talk to the network directly. The hosting framework hands
//! them something implementing [`Fetch`]; [`HttpFetcher`] is the production
//! implementation, and tests substitute a scripted one. Keeping the JSON
//! decode on [`FetchResponse`] rather than inside the fetcher lets transport
//! failures and decode failures stay distinct error kinds.

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::DataFetchError;

/// Capability for unauthenticated HTTPS GET requests.
pub trait Fetch {
    /// Fetch `url`, resolving to the raw response body.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchResponse, DataFetchError>> + Send;
}

/// A fetched response body, tagged with the URL it came from.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    url: String,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(url: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// URL this body was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DataFetchError> {
        serde_json::from_slice(&self.body).map_err(|source| DataFetchError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Production fetcher backed by a shared `reqwest` client.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Request timeout. Loaders add no resilience of their own, so an
    /// unresponsive host must fail the load here rather than hang the
    /// navigation.
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Result<Self, DataFetchError> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(DataFetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchResponse, DataFetchError>> + Send {
        let request = self.client.get(url);
        let url = url.to_owned();

        async move {
            debug!(url = %url, "fetching page dataset");

            let response = request.send().await.map_err(|source| DataFetchError::Network {
                url: url.clone(),
                source,
            })?;

            let status = response.status();
            if !status.is_success() {
                return Err(DataFetchError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            let body = response.bytes().await.map_err(|source| DataFetchError::Network {
                url: url.clone(),
                source,
            })?;

            Ok(FetchResponse::new(url, body.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_json_decodes_valid_body() {
        let response = FetchResponse::new("https://cdn.example/data.json", br#"{"type":"Topology"}"#.to_vec());
        let value: Value = response.json().unwrap();
        assert_eq!(value, json!({"type": "Topology"}));
    }

    #[test]
    fn test_json_rejects_invalid_body() {
        let response = FetchResponse::new("https://cdn.example/data.json", b"<html>503</html>".to_vec());
        let err = response.json::<Value>().unwrap_err();
        assert!(matches!(
            err,
            DataFetchError::Decode { ref url, .. } if url == "https://cdn.example/data.json"
        ));
    }

    #[test]
    fn test_response_keeps_origin_url() {
        let response = FetchResponse::new("https://cdn.example/data.json", b"[]".to_vec());
        assert_eq!(response.url(), "https://cdn.example/data.json");
        assert_eq!(response.bytes(), b"[]");
    }
}
