//! Errors surfaced by page data loading.

use thiserror::Error;

/// Failure while fetching or decoding a page's external dataset.
///
/// Nothing in this crate catches or recovers from these: loaders propagate
/// them unchanged and the hosting framework renders a page-load failure.
#[derive(Debug, Error)]
pub enum DataFetchError {
    #[error("network error while fetching `{url}`")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for `{url}` returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("response body from `{url}` is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to construct HTTP client")]
    Client(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = DataFetchError::Status {
            url: "https://cdn.example/countries.json".to_string(),
            status: 404,
        };
        let display = format!("{err}");
        assert!(display.contains("HTTP 404"));
        assert!(display.contains("cdn.example/countries.json"));
    }

    #[test]
    fn test_decode_error_chains_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = DataFetchError::Decode {
            url: "https://cdn.example/countries.json".to_string(),
            source,
        };
        assert!(format!("{err}").contains("not valid JSON"));
        assert!(err.source().is_some());
    }
}
