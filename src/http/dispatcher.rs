use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Result, SraError};
use crate::http::request::Request;

/// Production API base. Tests rebase onto a local mock server.
pub const BASE_URL: &str = "https://some-random-api.ml/";

/// Issues the single outbound GET per call and normalizes every outcome into
/// `Result<_, SraError>`. Stateless apart from the shared connection pool;
/// clones are cheap and safe to use concurrently.
#[derive(Clone)]
pub struct Dispatcher {
    inner: reqwest::Client,
    base: Url,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_base(BASE_URL).expect("default base URL is valid")
    }

    pub fn with_base(base: &str) -> Result<Self> {
        // A trailing slash is required for Url::join to append the endpoint
        // path instead of replacing the last base segment.
        let base = if base.ends_with('/') {
            Url::parse(base)?
        } else {
            Url::parse(&format!("{}/", base))?
        };

        Ok(Self {
            inner: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            base,
        })
    }

    fn build_url(&self, request: &Request) -> Result<Url> {
        let mut url = self.base.join(&request.path)?;
        if !request.query_params.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query_params);
        }
        Ok(url)
    }

    /// Perform one GET attempt. No retries, no backoff; callers that need
    /// resilience wrap this.
    async fn dispatch(&self, request: &Request) -> Result<reqwest::Response> {
        let url = self.build_url(request)?;
        debug!(path = %request.path, %url, "dispatching GET request");

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| SraError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SraError::Api {
                status: status.as_u16(),
                message: error_message(status, response).await,
            });
        }

        Ok(response)
    }

    /// Dispatch a request whose endpoint returns a JSON body. A 2xx body
    /// that does not deserialize into `T` is an error, not a fallback.
    pub async fn dispatch_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.dispatch(&request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| SraError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|source| SraError::Decode {
            path: request.path,
            source,
        })
    }

    /// Dispatch a request whose endpoint returns a binary body (images,
    /// gifs). The bytes are returned exactly as received.
    pub async fn dispatch_bytes(&self, request: Request) -> Result<Bytes> {
        let response = self.dispatch(&request).await?;
        response
            .bytes()
            .await
            .map_err(|e| SraError::Network(e.to_string()))
    }
}

/// Prefer the server-provided `error` field when the failure body carries
/// one, otherwise fall back to the canonical status text.
async fn error_message(status: StatusCode, response: reqwest::Response) -> String {
    let fallback = status.canonical_reason().unwrap_or("unknown status");

    match response.text().await {
        Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error")?.as_str().map(str::to_string))
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_path_onto_base() {
        let dispatcher = Dispatcher::new();
        let url = dispatcher.build_url(&Request::new("animal/dog")).unwrap();

        assert_eq!(url.as_str(), "https://some-random-api.ml/animal/dog");
    }

    #[test]
    fn test_build_url_without_params_has_no_query() {
        let dispatcher = Dispatcher::new();
        let url = dispatcher.build_url(&Request::new("joke")).unwrap();

        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_build_url_encodes_reserved_characters() {
        let dispatcher = Dispatcher::new();
        let request = Request::new("lyrics").with_query("title", "a&b=c d");
        let url = dispatcher.build_url(&request).unwrap();

        assert_eq!(url.query(), Some("title=a%26b%3Dc+d"));
    }

    #[test]
    fn test_build_url_preserves_param_order() {
        let dispatcher = Dispatcher::new();
        let request = Request::new("stringsimilarity")
            .with_query("string1", "hello")
            .with_query("string2", "hullo");
        let url = dispatcher.build_url(&request).unwrap();

        assert_eq!(url.query(), Some("string1=hello&string2=hullo"));
    }

    #[test]
    fn test_query_round_trips_through_url() {
        let dispatcher = Dispatcher::new();
        let request = Request::new("mc")
            .with_query("username", "notch")
            .with_query("page", 2);
        let url = dispatcher.build_url(&request).unwrap();

        let parsed: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            parsed,
            vec![
                ("username".into(), "notch".into()),
                ("page".into(), "2".into()),
            ]
        );
    }

    #[test]
    fn test_with_base_accepts_missing_trailing_slash() {
        let dispatcher = Dispatcher::with_base("http://127.0.0.1:9000").unwrap();
        let url = dispatcher.build_url(&Request::new("animal/cat")).unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:9000/animal/cat");
    }
}
