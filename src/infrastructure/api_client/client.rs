//! JSON client for the backend API.

use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::ApiError;

/// Upper bound for one request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Sends JSON requests to paths under one base URL.
///
/// Every call is made exactly once. There is no retry, backoff, or
/// cancellation beyond the timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
    timeout: Duration,
}

impl ApiClient {
    /// Creates a client with the default [`REQUEST_TIMEOUT`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a client with a custom timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| ApiError::Configuration(format!("{base_url}: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration(format!(
                "{base_url}: scheme must be http or https"
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Configuration(e.to_string()))?;

        Ok(Self {
            http,
            base: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Upper bound this client puts on each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Absolute URL for `path`, which must start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// POSTs `body` as JSON and decodes a JSON response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if no response arrived within the timeout
    /// - [`ApiError::Http`] for a non-2xx status
    /// - [`ApiError::Decode`] if a 2xx body is not a `T`
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST backend");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.decode(response).await
    }

    /// GETs `path` and decodes a JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`Self::post`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET backend");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.decode(response).await
    }

    fn network_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Network(format!("request timed out after {:?}", self.timeout))
        } else {
            ApiError::Network(err.to_string())
        }
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.network_error(e))?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                detail: error_detail(&bytes),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Extracts `detail` from an error body when it is a JSON string.
///
/// Structured details (such as a list of field errors) are not shown to
/// users, so they yield `None`.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}
