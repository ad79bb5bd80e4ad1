//! The HTTP seam: the [`Transport`] trait and its reqwest implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Method;
use url::Url;

use crate::Error;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.vimeo.com";

/// Versioned media type the API expects in `Accept`.
const VIMEO_ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";

/// One outbound request: method, path relative to the API root (optionally
/// with a query string), and an optional JSON body.
#[derive(Clone, Debug)]
pub struct TransportRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// A response as received, before any status or body interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, lossily decoded.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs exactly one HTTP exchange per call.
///
/// Implementations own base URL, authentication and TLS. They return
/// [`Error::Transport`] only when no response was obtained; any received
/// status, including 4xx/5xx, is returned as a [`RawResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, Error>;
}

/// Settings for [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct Config {
    /// API root. Defaults to `https://api.vimeo.com`.
    pub base_url: String,
    /// OAuth bearer token. Without one only public resources are reachable.
    pub access_token: Option<String>,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            user_agent: format!("vimeo_api/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(token.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`Transport`] backed by a pooled `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, Error> {
        // A trailing slash makes `Url::join` append rather than replace the last segment.
        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&base).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::Config(format!("invalid base URL `{}`: {}", config.base_url, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(VIMEO_ACCEPT));
        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("bearer {}", token))
                .map_err(|_| Error::Config("access token contains invalid characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Config(e.to_string())
            })?;

        Ok(Self { client, base_url })
    }

    fn url_for(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(Error::transport)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, Error> {
        let url = self.url_for(&request.path)?;
        let mut builder = self.client.request(request.method, url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::transport(e)
        })?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::transport(e)
        })?;

        Ok(RawResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}
