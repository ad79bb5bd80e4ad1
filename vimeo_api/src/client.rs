//! HTTP client for the Vimeo API.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    query::add_options,
    transport::{Config, HttpTransport, RawResponse, Transport, TransportRequest},
    types::{normalize, ListEnvelope, Pagination},
    users::UsersService,
    Error,
};

/// Metadata of one completed call.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    /// Present only for list responses that carried paging fields.
    pub pagination: Option<Pagination>,
}

impl Response {
    fn from_raw(raw: &RawResponse) -> Self {
        Self {
            status: raw.status,
            headers: raw.headers.clone(),
            pagination: None,
        }
    }
}

/// Client for the Vimeo API.
///
/// Holds nothing but a shared [`Transport`]; cloning is cheap and every
/// operation builds its own request and dispatches it exactly once.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client over [`HttpTransport`] with the given settings.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self::with_transport(HttpTransport::new(&config)?))
    }

    /// Creates an unauthenticated client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(Config::default().with_base_url(base_url))
    }

    /// Creates a client over any transport.
    pub fn with_transport<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// User-centric operations.
    pub fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Sends one request and checks its status.
    ///
    /// A body is attached only for PATCH, POST and PUT. Non-2xx responses
    /// become [`Error::HttpStatus`] with the raw body.
    pub async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let body = match body {
            Some(body) if carries_body(&method) => Some(serde_json::to_value(body).map_err(|e| {
                tracing::error!("Failed to serialize request body: {}", e);
                Error::Encoding {
                    field: "body".to_string(),
                    reason: e.to_string(),
                }
            })?),
            _ => None,
        };

        tracing::debug!("{} {}", method, path);
        let raw = self
            .transport
            .send(TransportRequest {
                method: method.clone(),
                path: path.to_string(),
                body,
            })
            .await?;
        tracing::debug!("{} {} => {}", method, path, raw.status);

        if !raw.is_success() {
            let body = raw.text();
            tracing::error!(
                "Request failed with status {}: {}",
                raw.status,
                truncate_body(&body)
            );
            return Err(Error::HttpStatus {
                status: raw.status,
                body,
            });
        }
        Ok(raw)
    }

    /// Dispatches and decodes a single entity.
    pub async fn fetch<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(T, Response), Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let raw = self.dispatch(method, path, body).await?;
        let parsed = decode::<T>(&raw)?;
        Ok((parsed, Response::from_raw(&raw)))
    }

    /// Encodes `options` onto `path`, issues a GET and decodes a list envelope.
    pub async fn fetch_list<T, Q>(
        &self,
        path: &str,
        options: Option<&Q>,
    ) -> Result<(Vec<T>, Response), Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let path = add_options(path, options)?;
        let raw = self.dispatch::<()>(Method::GET, &path, None).await?;
        let envelope = decode::<ListEnvelope<T>>(&raw)?;

        let mut response = Response::from_raw(&raw);
        response.pagination = normalize(&envelope.pagination);
        Ok((envelope.data, response))
    }

    /// Issues a body-less PUT/DELETE and returns only the response metadata.
    pub async fn toggle(&self, method: Method, path: &str) -> Result<Response, Error> {
        let raw = self.dispatch::<()>(method, path, None).await?;
        Ok(Response::from_raw(&raw))
    }
}

fn carries_body(method: &Method) -> bool {
    *method == Method::PATCH || *method == Method::POST || *method == Method::PUT
}

fn decode<T: DeserializeOwned>(raw: &RawResponse) -> Result<T, Error> {
    serde_json::from_slice::<T>(&raw.body).map_err(|e| {
        let body = raw.text();
        tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
        Error::Decode { source: e, body }
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_mutating_methods_carry_bodies() {
        assert!(carries_body(&Method::PATCH));
        assert!(carries_body(&Method::POST));
        assert!(carries_body(&Method::PUT));
        assert!(!carries_body(&Method::GET));
        assert!(!carries_body(&Method::DELETE));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
        assert!(out.len() <= 2000 + "...[truncated]".len());
        assert_eq!(truncate_body("short"), "short");
    }
}
