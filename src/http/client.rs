//! Request dispatcher
//!
//! Performs exactly one HTTP exchange per call:
//! - Authentication and user agent come from the shared session
//! - Body encoding (JSON, raw, multipart) is chosen by [`RequestBody`]
//! - Non-2xx responses and transport failures become typed errors

use super::rate_limit::RateLimiter;
use crate::auth::{self, BearerToken};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::Method;
use bytes::Bytes;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Body of a single request
#[derive(Debug, Default)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// Serialized JSON document, sent as `application/json`
    Json(Vec<u8>),
    /// Raw payload with an explicit content type
    Raw { bytes: Bytes, content_type: String },
    /// `multipart/form-data`; the boundary is computed by reqwest
    Multipart(Form),
}

impl RequestBody {
    /// Serialize a value as a JSON body
    ///
    /// Field order of the value is kept as serialized.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }

    /// Raw payload
    pub fn raw(bytes: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self::Raw {
            bytes: bytes.into(),
            content_type: content_type.into(),
        }
    }

    /// Check if there is no body
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Configuration for a single request
#[derive(Debug, Default)]
pub struct RequestConfig {
    /// Extra headers; these replace headers set by the body encoding
    pub headers: HashMap<String, String>,
    /// Request body
    pub body: RequestBody,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the body
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }

    /// Serialize a value as JSON body
    pub fn json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        Ok(self.body(RequestBody::json(value)?))
    }

    /// Set a multipart form body
    #[must_use]
    pub fn multipart(self, form: Form) -> Self {
        self.body(RequestBody::Multipart(form))
    }
}

/// Authenticated HTTP session against one API root
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    root_url: String,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Build the session described by `config`
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let headers =
            auth::session_headers(&BearerToken::new(config.token.as_str()), &config.user_agent)?;

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::Request)?;

        Ok(Self {
            client,
            root_url: config.root_url.trim_end_matches('/').to_string(),
            rate_limiter: config.rate_limit.as_ref().map(RateLimiter::new),
        })
    }

    /// API root this session talks to
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    /// Perform one request and return the raw response
    ///
    /// `path` already carries any query string. Only 2xx responses are
    /// returned; everything else is an error.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let url = self.build_url(path);

        let mut req = self.client.request(method.into(), &url);
        req = match config.body {
            RequestBody::Empty => req,
            RequestBody::Json(bytes) => req
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes),
            RequestBody::Raw {
                bytes,
                content_type,
            } => req.header(CONTENT_TYPE, content_type).body(bytes),
            RequestBody::Multipart(form) => req.multipart(form),
        };

        let mut request = req.build().map_err(Error::Request)?;
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|_| Error::InvalidHeader { name: key.clone() })?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidHeader { name: key.clone() })?;
            request.headers_mut().insert(name, value);
        }

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        debug!("Sending request: {} {}", method, url);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Connection)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(
                        error = %e,
                        "Failed to read error response body: {} {}", method, url
                    );
                    String::new()
                }
            };
            warn!(
                status = status.as_u16(),
                "Request failed: {} {}", method, url
            );
            return Err(Error::server(status.as_u16(), body));
        }

        debug!(status = status.as_u16(), "Request succeeded: {} {}", method, url);
        Ok(response)
    }

    /// Make a request and parse the JSON response
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let body = self.request_bytes(method, path, config).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a request and discard the response body
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<()> {
        self.request_bytes(method, path, config).await?;
        Ok(())
    }

    /// Make a request and return the response body as bytes
    pub async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<Bytes> {
        let response = self.request(method, path, config).await?;
        response.bytes().await.map_err(Error::Connection)
    }

    /// Make a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request_json(Method::GET, path, RequestConfig::new())
            .await
    }

    /// POST a JSON body and parse the JSON response
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request_json(Method::POST, path, RequestConfig::new().json(body)?)
            .await
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.root_url)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("root_url", &self.root_url)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
