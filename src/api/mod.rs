//! Triage API client
//!
//! [`TriageClient`] maps each API operation onto a single dispatcher call.
//! Listing operations return a [`Paginator`] instead; they issue no request
//! until the first record is asked for.
//!
//! ```rust,ignore
//! use triage_client::{SubmitOptions, TriageClient};
//!
//! let client = TriageClient::new("<token>")?;
//! let sample = client
//!     .submit_sample_url("http://example.com", &SubmitOptions::default())
//!     .await?;
//!
//! let mut owned = client.owned_samples(None);
//! while let Some(sample) = owned.next().await? {
//!     println!("{}", sample["id"]);
//! }
//! ```

mod events;
mod profiles;
mod reports;
mod samples;

pub use events::SampleEvents;
pub use samples::SubmitOptions;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::{PageRequest, Paginator};

/// Client for the Triage sandbox API
///
/// Cloning is cheap; clones share one authenticated session.
#[derive(Debug, Clone)]
pub struct TriageClient {
    http: HttpClient,
    page_size: u32,
}

impl TriageClient {
    /// Client for the public API
    ///
    /// The token is not validated against the service.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(&ClientConfig::new(token))
    }

    /// Client for a non-standard API root (private cloud, on-premise)
    pub fn with_root_url(token: impl Into<String>, root_url: impl Into<String>) -> Result<Self> {
        let mut config = ClientConfig::new(token);
        config.root_url = root_url.into();
        Self::with_config(&config)
    }

    /// Client from a full configuration
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            page_size: config.page_size,
        })
    }

    /// Client configured from `TRIAGE_TOKEN` / `TRIAGE_URL`
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env()?)
    }

    /// The underlying dispatcher, for endpoints not wrapped here
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    fn page_request(&self, path: &str, limit: Option<u32>) -> PageRequest {
        PageRequest::new(path).limit(limit.unwrap_or(self.page_size))
    }

    fn paginate(&self, request: PageRequest) -> Paginator {
        Paginator::new(self.http.clone(), request)
    }
}
