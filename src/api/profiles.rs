//! Sandbox profile management

use super::TriageClient;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::pagination::Paginator;
use crate::types::{Method, Record};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct NewProfile<'a> {
    name: &'a str,
    tags: &'a [String],
    network: &'a str,
    timeout: u64,
}

impl TriageClient {
    /// List the profiles available to the token owner
    pub fn profiles(&self, limit: Option<u32>) -> Paginator {
        self.paginate(self.page_request("/v0/profiles", limit))
    }

    /// Create a profile
    ///
    /// `network` is one of the service's network modes (`internet`,
    /// `drop`, `tor`, ...). The timeout is sent in whole seconds.
    pub async fn create_profile(
        &self,
        name: &str,
        tags: &[String],
        network: &str,
        timeout: Duration,
    ) -> Result<Record> {
        debug!("Creating profile {} ({}s)", name, timeout.as_secs());
        let body = NewProfile {
            name,
            tags,
            network,
            timeout: timeout.as_secs(),
        };
        self.http.post_json("/v0/profiles", &body).await
    }

    /// Delete a profile by name or ID
    pub async fn delete_profile(&self, name: &str) -> Result<()> {
        self.http
            .request_empty(
                Method::DELETE,
                &format!("/v0/profiles/{name}"),
                RequestConfig::new(),
            )
            .await
    }
}
