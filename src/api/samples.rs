//! Sample submission, lookup and listing

use super::TriageClient;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::pagination::Paginator;
use crate::types::{Method, ProfileSelection, Record, Subset};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Options for a sample submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOptions {
    /// Wait for a manual profile selection before running
    pub interactive: bool,
    /// Profiles to run; empty lets the service pick
    pub profiles: Vec<ProfileSelection>,
    /// Password of an encrypted archive (file submissions only)
    pub password: Option<String>,
}

impl SubmitOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set interactive mode
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Add a profile selection
    #[must_use]
    pub fn profile(mut self, selection: ProfileSelection) -> Self {
        self.profiles.push(selection);
        self
    }

    /// Set the archive password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

#[derive(Serialize)]
struct UrlSubmission<'a> {
    kind: &'static str,
    url: &'a str,
    interactive: bool,
    profiles: &'a [ProfileSelection],
}

#[derive(Serialize)]
struct FileSubmission<'a> {
    kind: &'static str,
    interactive: bool,
    profiles: &'a [ProfileSelection],
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

#[derive(Serialize)]
struct ManualProfile<'a> {
    auto: bool,
    profiles: &'a [ProfileSelection],
}

#[derive(Serialize)]
struct AutomaticProfile<'a> {
    auto: bool,
    pick: &'a [String],
}

impl TriageClient {
    /// Submit a URL for analysis
    pub async fn submit_sample_url(&self, url: &str, options: &SubmitOptions) -> Result<Record> {
        debug!("Submitting URL sample: {}", url);
        let body = UrlSubmission {
            kind: "url",
            url,
            interactive: options.interactive,
            profiles: &options.profiles,
        };
        self.http.post_json("/v0/samples", &body).await
    }

    /// Submit file contents for analysis
    pub async fn submit_sample_file(
        &self,
        filename: &str,
        contents: impl Into<Vec<u8>>,
        options: &SubmitOptions,
    ) -> Result<Record> {
        let metadata = FileSubmission {
            kind: "file",
            interactive: options.interactive,
            profiles: &options.profiles,
            password: options.password.as_deref(),
        };

        let contents = contents.into();
        debug!(size = contents.len(), "Submitting file sample: {}", filename);

        let file = Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(Error::Request)?;
        let form = Form::new()
            .text("_json", serde_json::to_string(&metadata)?)
            .part("file", file);

        self.http
            .request_json(
                Method::POST,
                "/v0/samples",
                RequestConfig::new().multipart(form),
            )
            .await
    }

    /// Read a local file and submit it
    pub async fn submit_sample_path(
        &self,
        path: impl AsRef<Path>,
        options: &SubmitOptions,
    ) -> Result<Record> {
        let path = path.as_ref();
        let contents = tokio::fs::read(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.display().to_string(),
            },
            _ => Error::Io(e),
        })?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sample.bin");
        self.submit_sample_file(filename, contents, options).await
    }

    /// Select the profiles an interactive submission should run with
    pub async fn set_sample_profile(
        &self,
        sample_id: &str,
        profiles: &[ProfileSelection],
    ) -> Result<()> {
        let body = ManualProfile {
            auto: false,
            profiles,
        };
        self.http
            .request_empty(
                Method::POST,
                &format!("/v0/samples/{sample_id}/profile"),
                RequestConfig::new().json(&body)?,
            )
            .await
    }

    /// Let the service choose profiles, optionally restricted to `pick`ed files
    pub async fn set_sample_profile_automatically(
        &self,
        sample_id: &str,
        pick: &[String],
    ) -> Result<()> {
        let body = AutomaticProfile { auto: true, pick };
        self.http
            .request_empty(
                Method::POST,
                &format!("/v0/samples/{sample_id}/profile"),
                RequestConfig::new().json(&body)?,
            )
            .await
    }

    /// List samples of one subset, newest first
    pub fn samples(&self, subset: Subset, limit: Option<u32>) -> Paginator {
        let request = self
            .page_request("/v0/samples", limit)
            .param("subset", subset.as_str());
        self.paginate(request)
    }

    /// Samples submitted by the token owner
    pub fn owned_samples(&self, limit: Option<u32>) -> Paginator {
        self.samples(Subset::Owned, limit)
    }

    /// Publicly visible samples
    pub fn public_samples(&self, limit: Option<u32>) -> Paginator {
        self.samples(Subset::Public, limit)
    }

    /// Search samples, e.g. `family:emotet` or `NOT tag:ransomware`
    pub fn search(&self, query: &str, limit: Option<u32>) -> Paginator {
        let request = self.page_request("/v0/search", limit).param("query", query);
        self.paginate(request)
    }

    /// Fetch sample metadata
    pub async fn sample_by_id(&self, sample_id: &str) -> Result<Record> {
        self.http.get_json(&format!("/v0/samples/{sample_id}")).await
    }

    /// Delete a sample
    pub async fn delete_sample(&self, sample_id: &str) -> Result<()> {
        self.http
            .request_empty(
                Method::DELETE,
                &format!("/v0/samples/{sample_id}"),
                RequestConfig::new(),
            )
            .await
    }
}
