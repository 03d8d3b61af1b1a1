//! Analysis reports and task artifacts

use super::TriageClient;
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::{JsonValue, Method};
use bytes::Bytes;

impl TriageClient {
    /// Static analysis report of a sample
    pub async fn static_report(&self, sample_id: &str) -> Result<JsonValue> {
        self.http
            .get_json(&format!("/v0/samples/{sample_id}/reports/static"))
            .await
    }

    /// Overview report combining every task of a sample
    pub async fn overview_report(&self, sample_id: &str) -> Result<JsonValue> {
        self.http
            .get_json(&format!("/v1/samples/{sample_id}/overview.json"))
            .await
    }

    /// Dynamic analysis report of one task, e.g. `behavioral1`
    pub async fn task_report(&self, sample_id: &str, task_id: &str) -> Result<JsonValue> {
        self.http
            .get_json(&format!(
                "/v0/samples/{sample_id}/{task_id}/report_triage.json"
            ))
            .await
    }

    /// File produced by a task, e.g. a memory dump or `logs/onboard.log`
    pub async fn sample_task_file(
        &self,
        sample_id: &str,
        task_id: &str,
        file_name: &str,
    ) -> Result<Bytes> {
        self.download(&format!("/v0/samples/{sample_id}/{task_id}/{file_name}"))
            .await
    }

    /// All analysis artifacts as a tar archive
    pub async fn sample_archive_tar(&self, sample_id: &str) -> Result<Bytes> {
        self.download(&format!("/v0/samples/{sample_id}/archive"))
            .await
    }

    /// All analysis artifacts as a zip archive
    pub async fn sample_archive_zip(&self, sample_id: &str) -> Result<Bytes> {
        self.download(&format!("/v0/samples/{sample_id}/archive.zip"))
            .await
    }

    async fn download(&self, path: &str) -> Result<Bytes> {
        self.http
            .request_bytes(Method::GET, path, RequestConfig::new())
            .await
    }
}
