//! Common types used throughout the Triage client
//!
//! This module contains shared type aliases and the small request/response
//! vocabulary of the Triage API.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single listing record (sample, profile, search hit)
///
/// Kept as an open-ended map since the service adds fields over time.
pub type Record = JsonObject;

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP methods used by the Triage API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::DELETE => "DELETE",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Sample Listing
// ============================================================================

/// Which set of samples a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subset {
    /// Samples submitted by the token owner
    #[default]
    Owned,
    /// Publicly visible samples
    Public,
    /// Samples shared within the owner's organisation
    Org,
}

impl Subset {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Subset::Owned => "owned",
            Subset::Public => "public",
            Subset::Org => "org",
        }
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Profiles
// ============================================================================

/// Selection of an execution profile for a sample
///
/// `pick` narrows the selection to one file of a submitted archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSelection {
    pub profile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pick: Option<String>,
}

impl ProfileSelection {
    /// Select a profile by name or id
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
            pick: None,
        }
    }

    /// Restrict the selection to one file of an archive
    #[must_use]
    pub fn pick(mut self, pick: impl Into<String>) -> Self {
        self.pick = Some(pick.into());
        self
    }
}

// ============================================================================
// Status
// ============================================================================

/// Lifecycle of a submitted sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleStatus {
    /// Queued for, or undergoing, static analysis
    Pending,
    /// Static report is ready; waiting for a profile selection
    StaticAnalysis,
    Scheduled,
    Running,
    /// Sandbox run finished, reports are being produced
    Processing,
    Reported,
    Failed,
}

impl SampleStatus {
    /// `reported` and `failed` are final
    pub fn is_terminal(&self) -> bool {
        matches!(self, SampleStatus::Reported | SampleStatus::Failed)
    }

    /// Read the `status` field of a sample record
    pub fn from_record(record: &Record) -> Option<Self> {
        record
            .get("status")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

/// Lifecycle of a single analysis task of a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Scheduled,
    Running,
    Processing,
    Reported,
    Failed,
}

impl TaskStatus {
    /// `reported` and `failed` are final
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Reported | TaskStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::GET), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(Method::POST), reqwest::Method::POST);
        assert_eq!(
            reqwest::Method::from(Method::DELETE),
            reqwest::Method::DELETE
        );
        assert_eq!(Method::DELETE.to_string(), "DELETE");
    }

    #[test]
    fn test_subset_values() {
        assert_eq!(Subset::Owned.as_str(), "owned");
        assert_eq!(Subset::Public.to_string(), "public");
        assert_eq!(Subset::Org.as_str(), "org");
        assert_eq!(Subset::default(), Subset::Owned);
    }

    #[test]
    fn test_profile_selection_serialization() {
        let plain = ProfileSelection::new("win10");
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!({"profile": "win10"}));

        let picked = ProfileSelection::new("win10").pick("archive/run.exe");
        assert_eq!(
            serde_json::to_value(&picked).unwrap(),
            json!({"profile": "win10", "pick": "archive/run.exe"})
        );
    }

    #[test]
    fn test_sample_status_from_record() {
        let record = json!({"id": "200916-abc", "status": "static_analysis"});
        let record = record.as_object().unwrap();
        let status = SampleStatus::from_record(record).unwrap();
        assert_eq!(status, SampleStatus::StaticAnalysis);
        assert!(!status.is_terminal());

        assert!(SampleStatus::Reported.is_terminal());
        assert!(SampleStatus::Failed.is_terminal());

        let unknown = json!({"status": "teleported"});
        assert!(SampleStatus::from_record(unknown.as_object().unwrap()).is_none());
    }

    #[test]
    fn test_task_status_terminal() {
        assert!(TaskStatus::Reported.is_terminal());
        assert!(!TaskStatus::Running.is_terminal());
    }
}
