//! Client configuration
//!
//! A [`ClientConfig`] can be assembled in code through the builder, read from
//! a YAML file, or taken from the environment (`TRIAGE_TOKEN`, `TRIAGE_URL`).

use crate::auth::BearerToken;
use crate::error::{Error, Result};
use crate::http::RateLimiterConfig;
use crate::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Public Triage API root
pub const DEFAULT_ROOT_URL: &str = "https://api.tria.ge";

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "TRIAGE_TOKEN";

/// Environment variable overriding the API root
pub const URL_ENV: &str = "TRIAGE_URL";

/// Configuration for [`TriageClient`](crate::api::TriageClient)
///
/// `Debug` never prints the token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, without the `/v0` version prefix
    #[serde(default = "default_root_url")]
    pub root_url: String,

    /// Bearer token
    pub token: String,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Transport timeout per request; none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Optional client-side rate limit
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// Page size for listings when the caller gives no limit
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("root_url", &self.root_url)
            .field("token", &BearerToken::new(self.token.as_str()))
            .field("user_agent", &self.user_agent)
            .field("timeout_secs", &self.timeout_secs)
            .field("rate_limit", &self.rate_limit)
            .field("page_size", &self.page_size)
            .finish()
    }
}

fn default_root_url() -> String {
    DEFAULT_ROOT_URL.to_string()
}

fn default_user_agent() -> String {
    format!("triage-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl ClientConfig {
    /// Config for the public API with the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            root_url: default_root_url(),
            token: token.into(),
            user_agent: default_user_agent(),
            timeout_secs: None,
            rate_limit: None,
            page_size: default_page_size(),
        }
    }

    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Parse a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Build from `TRIAGE_TOKEN` and, if set, `TRIAGE_URL`
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| Error::missing_field(TOKEN_ENV))?;
        let mut config = Self::new(token);
        if let Ok(url) = std::env::var(URL_ENV) {
            config.root_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Transport timeout as a `Duration`
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check the config for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::missing_field("token"));
        }

        let url = url::Url::parse(&self.root_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::config(format!(
                "root_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(Error::config(format!(
                "page_size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }

        if let Some(limit) = &self.rate_limit {
            if limit.requests_per_second == 0 || limit.burst_size == 0 {
                return Err(Error::config("rate_limit values must be greater than 0"));
            }
        }

        Ok(())
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    root_url: Option<String>,
    token: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    rate_limit: Option<RateLimiterConfig>,
    page_size: Option<u32>,
}

impl ClientConfigBuilder {
    /// Set the API root
    pub fn root_url(mut self, url: impl Into<String>) -> Self {
        self.root_url = Some(url.into());
        self
    }

    /// Set the bearer token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Set a transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Set the default listing page size
    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Build and validate the config
    pub fn build(self) -> Result<ClientConfig> {
        let token = self.token.ok_or_else(|| Error::missing_field("token"))?;
        let mut config = ClientConfig::new(token);
        if let Some(url) = self.root_url {
            config.root_url = url;
        }
        if let Some(agent) = self.user_agent {
            config.user_agent = agent;
        }
        config.timeout_secs = self.timeout_secs;
        config.rate_limit = self.rate_limit;
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new("token");
        assert_eq!(config.root_url, "https://api.tria.ge");
        assert_eq!(config.page_size, 20);
        assert!(config.timeout().is_none());
        assert!(config.rate_limit.is_none());
        assert!(config.user_agent.starts_with("triage-client/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new("SUPERSECRET");
        let printed = format!("{config:?}");
        assert!(!printed.contains("SUPERSECRET"));
        assert!(printed.contains("BearerToken(***)"));
        assert!(printed.contains("https://api.tria.ge"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .token("abc")
            .root_url("http://localhost:8080")
            .user_agent("test-agent/1.0")
            .timeout(Duration::from_secs(15))
            .rate_limit(RateLimiterConfig::new(2, 4))
            .page_size(50)
            .build()
            .unwrap();

        assert_eq!(config.root_url, "http://localhost:8080");
        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.rate_limit, Some(RateLimiterConfig::new(2, 4)));
        assert_eq!(config.page_size, 50);
    }

    #[test]
    fn test_builder_requires_token() {
        let result = ClientConfig::builder().build();
        assert!(matches!(result, Err(Error::MissingConfigField { .. })));
    }

    #[test]
    fn test_validation() {
        let mut config = ClientConfig::new("");
        assert!(config.validate().is_err());

        config.token = "abc".to_string();
        config.root_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(Error::Config { .. })));

        config.root_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        config.root_url = DEFAULT_ROOT_URL.to_string();
        config.page_size = 201;
        assert!(config.validate().is_err());

        config.page_size = 200;
        config.rate_limit = Some(RateLimiterConfig::new(0, 1));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
root_url: https://private.tria.ge
token: abc123
timeout_secs: 30
rate_limit:
  requests_per_second: 2
  burst_size: 2
"#;
        let config = ClientConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.root_url, "https://private.tria.ge");
        assert_eq!(config.token, "abc123");
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "token: from-file").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.token, "from-file");
        assert_eq!(config.root_url, DEFAULT_ROOT_URL);
    }

    #[test]
    fn test_from_missing_file() {
        let result = ClientConfig::from_file("/nonexistent/triage.yaml");
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml() {
        let result = ClientConfig::from_yaml_str("token: [unterminated");
        assert!(matches!(result, Err(Error::YamlParse(_))));
    }
}
