// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Triage Client
//!
//! An async client for the Triage malware analysis sandbox API.
//!
//! ## Features
//!
//! - **Submission**: URLs, in-memory files and files on disk, with optional
//!   profile selection and archive passwords
//! - **Lazy Listings**: owned/public/org samples, search results and profiles
//!   walked page by page through a forward-only [`Paginator`]
//! - **Reports**: static, overview and per-task reports plus raw task files
//!   and archives
//! - **Events**: live sample status updates as a `Stream`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use triage_client::{Result, SubmitOptions, TriageClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = TriageClient::from_env()?;
//!
//!     let sample = client
//!         .submit_sample_url("http://example.com", &SubmitOptions::default())
//!         .await?;
//!
//!     let mut hits = client.search("family:emotet", Some(50));
//!     while let Some(hit) = hits.next().await? {
//!         println!("{}", hit["id"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     TriageClient                        │
//! │  samples  search  reports  profiles  events  submit     │
//! └─────────────────────────────────────────────────────────┘
//!            │                         │
//! ┌──────────┴──────────┐   ┌──────────┴──────────┐
//! │      Paginator      │   │    JsonlDecoder     │
//! │  cursor → offset    │   │  chunk → record     │
//! └──────────┬──────────┘   └──────────┬──────────┘
//!            │                         │
//! ┌──────────┴─────────────────────────┴────────────────────┐
//! │                HttpClient (dispatcher)                  │
//! │  bearer auth   body encoding   rate limit   errors      │
//! └─────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Bearer token handling
pub mod auth;

/// Client configuration
pub mod config;

/// Request dispatcher and rate limiting
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Streaming response decoders
pub mod decode;

/// High-level API operations
pub mod api;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{SampleEvents, SubmitOptions, TriageClient};
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use pagination::Paginator;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
