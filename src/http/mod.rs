//! HTTP module
//!
//! The request dispatcher every API operation funnels through.
//!
//! # Features
//!
//! - **Authentication**: bearer token set once on the shared session
//! - **Body Encoding**: JSON, raw bytes or multipart form
//! - **Error Normalization**: non-2xx becomes `Error::Server`, transport
//!   failures become `Error::Connection`
//! - **Rate Limiting**: optional token bucket limiter using governor
//!
//! Nothing in this module retries a request.

mod client;
mod rate_limit;

pub use client::{HttpClient, RequestBody, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
