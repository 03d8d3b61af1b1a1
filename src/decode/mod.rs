//! Response decoder module
//!
//! # Overview
//!
//! Streaming endpoints (sample events) deliver one JSON object per line.
//! [`JsonlDecoder`] accepts the body chunk by chunk, as it arrives from the
//! network, and hands out every record whose line is complete.

mod jsonl;

pub use jsonl::JsonlDecoder;

#[cfg(test)]
mod tests;
