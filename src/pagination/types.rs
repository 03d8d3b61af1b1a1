//! Pagination types
//!
//! The wire envelope, the opaque cursor, the immutable page request template
//! and the mutable iteration state.

use crate::types::{JsonValue, Record};
use serde::Deserialize;
use std::collections::VecDeque;
use url::form_urlencoded;

/// Page size used when the caller gives no limit
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page the API serves per request
pub const MAX_PAGE_SIZE: u32 = 200;

/// Query parameter carrying the cursor
pub const CURSOR_PARAM: &str = "offset";

/// `{"data": [...] | null, "next": <cursor> | null}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageEnvelope {
    #[serde(default)]
    pub data: Option<Vec<Record>>,
    #[serde(default)]
    pub next: Option<JsonValue>,
}

impl PageEnvelope {
    /// Split into records and the follow-up cursor
    pub fn into_parts(self) -> (Vec<Record>, Option<Cursor>) {
        let records = self.data.unwrap_or_default();
        let cursor = self.next.and_then(Cursor::from_value);
        (records, cursor)
    }
}

/// Server supplied continuation token
///
/// Forwarded verbatim; never interpreted beyond rendering it as a query value.
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor(JsonValue);

impl Cursor {
    /// Wrap the raw `next` value; null and `""` mean "no further pages"
    pub fn from_value(value: JsonValue) -> Option<Self> {
        match &value {
            JsonValue::Null => None,
            JsonValue::String(s) if s.is_empty() => None,
            _ => Some(Self(value)),
        }
    }

    /// The raw JSON value
    pub fn as_value(&self) -> &JsonValue {
        &self.0
    }

    /// Query parameter value
    pub fn to_query_value(&self) -> String {
        match &self.0 {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Immutable description of a listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Endpoint path, e.g. `/v0/samples`
    pub path: String,
    /// Fixed query parameters, in order
    pub params: Vec<(String, String)>,
    /// Records per page
    pub limit: u32,
}

impl PageRequest {
    /// Listing with the default page size
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    /// Add a fixed query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Set the page size, clamped to `1..=MAX_PAGE_SIZE`
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = clamp_page_size(limit);
        self
    }

    /// Path and query string for the page at `cursor`
    pub fn page_path(&self, cursor: Option<&Cursor>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            query.append_pair(key, value);
        }
        query.append_pair("limit", &self.limit.to_string());
        if let Some(cursor) = cursor {
            query.append_pair(CURSOR_PARAM, &cursor.to_query_value());
        }
        format!("{}?{}", self.path, query.finish())
    }
}

/// Clamp a requested page size to what one request may ask for
pub fn clamp_page_size(limit: u32) -> u32 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Cursor for the next fetch; unset before the first page
    pub cursor: Option<Cursor>,
    /// Records of the current page not yet handed out
    pub buffer: VecDeque<Record>,
    /// No further page will be requested
    pub exhausted: bool,
    /// Number of pages fetched so far
    pub pages_fetched: u32,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Take in a freshly fetched page
    ///
    /// Empty data ends the sequence even when a cursor is present; a page
    /// without a cursor is the last one but its records are still handed out.
    pub fn apply_page(&mut self, records: Vec<Record>, next: Option<Cursor>) {
        self.pages_fetched += 1;

        if records.is_empty() {
            self.mark_done();
            return;
        }

        self.buffer = records.into();
        match next {
            Some(cursor) => self.cursor = Some(cursor),
            None => self.mark_done(),
        }
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.exhausted = true;
    }
}
