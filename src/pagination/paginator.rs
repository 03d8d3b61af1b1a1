//! Lazy, forward-only iteration over a paginated listing
//!
//! ```text
//! UNSTARTED ──fetch──▶ FETCHING(cursor) ──fetch──▶ FETCHING(cursor') ...
//!      │                     │
//!      └── empty data / no next ──▶ EXHAUSTED (terminal, no more requests)
//! ```

use super::types::{PageEnvelope, PageRequest, PaginationState};
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::types::Record;
use futures::stream::{self, Stream};
use tracing::debug;

/// Cursor-driven sequence of records from one listing call
///
/// Nothing is requested until the first call to [`Paginator::next`]. A failed
/// page fetch leaves the state untouched, so calling `next` again repeats the
/// same request.
#[derive(Debug)]
pub struct Paginator {
    client: HttpClient,
    request: PageRequest,
    state: PaginationState,
}

impl Paginator {
    /// Create a paginator; no request is made yet
    pub fn new(client: HttpClient, request: PageRequest) -> Self {
        Self {
            client,
            request,
            state: PaginationState::new(),
        }
    }

    /// Next record, `Ok(None)` once the listing is exhausted
    pub async fn next(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(record) = self.state.buffer.pop_front() {
                return Ok(Some(record));
            }
            if self.state.exhausted {
                return Ok(None);
            }
            self.fetch_page().await?;
        }
    }

    /// True once no further page will be requested
    pub fn is_exhausted(&self) -> bool {
        self.state.exhausted
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.state.pages_fetched
    }

    /// The request template this paginator walks
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    /// Drain the remaining records into a vector
    pub async fn collect_all(mut self) -> Result<Vec<Record>> {
        let mut records = Vec::new();
        while let Some(record) = self.next().await? {
            records.push(record);
        }
        Ok(records)
    }

    /// Turn the paginator into a `Stream` of records
    pub fn into_stream(self) -> impl Stream<Item = Result<Record>> {
        stream::try_unfold(self, |mut paginator| async move {
            let item = paginator.next().await?;
            Ok::<_, Error>(item.map(|record| (record, paginator)))
        })
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let path = self.request.page_path(self.state.cursor.as_ref());
        debug!(page = self.state.pages_fetched + 1, "Fetching page: {}", path);

        let envelope: PageEnvelope = self.client.get_json(&path).await?;
        let (records, next) = envelope.into_parts();

        debug!(
            records = records.len(),
            next = ?next.as_ref().map(|c| c.to_query_value()),
            "Page fetched"
        );

        self.state.apply_page(records, next);
        if self.state.exhausted {
            debug!(pages = self.state.pages_fetched, "Listing exhausted: {}", self.request.path);
        }
        Ok(())
    }
}
