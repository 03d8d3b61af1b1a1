//! Live sample events
//!
//! `GET /v0/samples/{id}/events` streams one JSON object per line while the
//! sample is being analyzed and closes once it reaches a final state.

use super::TriageClient;
use crate::decode::JsonlDecoder;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use crate::types::{Method, Record};
use bytes::Bytes;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::pin::Pin;
use tracing::debug;

/// Stream of sample status events
pub type SampleEvents = Pin<Box<dyn Stream<Item = Result<Record>> + Send>>;

struct EventReader {
    body: BoxStream<'static, reqwest::Result<Bytes>>,
    decoder: JsonlDecoder,
    finished: bool,
}

impl EventReader {
    async fn next_event(&mut self) -> Result<Option<Record>> {
        loop {
            if let Some(event) = self.decoder.next_record()? {
                return Ok(Some(event));
            }
            if self.finished {
                return Ok(None);
            }

            match self.body.next().await {
                Some(chunk) => self.decoder.feed(&chunk.map_err(Error::Connection)?),
                None => {
                    self.finished = true;
                    return self.decoder.finish();
                }
            }
        }
    }
}

impl TriageClient {
    /// Follow the status events of a sample
    ///
    /// The request is sent before this returns, so an unknown sample fails
    /// here rather than on the first poll.
    pub async fn sample_events(&self, sample_id: &str) -> Result<SampleEvents> {
        let path = format!("/v0/samples/{sample_id}/events");
        let response = self
            .http
            .request(Method::GET, &path, RequestConfig::new())
            .await?;
        debug!("Following events: {}", path);

        let reader = EventReader {
            body: response.bytes_stream().boxed(),
            decoder: JsonlDecoder::new(),
            finished: false,
        };

        let events = stream::try_unfold(reader, |mut reader| async move {
            let event = reader.next_event().await?;
            Ok::<_, Error>(event.map(|event| (event, reader)))
        });
        Ok(Box::pin(events))
    }
}
