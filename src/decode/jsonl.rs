//! Incremental JSON Lines decoder

use crate::error::{Error, Result};
use crate::types::Record;

/// JSON Lines decoder fed with arbitrary chunks
///
/// Records may be split across chunks; a trailing record without a final
/// newline is returned by [`JsonlDecoder::finish`].
#[derive(Debug, Default)]
pub struct JsonlDecoder {
    pending: Vec<u8>,
    line_num: usize,
}

impl JsonlDecoder {
    /// Create a new JSONL decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer one chunk without decoding it
    pub fn feed(&mut self, chunk: &[u8]) {
        self.pending.extend_from_slice(chunk);
    }

    /// Decode the next complete line, skipping blank ones
    ///
    /// Returns `Ok(None)` when no complete line is buffered.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=pos).collect();
            if let Some(record) = self.decode_line(&line[..line.len() - 1])? {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Flush whatever is left once the body has ended
    pub fn finish(&mut self) -> Result<Option<Record>> {
        let rest = std::mem::take(&mut self.pending);
        self.decode_line(&rest)
    }

    fn decode_line(&mut self, line: &[u8]) -> Result<Option<Record>> {
        self.line_num += 1;

        if line.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(line).map(Some).map_err(|e| {
            Error::decode(format!(
                "Failed to parse JSONL at line {}: {e}",
                self.line_num
            ))
        })
    }
}

#[cfg(test)]
impl JsonlDecoder {
    /// Feed one chunk, returning the records completed by it
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Result<Vec<Record>> {
        self.feed(chunk);

        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Bytes buffered but not yet decoded
    pub(crate) fn buffered(&self) -> usize {
        self.pending.len()
    }
}
