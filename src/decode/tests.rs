//! Tests for the JSONL decoder

use super::*;
use crate::error::Error;

#[test]
fn test_jsonl_whole_lines() {
    let mut decoder = JsonlDecoder::new();
    let records = decoder
        .push(b"{\"id\":\"a\",\"status\":\"pending\"}\n{\"id\":\"a\",\"status\":\"running\"}\n")
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["status"], "pending");
    assert_eq!(records[1]["status"], "running");
    assert_eq!(decoder.buffered(), 0);
    assert!(decoder.finish().unwrap().is_none());
}

#[test]
fn test_jsonl_record_split_across_chunks() {
    let mut decoder = JsonlDecoder::new();

    assert!(decoder.push(b"{\"id\":\"a\",\"sta").unwrap().is_empty());
    assert!(decoder.buffered() > 0);

    let records = decoder.push(b"tus\":\"reported\"}\n{\"id\"").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "reported");

    let records = decoder.push(b":\"b\"}\n").unwrap();
    assert_eq!(records[0]["id"], "b");
}

#[test]
fn test_jsonl_trailing_record_without_newline() {
    let mut decoder = JsonlDecoder::new();
    assert!(decoder.push(b"{\"id\":\"last\"}").unwrap().is_empty());

    let last = decoder.finish().unwrap().unwrap();
    assert_eq!(last["id"], "last");
}

#[test]
fn test_jsonl_skips_blank_lines_and_crlf() {
    let mut decoder = JsonlDecoder::new();
    let records = decoder.push(b"\r\n{\"id\":1}\r\n\n  \n").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], 1);
}

#[test]
fn test_jsonl_invalid_line() {
    let mut decoder = JsonlDecoder::new();
    let err = decoder.push(b"{\"id\":1}\nnot json\n").unwrap_err();

    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_jsonl_rejects_non_object() {
    let mut decoder = JsonlDecoder::new();
    assert!(decoder.push(b"[1,2,3]\n").is_err());
}

#[test]
fn test_jsonl_next_record_keeps_earlier_records() {
    let mut decoder = JsonlDecoder::new();
    decoder.feed(b"{\"id\":1}\nnot json\n{\"id\":3}");

    assert_eq!(decoder.next_record().unwrap().unwrap()["id"], 1);
    assert!(decoder.next_record().is_err());
    assert!(decoder.next_record().unwrap().is_none());
    assert_eq!(decoder.finish().unwrap().unwrap()["id"], 3);
}
