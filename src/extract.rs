//! Decoding of SQS Lambda events into [`Message`] values.
//!
//! An event looks like `{"Records": [{"body": "<json>"}, ...]}`. Each body is
//! decoded on demand as the caller advances the returned iterator, so a
//! malformed record only surfaces once iteration reaches it.

use std::iter::FusedIterator;
use std::slice;

use serde_json::Value;

use crate::core::models::Message;
use crate::errors::MessageError;

/// Decodes the `body` of a single SQS record.
///
/// # Errors
///
/// Returns [`MessageError::MissingField`] if the record has no `body`, and
/// [`MessageError::Decode`] if the body is not a string holding a JSON object
/// with string `ticker` and `file_path` fields.
pub fn decode_one(record: &Value) -> Result<Message, MessageError> {
    let body = record
        .get("body")
        .ok_or_else(|| MessageError::MissingField("body".to_string()))?;

    let body = body
        .as_str()
        .ok_or_else(|| MessageError::Decode("body is not a string".to_string()))?;

    body.parse()
}

/// Returns a lazy iterator over the messages carried by `event`.
///
/// An empty object yields nothing. Otherwise `Records` must be present.
///
/// # Errors
///
/// Returns [`MessageError::MissingField`] if `Records` is absent from a
/// non-empty event (or the event is not an object), and
/// [`MessageError::Decode`] if `Records` is not an array. Per-record failures
/// are yielded by the iterator instead.
pub fn extract_messages(event: &Value) -> Result<Messages<'_>, MessageError> {
    if event.as_object().is_some_and(serde_json::Map::is_empty) {
        return Ok(Messages::empty());
    }

    let records = event
        .get("Records")
        .ok_or_else(|| MessageError::MissingField("Records".to_string()))?;

    let records = records
        .as_array()
        .ok_or_else(|| MessageError::Decode("Records is not an array".to_string()))?;

    Ok(Messages::new(records))
}

/// Drains [`extract_messages`], stopping at the first failure.
///
/// # Errors
///
/// Returns the first error raised by the event or any of its records.
pub fn collect_messages(event: &Value) -> Result<Vec<Message>, MessageError> {
    extract_messages(event)?.collect()
}

/// Single-pass iterator returned by [`extract_messages`].
///
/// After the first `Err` the iterator is exhausted.
#[derive(Debug)]
pub struct Messages<'a> {
    records: slice::Iter<'a, Value>,
    failed: bool,
}

impl<'a> Messages<'a> {
    fn new(records: &'a [Value]) -> Self {
        Self {
            records: records.iter(),
            failed: false,
        }
    }

    fn empty() -> Self {
        Self::new(<&[Value]>::default())
    }
}

impl Iterator for Messages<'_> {
    type Item = Result<Message, MessageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let decoded = decode_one(self.records.next()?);
        self.failed = decoded.is_err();
        Some(decoded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, Some(self.records.len()))
        }
    }
}

impl FusedIterator for Messages<'_> {}
