//! Opaque wire records and the decode contract.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Opaque extra data attached to several notification kinds.
///
/// The relay never inspects extras; they are passed through to the client
/// as-is.
pub type Extras = serde_json::Map<String, serde_json::Value>;

/// Errors produced when a wire record fails to decode into a typed payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The record carried no payload at all despite being transmitted.
    #[error("record is empty")]
    Empty,

    /// The record's contents do not deserialize into the expected shape.
    #[error("record does not decode: {0}")]
    Shape(#[from] serde_json::Error),
}

/// An opaque record as handed over by the transport.
///
/// The transport demultiplexes calls by notification kind but does not
/// interpret payloads; each payload field arrives as a `WireRecord` (or
/// `Option<WireRecord>` where the peer may omit it). Decoding may fail even
/// for a transmitted record, which callers must treat differently from a
/// field that was never sent.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRecord(serde_json::Value);

impl WireRecord {
    /// Wrap a raw transmitted value.
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Encode a typed payload into a record, as a peer would transmit it.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Shape`] if the payload cannot be serialized.
    pub fn encode<T: Serialize>(payload: &T) -> Result<Self, DecodeError> {
        Ok(Self(serde_json::to_value(payload)?))
    }

    /// Decode the record into a typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Empty`] if the record holds no payload, or
    /// [`DecodeError::Shape`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        if self.0.is_null() {
            return Err(DecodeError::Empty);
        }
        Ok(serde_json::from_value(self.0.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::MediaItem;

    #[test]
    fn test_decode_valid_record() {
        let record = WireRecord::new(serde_json::json!({ "id": "item-1" }));
        let item: MediaItem = record.decode().unwrap();
        assert_eq!(item.id, "item-1");
        assert!(item.metadata.is_none());
    }

    #[test]
    fn test_decode_null_record_is_empty() {
        let record = WireRecord::new(serde_json::Value::Null);
        let result = record.decode::<MediaItem>();
        assert!(matches!(result, Err(DecodeError::Empty)));
    }

    #[test]
    fn test_decode_wrong_shape_fails() {
        // A record missing the required `id` field must not decode.
        let record = WireRecord::new(serde_json::json!({ "title": "no id here" }));
        let result = record.decode::<MediaItem>();
        assert!(matches!(result, Err(DecodeError::Shape(_))));
    }

    #[test]
    fn test_encode_decode() {
        let item = MediaItem::new("item-2");
        let record = WireRecord::encode(&item).unwrap();
        let decoded: MediaItem = record.decode().unwrap();
        assert_eq!(decoded, item);
    }
}
