//! Batched-call envelope.
//!
//! The API accepts several logical calls in one request, keyed `"0"`, `"1"`, ...
//! alongside a `batch` query parameter. This SDK always sends exactly one call,
//! under key `"0"`; the `batch` value is passed through untouched.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize};
use std::io;

/// Default value of the `batch` query parameter.
pub const DEFAULT_BATCH: u32 = 1;

/// A single logical call wrapped as index 0 of a batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Batch<T> {
    #[serde(rename = "0")]
    pub call: T,
}

impl<T> Batch<T> {
    pub fn new(call: T) -> Self {
        Self { call }
    }
}

impl<T: Serialize> Batch<T> {
    /// Encode the envelope for use in a query string.
    ///
    /// Output uses `", "` and `": "` separators, e.g.
    /// `{"0": {"packageName": "axios"}}`.
    pub fn to_query_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }
}

/// Compact JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_wraps_call_under_zero() {
        let batch = Batch::new(json!({"packageName": "axios"}));
        assert_eq!(
            serde_json::to_value(&batch).unwrap(),
            json!({"0": {"packageName": "axios"}})
        );
    }

    #[test]
    fn test_batch_deserialize() {
        let batch: Batch<serde_json::Value> =
            serde_json::from_str(r#"{"0": {"url": "https://example.com/"}}"#).unwrap();
        assert_eq!(batch.call["url"], "https://example.com/");
    }

    #[test]
    fn test_query_json_separators() {
        let batch = Batch::new(json!({"packageName": "axios"}));
        assert_eq!(batch.to_query_json().unwrap(), r#"{"0": {"packageName": "axios"}}"#);

        let batch = Batch::new(json!({"a": [1, 2, {}], "b": null}));
        assert_eq!(batch.to_query_json().unwrap(), r#"{"0": {"a": [1, 2, {}], "b": null}}"#);
    }

    #[test]
    fn test_query_json_escapes_strings() {
        let batch = Batch::new(json!({"packageName": "we\"ird"}));
        let encoded = batch.to_query_json().unwrap();
        let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded["0"]["packageName"], "we\"ird");
    }
}
