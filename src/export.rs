// Author: Dustin Pilgrim
// License: MIT

use chrono::SecondsFormat;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::ast::{Document, Value};
use crate::config::TomeConfig;
use crate::TomeError;

/// Values map onto the JSON data model directly. Timestamps become
/// RFC 3339 strings and tables keep their source order.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Timestamp(t) => {
                serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Table(table) => table.serialize(serializer),
        }
    }
}

/// Export a document to pretty-printed JSON.
///
/// # Examples
/// ```
/// let doc = tome_cfg::parse_document("[owner]\nname = \"Tom\"\n")?;
/// let json = tome_cfg::export::export_document_to_json(&doc)?;
/// assert!(json.contains("\"name\": \"Tom\""));
/// # Ok::<(), tome_cfg::TomeError>(())
/// ```
pub fn export_document_to_json(doc: &Document) -> Result<String, TomeError> {
    serde_json::to_string_pretty(doc).map_err(|e| TomeError::ExportError {
        message: format!("Failed to serialize document: {}", e),
        hint: None,
        code: Some(501),
    })
}

/// Read, parse, and export a file in one call.
///
/// # Errors
/// Returns error if the file can't be read or contains invalid syntax.
pub fn export_file(path: &str) -> Result<String, TomeError> {
    let config = TomeConfig::from_file(path)?;
    export_document_to_json(config.document())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn export(input: &str) -> serde_json::Value {
        let doc = crate::parse_document(input).expect("Failed to parse");
        let output = export_document_to_json(&doc).expect("Failed to export");
        serde_json::from_str(&output).expect("Exported JSON is not valid")
    }

    #[test]
    fn test_export_scalars() {
        let exported = export("s = \"a\\tb\"\ni = -7\nf = 0.5\nb = false\n");
        assert_eq!(exported, json!({ "s": "a\tb", "i": -7, "f": 0.5, "b": false }));
    }

    #[test]
    fn test_export_timestamp() {
        let exported = export("dob = 1979-05-27T07:32:00Z\n");
        assert_eq!(exported["dob"], json!("1979-05-27T07:32:00Z"));
    }

    #[test]
    fn test_export_nested_tables_and_arrays() {
        let exported = export("[a.b]\nx = [[1, 2], [\"c\"]]\n");
        assert_eq!(exported, json!({ "a": { "b": { "x": [[1, 2], ["c"]] } } }));
    }

    #[test]
    fn test_export_keeps_source_order() {
        let doc = crate::parse_document("zeta = 1\nalpha = 2\n[mid]\n").unwrap();
        let output = export_document_to_json(&doc).unwrap();
        let zeta = output.find("zeta").unwrap();
        let alpha = output.find("alpha").unwrap();
        let mid = output.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn test_export_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/example.toml");
        let output = export_file(path).expect("Failed to export example.toml");
        let exported: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(exported["database"]["ports"], json!([8001, 8001, 8002]));
        assert_eq!(exported["owner"]["dob"], json!("1979-05-27T07:32:00Z"));
    }

    #[test]
    fn test_export_missing_file() {
        assert!(matches!(
            export_file("/nonexistent/dir/config.toml"),
            Err(TomeError::FileError { .. })
        ));
    }
}
