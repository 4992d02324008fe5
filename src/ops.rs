//! Pure JSON operations over the editor text
//!
//! Parsing and re-serialization only; no UI state. Object member order is
//! preserved end to end (`serde_json` with `preserve_order`), so prettify and
//! minify are stable with respect to key order.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

/// File name used by the download/export action.
pub const EXPORT_FILE_NAME: &str = "data.json";

/// Parse text as JSON, surfacing the parser's error as-is.
pub fn parse(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(text)
}

/// Re-serialize with a fixed 4-space indent.
pub fn prettify(text: &str) -> Result<String, serde_json::Error> {
    let value = parse(text)?;
    let mut buf = Vec::with_capacity(text.len() + 16);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Re-serialize with no whitespace.
pub fn minify(text: &str) -> Result<String, serde_json::Error> {
    let value = parse(text)?;
    serde_json::to_string(&value)
}

/// Write the raw text byte-for-byte to `data.json` under `dir`.
///
/// No validation is performed; whatever is in the editor is exported.
pub fn export(text: &str, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, text.as_bytes())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prettify_uses_four_space_indent() {
        assert_eq!(prettify(r#"{"x":1}"#).unwrap(), "{\n    \"x\": 1\n}");
    }

    #[test]
    fn minify_strips_whitespace() {
        let pretty = "{\n    \"a\": [1, 2],\n    \"b\": \"two\"\n}";
        assert_eq!(minify(pretty).unwrap(), r#"{"a":[1,2],"b":"two"}"#);
    }

    #[test]
    fn prettify_then_minify_round_trips_structurally() {
        let input = r#"{"z":1,"a":{"nested":[true,null,1.5]},"m":"text"}"#;
        let pretty = prettify(input).unwrap();
        let compact = minify(&pretty).unwrap();
        assert_eq!(parse(input).unwrap(), parse(&compact).unwrap());
    }

    #[test]
    fn key_order_is_preserved() {
        let input = r#"{"z":1,"a":2,"m":3}"#;
        assert_eq!(minify(input).unwrap(), input);
    }

    #[test]
    fn invalid_input_propagates_parser_error() {
        let err = prettify("{not json").unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(minify("{not json").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn scalars_are_valid_documents() {
        assert_eq!(prettify("42").unwrap(), "42");
        assert_eq!(minify("\"hi\"").unwrap(), "\"hi\"");
        assert_eq!(prettify("null").unwrap(), "null");
    }

    #[test]
    fn export_writes_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = export("{}", dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");

        // Invalid content is exported as-is; no validation on this path.
        let path = export("{broken", dir.path()).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{broken");
    }
}
