// SPDX-License-Identifier: MPL-2.0
//! Locale tables parsed from JSON resource files.

use crate::error::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Key to translated string mapping for one locale.
pub type LocaleTable = BTreeMap<String, String>;

/// Parses a resource file body into a table.
///
/// Never fails: an empty body, a body that is not valid JSON (a leading
/// byte-order mark included), `null`, or any non-object top-level value
/// yields an empty table. String values are kept as-is; numbers and booleans
/// are stored as their JSON text; `null`, arrays and nested objects are
/// skipped.
pub fn parse_table(body: &str) -> LocaleTable {
    if body.trim().is_empty() {
        return LocaleTable::new();
    }

    let entries = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(entries)) => entries,
        Ok(_) => {
            log::warn!("Resource body is not a JSON object, using an empty table");
            return LocaleTable::new();
        }
        Err(err) => {
            log::warn!("Resource body is not valid JSON ({err}), using an empty table");
            return LocaleTable::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Number(n) => Some((key, n.to_string())),
            Value::Bool(b) => Some((key, b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
        .collect()
}

/// Reads and parses the resource file at `path`.
///
/// A body that is not UTF-8 yields an empty table. Only read failures are
/// reported as errors.
pub fn load_table(path: &Path) -> Result<LocaleTable> {
    let bytes = fs::read(path)?;
    let table = match String::from_utf8(bytes) {
        Ok(body) => parse_table(&body),
        Err(_) => {
            log::warn!("{} is not UTF-8, using an empty table", path.display());
            LocaleTable::new()
        }
    };
    log::debug!("Loaded {} entries from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_string_pairs() {
        let table = parse_table(r#"{"hello": "world", "bye": "adiós"}"#);
        assert_eq!(table.get("hello").map(String::as_str), Some("world"));
        assert_eq!(table.get("bye").map(String::as_str), Some("adiós"));
    }

    #[test]
    fn empty_body_is_an_empty_table() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("  \n").is_empty());
    }

    #[test]
    fn non_object_body_is_an_empty_table() {
        assert!(parse_table("null").is_empty());
        assert!(parse_table(r#"["a", "b"]"#).is_empty());
        assert!(parse_table(r#""text""#).is_empty());
    }

    #[test]
    fn scalars_are_stringified_and_nested_values_skipped() {
        let table = parse_table(r#"{"n": 3, "b": true, "z": null, "a": [1], "o": {"k": "v"}}"#);
        assert_eq!(table.len(), 2);
        assert_eq!(table["n"], "3");
        assert_eq!(table["b"], "true");
    }

    #[test]
    fn invalid_json_is_an_empty_table() {
        assert!(parse_table("{\"hello\": ").is_empty());
        assert!(parse_table("{not json").is_empty());
    }

    #[test]
    fn byte_order_mark_body_is_an_empty_table() {
        assert!(parse_table("\u{feff}{\"a\": \"b\"}").is_empty());
    }

    #[test]
    fn load_table_treats_non_utf8_body_as_empty() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("values_en.json");
        fs::write(&path, [0xff, 0xfe, b'{', b'}']).expect("failed to write resource");

        let table = load_table(&path).expect("unreadable text is not an error");
        assert!(table.is_empty());
    }

    #[test]
    fn load_table_reports_missing_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let err = load_table(&temp_dir.path().join("absent.json")).expect_err("no file");
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
