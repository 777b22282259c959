use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

/// Error type for reading an import file
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Which interpretation of the file content produced the tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Content parsed as a JSON document
    Json,
    /// Content was not valid JSON; one task per non-blank line
    Text,
}

/// Task texts extracted from an import file, in file order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedTasks {
    pub format: SourceFormat,
    pub tasks: Vec<String>,
}

/// Load task texts from a file. Never fails: a read failure is logged and
/// yields an empty list.
pub fn load_tasks(path: &Path) -> Vec<String> {
    match try_load_tasks(path) {
        Ok(parsed) => parsed.tasks,
        Err(e) => {
            tracing::warn!(error = %e, "error loading file");
            Vec::new()
        }
    }
}

/// Read and parse a file, surfacing read failures to the caller.
pub fn try_load_tasks(path: &Path) -> Result<ParsedTasks, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_tasks(&content);
    tracing::debug!(
        path = %path.display(),
        format = ?parsed.format,
        count = parsed.tasks.len(),
        "parsed import file"
    );
    Ok(parsed)
}

/// Interpret file content as JSON if it parses, otherwise as plain text.
///
/// Only a JSON syntax error selects the plain-text reading. A document that
/// parses but has the wrong shape (no `"tasks"` key, not an object) yields
/// no tasks at all.
pub fn parse_tasks(content: &str) -> ParsedTasks {
    match serde_json::from_str::<Value>(content) {
        Ok(doc) => ParsedTasks {
            format: SourceFormat::Json,
            tasks: tasks_from_json(doc),
        },
        Err(_) => ParsedTasks {
            format: SourceFormat::Text,
            tasks: parse_text_lines(content),
        },
    }
}

/// Pull the `"tasks"` array out of a parsed document. Elements are taken as
/// they are: strings verbatim (blank ones included), anything else as its
/// compact JSON text.
fn tasks_from_json(doc: Value) -> Vec<String> {
    let mut map = match doc {
        Value::Object(map) => map,
        other => {
            tracing::warn!(kind = json_kind(&other), "JSON document is not an object");
            return Vec::new();
        }
    };

    match map.remove("tasks") {
        None => Vec::new(),
        Some(Value::Array(items)) => items.into_iter().map(json_item_text).collect(),
        Some(other) => {
            tracing::warn!(kind = json_kind(&other), "\"tasks\" is not an array");
            Vec::new()
        }
    }
}

fn json_item_text(item: Value) -> String {
    match item {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One task per line: split on `\n`, trim, drop blank lines.
fn parse_text_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_tasks_array() {
        let parsed = parse_tasks(r#"{"tasks": ["buy milk", "walk dog"]}"#);
        assert_eq!(parsed.format, SourceFormat::Json);
        assert_eq!(parsed.tasks, vec!["buy milk", "walk dog"]);
    }

    #[test]
    fn json_takes_precedence_over_lines() {
        let parsed = parse_tasks("{\"tasks\":\n  [\"a\",\n   \"b\"]\n}\n");
        assert_eq!(parsed.format, SourceFormat::Json);
        assert_eq!(parsed.tasks, vec!["a", "b"]);
    }

    #[test]
    fn json_strings_are_not_trimmed_or_filtered() {
        let parsed = parse_tasks(r#"{"tasks": ["  padded  ", "", "   "]}"#);
        assert_eq!(parsed.tasks, vec!["  padded  ", "", "   "]);
    }

    #[test]
    fn json_non_string_elements_become_json_text() {
        let parsed = parse_tasks(r#"{"tasks": ["a", 42, null, true, {"k": 1}, [1, 2]]}"#);
        assert_eq!(
            parsed.tasks,
            vec!["a", "42", "null", "true", r#"{"k":1}"#, "[1,2]"]
        );
    }

    #[test]
    fn json_object_without_tasks_key_yields_nothing() {
        let parsed = parse_tasks(r#"{"items": ["a", "b"]}"#);
        assert_eq!(parsed.format, SourceFormat::Json);
        assert!(parsed.tasks.is_empty());
    }

    #[test]
    fn json_non_object_documents_yield_nothing() {
        for doc in [r#"["a", "b"]"#, r#""just a string""#, "42", "null", "true"] {
            let parsed = parse_tasks(doc);
            assert_eq!(parsed.format, SourceFormat::Json, "document: {}", doc);
            assert!(parsed.tasks.is_empty(), "document: {}", doc);
        }
    }

    #[test]
    fn json_tasks_not_an_array_yields_nothing() {
        assert!(parse_tasks(r#"{"tasks": "abc"}"#).tasks.is_empty());
        assert!(parse_tasks(r#"{"tasks": null}"#).tasks.is_empty());
        assert!(parse_tasks(r#"{"tasks": {"a": 1}}"#).tasks.is_empty());
    }

    #[test]
    fn json_duplicate_key_keeps_last() {
        let parsed = parse_tasks(r#"{"tasks": ["old"], "tasks": ["new"]}"#);
        assert_eq!(parsed.tasks, vec!["new"]);
    }

    #[test]
    fn malformed_json_falls_back_to_lines() {
        let parsed = parse_tasks("{\"tasks\": [\nbuy milk");
        assert_eq!(parsed.format, SourceFormat::Text);
        assert_eq!(parsed.tasks, vec!["{\"tasks\": [", "buy milk"]);
    }

    #[test]
    fn text_lines_are_trimmed_and_blanks_dropped() {
        let parsed = parse_tasks("  first  \n\n\t\nsecond\n   \nthird\n");
        assert_eq!(parsed.format, SourceFormat::Text);
        assert_eq!(parsed.tasks, vec!["first", "second", "third"]);
    }

    #[test]
    fn text_crlf_line_endings() {
        let parsed = parse_tasks("one\r\ntwo\r\n\r\nthree");
        assert_eq!(parsed.tasks, vec!["one", "two", "three"]);
    }

    #[test]
    fn empty_content_is_text_with_no_tasks() {
        let parsed = parse_tasks("");
        assert_eq!(parsed.format, SourceFormat::Text);
        assert!(parsed.tasks.is_empty());
    }

    #[test]
    fn bare_word_is_read_as_text() {
        // A single word is not valid JSON, so it is read as one line
        let parsed = parse_tasks("tasks");
        assert_eq!(parsed.format, SourceFormat::Text);
        assert_eq!(parsed.tasks, vec!["tasks"]);
    }

    #[test]
    fn missing_file_loads_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let tasks = load_tasks(&dir.path().join("nope.txt"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let err = try_load_tasks(&path).unwrap_err();
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn invalid_utf8_loads_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();
        assert!(load_tasks(&path).is_empty());
        assert!(matches!(try_load_tasks(&path), Err(LoadError::Read { .. })));
    }
}
