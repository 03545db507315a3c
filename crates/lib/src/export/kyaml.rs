//! KYAML: the flow-style YAML dialect used by Kubernetes.
//!
//! Every collection is written in flow style with one entry per line and a
//! trailing comma, string values are always double-quoted, and keys are left
//! bare unless a YAML parser could read them as something other than a
//! string. A list made only of non-empty mappings is "cuddled" so each
//! mapping opens on the line of the previous one's closing brace.

use std::fmt::{self, Write};

use serde_json::{Map, Value};

const INDENT: &str = "  ";

/// Writes `data` as a complete KYAML document.
pub(super) fn write_document(out: &mut String, data: &Map<String, Value>) -> fmt::Result {
    out.push_str("---\n");
    write_object(out, data, 0)?;
    out.push('\n');
    Ok(())
}

fn write_value(out: &mut String, value: &Value, depth: usize) -> fmt::Result {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => write!(out, "{b}")?,
        Value::Number(n) => write!(out, "{n}")?,
        Value::String(s) => write_quoted(out, s)?,
        Value::Array(items) => write_array(out, items, depth)?,
        Value::Object(map) => write_object(out, map, depth)?,
    }
    Ok(())
}

fn write_object(out: &mut String, map: &Map<String, Value>, depth: usize) -> fmt::Result {
    if map.is_empty() {
        out.push_str("{}");
        return Ok(());
    }
    out.push_str("{\n");
    write_entries(out, map, depth + 1)?;
    pad(out, depth);
    out.push('}');
    Ok(())
}

fn write_entries(out: &mut String, map: &Map<String, Value>, depth: usize) -> fmt::Result {
    for (key, value) in map {
        pad(out, depth);
        write_key(out, key)?;
        out.push_str(": ");
        write_value(out, value, depth)?;
        out.push_str(",\n");
    }
    Ok(())
}

fn write_array(out: &mut String, items: &[Value], depth: usize) -> fmt::Result {
    if items.is_empty() {
        out.push_str("[]");
        return Ok(());
    }

    let mappings: Option<Vec<&Map<String, Value>>> = items
        .iter()
        .map(|item| item.as_object().filter(|map| !map.is_empty()))
        .collect();

    if let Some(mappings) = mappings {
        out.push('[');
        for (i, map) in mappings.into_iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str("{\n");
            write_entries(out, map, depth + 1)?;
            pad(out, depth);
            out.push('}');
        }
        out.push(']');
        return Ok(());
    }

    out.push_str("[\n");
    for item in items {
        pad(out, depth + 1);
        write_value(out, item, depth + 1)?;
        out.push_str(",\n");
    }
    pad(out, depth);
    out.push(']');
    Ok(())
}

fn write_key(out: &mut String, key: &str) -> fmt::Result {
    if is_bare_key(key) {
        out.push_str(key);
        Ok(())
    } else {
        write_quoted(out, key)
    }
}

/// Keys that every YAML version reads back as the same plain string.
fn is_bare_key(key: &str) -> bool {
    const AMBIGUOUS: [&str; 11] = [
        "y", "n", "yes", "no", "on", "off", "true", "false", "null", "nan", "inf",
    ];

    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/'))
        && !AMBIGUOUS.contains(&key.to_ascii_lowercase().as_str())
}

fn write_quoted(out: &mut String, s: &str) -> fmt::Result {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            // Control characters and the characters YAML treats as line breaks
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}') => {
                write!(out, "\\u{:04X}", u32::from(c))?
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(())
}

fn pad(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
