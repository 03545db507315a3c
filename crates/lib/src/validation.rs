//! Required-field and pattern validation.
//!
//! Validation never fails: a pattern that does not compile is treated as
//! matching everything, so a bad rule written by the form author cannot lock
//! the person filling in the form out of a field.

use std::fmt;

use fancy_regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    field::{
        Field, FieldType,
        value::{display_string, is_blank, is_truthy},
    },
    path::build_path,
};

/// Message used when a field fails its pattern and has no custom message.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Invalid value format";

/// Tests `value` against an unanchored pattern.
///
/// Returns true when there is no pattern, when the pattern matches anywhere in
/// the value, or when the pattern does not compile. Lookaround and
/// backreferences are supported. A match that gives up on its backtracking
/// limit also counts as passing.
pub fn validate_field_value(value: &str, regex: Option<&str>) -> bool {
    let Some(pattern) = regex.filter(|p| !p.is_empty()) else {
        return true;
    };
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => {
            debug!(pattern, error = %err, "ignoring pattern that does not compile");
            return true;
        }
    };
    re.is_match(value).unwrap_or_else(|err| {
        debug!(pattern, error = %err, "ignoring pattern that failed to run");
        true
    })
}

/// Returns true if the field holds an acceptable value.
///
/// Containers always count as filled. A text field with a pattern and a
/// non-empty value must match the pattern. Otherwise any value other than
/// unset, `null` or `""` counts, including `0` and `false`.
pub fn has_value(field: &Field) -> bool {
    if field.field_type.is_container() {
        return true;
    }
    if field.field_type == FieldType::Text
        && let Some(regex) = field.regex.as_deref().filter(|r| !r.is_empty())
        && let Some(value) = field.value.as_ref().filter(|v| is_truthy(v))
    {
        return validate_field_value(&display_string(value), Some(regex));
    }
    !is_blank(field.value.as_ref())
}

/// Checks a value about to be written into `field`.
///
/// Returns the field's validation message, or [`DEFAULT_VALIDATION_MESSAGE`],
/// when the field has a pattern the value does not match.
pub fn check_value(field: &Field, value: &Value) -> Option<String> {
    let regex = field.regex.as_deref()?;
    if validate_field_value(&display_string(value), Some(regex)) {
        return None;
    }
    Some(
        field
            .validation_message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_VALIDATION_MESSAGE.to_string()),
    )
}

/// Why a required field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingStatus {
    /// No value, `null` or `""`.
    Empty,
    /// A value that fails the field's pattern.
    Invalid,
}

impl fmt::Display for MissingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingStatus::Empty => f.write_str("empty"),
            MissingStatus::Invalid => f.write_str("invalid"),
        }
    }
}

/// A required field that does not hold an acceptable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub display_name: String,
    pub path: String,
    pub status: MissingStatus,
}

/// Renders as `Title (full.path) - status`.
impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.display_name, self.path, self.status)
    }
}

/// Result of validating a whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub missing: Vec<String>,
}

/// All required fields lacking a value, in depth-first order.
pub fn missing_fields(fields: &[Field]) -> Vec<MissingField> {
    let mut missing = Vec::new();
    collect_missing(fields, "", &mut missing);
    missing
}

fn collect_missing(fields: &[Field], parent: &str, out: &mut Vec<MissingField>) {
    for field in fields {
        let path = build_path(parent, &field.name);

        if field.is_required() && !has_value(field) {
            let status = if is_blank(field.value.as_ref()) {
                MissingStatus::Empty
            } else {
                MissingStatus::Invalid
            };
            out.push(MissingField {
                display_name: field.display_name().to_string(),
                path: path.clone(),
                status,
            });
        }

        if let Some(children) = field.children.as_deref() {
            collect_missing(children, &path, out);
        }
    }
}

/// Validates every required field in the tree.
pub fn validate_required_fields(fields: &[Field]) -> ValidationReport {
    let missing: Vec<String> = missing_fields(fields).iter().map(ToString::to_string).collect();
    ValidationReport {
        valid: missing.is_empty(),
        missing,
    }
}
