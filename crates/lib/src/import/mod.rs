//! Importing field trees from JSON and YAML text.
//!
//! JSON import expects a serialized field tree: a top-level array of field
//! objects, each with a `name` and a `type`, whose `children` (when present)
//! obey the same rule. The whole import is rejected if any field is
//! malformed.
//!
//! YAML import accepts any mapping and infers a tree from the data with
//! [`yaml_to_fields`]. Merge keys (`<<`) are resolved first. Type
//! information beyond what the values themselves carry is lost.

use std::{fmt, str::FromStr};

use serde_json::Value;
use tracing::debug;

use crate::{
    field::{Field, FieldType, value::is_truthy},
    projection::yaml_to_fields,
};

mod errors;

pub use errors::ImportError;

/// Text formats a tree can be imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Json,
    Yaml,
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportFormat::Json => f.write_str("json"),
            ImportFormat::Yaml => f.write_str("yaml"),
        }
    }
}

impl FromStr for ImportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ImportFormat::Json),
            "yaml" | "yml" => Ok(ImportFormat::Yaml),
            other => Err(format!("unknown import format '{other}'")),
        }
    }
}

/// Imports `text` in the given format.
pub fn import(text: &str, format: ImportFormat) -> Result<Vec<Field>, ImportError> {
    match format {
        ImportFormat::Json => import_json(text),
        ImportFormat::Yaml => import_yaml(text),
    }
}

/// Parses a serialized field tree.
pub fn import_json(text: &str) -> Result<Vec<Field>, ImportError> {
    let parsed: Value = serde_json::from_str(text).map_err(|err| ImportError::InvalidJson {
        reason: err.to_string(),
    })?;

    let Value::Array(items) = parsed else {
        return Err(ImportError::NotAnArray);
    };

    for (index, item) in items.iter().enumerate() {
        check_structure(item, &format!("[{index}]"))?;
    }

    let fields = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Field>(item).map_err(|err| ImportError::InvalidFieldStructure {
                location: format!("[{index}]"),
                reason: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(fields = fields.len(), "imported field tree from JSON");
    Ok(fields)
}

/// Infers a field tree from a YAML mapping.
pub fn import_yaml(text: &str) -> Result<Vec<Field>, ImportError> {
    let invalid = |reason: String| ImportError::InvalidYaml { reason };

    let mut document: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|err| invalid(err.to_string()))?;
    document.apply_merge().map_err(|err| invalid(err.to_string()))?;
    let parsed = serde_json::to_value(document).map_err(|err| invalid(err.to_string()))?;

    let Value::Object(map) = parsed else {
        return Err(ImportError::NotAMapping);
    };

    let fields = yaml_to_fields(&map);
    debug!(fields = fields.len(), "imported field tree from YAML");
    Ok(fields)
}

/// Checks the structural contract for one element and its children.
fn check_structure(item: &Value, location: &str) -> Result<(), ImportError> {
    let invalid = |reason: &str| ImportError::InvalidFieldStructure {
        location: location.to_string(),
        reason: reason.to_string(),
    };

    let Value::Object(object) = item else {
        return Err(invalid("not an object"));
    };
    if !object.get("name").is_some_and(is_truthy) {
        return Err(invalid("missing name"));
    }
    let Some(type_value) = object.get("type").filter(|t| is_truthy(t)) else {
        return Err(invalid("missing type"));
    };
    let Some(type_name) = type_value.as_str() else {
        return Err(invalid("type must be a string"));
    };
    if let Err(err) = type_name.parse::<FieldType>() {
        return Err(invalid(&err.to_string()));
    }

    match object.get("children") {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(children)) => children
            .iter()
            .enumerate()
            .try_for_each(|(index, child)| {
                check_structure(child, &format!("{location}.children[{index}]"))
            }),
        Some(_) => Err(invalid("children must be an array")),
    }
}
