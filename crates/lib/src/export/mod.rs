//! Text renderings of a tree's data projection.

use serde_json::Value;

use crate::{Result, field::Field, projection::build_data_structure};

mod kyaml;

/// Pretty-printed JSON of the data projection, indented by two spaces.
pub fn to_json_pretty(fields: &[Field]) -> Result<String> {
    let data = Value::Object(build_data_structure(fields));
    Ok(serde_json::to_string_pretty(&data)?)
}

/// YAML of the data projection.
///
/// Block style with two-space indentation for mappings. Sequence items sit at
/// the same column as their parent key. Repeated values are written out in
/// full since the emitter never produces anchors or aliases.
pub fn to_yaml(fields: &[Field]) -> Result<String> {
    let data = Value::Object(build_data_structure(fields));
    Ok(serde_yaml::to_string(&data)?)
}

/// KYAML of the data projection: a `---` document holding flow-style
/// collections with double-quoted strings and trailing commas.
pub fn to_kyaml(fields: &[Field]) -> Result<String> {
    let mut out = String::new();
    kyaml::write_document(&mut out, &build_data_structure(fields))?;
    Ok(out)
}
