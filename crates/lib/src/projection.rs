//! Conversion between field trees and plain data.
//!
//! [`build_data_structure`] projects a tree onto the nested objects, arrays
//! and scalars that users actually want as YAML or JSON. [`yaml_to_fields`]
//! goes the other way for imports, inferring a field type from each value.
//! The inverse is lossy: enum, multiselect and validation settings cannot be
//! recovered from plain data.

use serde_json::{Map, Value};

use crate::field::{Field, FieldType};

/// Projects a tree onto plain data keyed by field name.
///
/// Objects with children become nested objects. Arrays with children become
/// sequences whose elements are the nested object of an `object` item or the
/// raw value of any other item. Every other field contributes its value, with
/// an unset value written as `null`.
pub fn build_data_structure(fields: &[Field]) -> Map<String, Value> {
    let mut data = Map::new();
    for field in fields {
        let projected = match (field.field_type, field.children.as_deref()) {
            (FieldType::Object, Some(children)) => Value::Object(build_data_structure(children)),
            (FieldType::Array, Some(items)) => {
                Value::Array(items.iter().map(project_item).collect())
            }
            _ => field.value.clone().unwrap_or(Value::Null),
        };
        data.insert(field.name.clone(), projected);
    }
    data
}

fn project_item(item: &Field) -> Value {
    match (item.field_type, item.children.as_deref()) {
        (FieldType::Object, Some(children)) => Value::Object(build_data_structure(children)),
        _ => item.value.clone().unwrap_or(Value::Null),
    }
}

/// Infers a field tree from a plain object, such as a parsed YAML document.
///
/// Nested objects become `object` fields. Sequences become `array` fields
/// whose items are named by index; object items (and nested sequences, whose
/// elements are keyed by index) become `object` items, anything else a scalar
/// item holding the element as its value.
pub fn yaml_to_fields(obj: &Map<String, Value>) -> Vec<Field> {
    fields_from_entries(obj.iter().map(|(key, value)| (key.clone(), value)))
}

fn fields_from_entries<'a>(entries: impl Iterator<Item = (String, &'a Value)>) -> Vec<Field> {
    entries
        .map(|(name, value)| {
            let field = Field::new(name, infer_type(value));
            match value {
                Value::Object(map) => field.with_children(yaml_to_fields(map)),
                Value::Array(items) => field.with_children(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| array_item(index, item))
                        .collect(),
                ),
                scalar => field.with_value(scalar.clone()),
            }
        })
        .collect()
}

fn array_item(index: usize, item: &Value) -> Field {
    let name = index.to_string();
    match item {
        Value::Object(map) => {
            Field::new(name, FieldType::Object).with_children(yaml_to_fields(map))
        }
        Value::Array(elements) => Field::new(name, FieldType::Object).with_children(
            fields_from_entries(elements.iter().enumerate().map(|(i, v)| (i.to_string(), v))),
        ),
        scalar => Field::new(name, infer_type(scalar)).with_value(scalar.clone()),
    }
}

/// The field type a plain value maps to.
pub fn infer_type(value: &Value) -> FieldType {
    match value {
        Value::Array(_) => FieldType::Array,
        Value::Object(_) => FieldType::Object,
        Value::Bool(_) => FieldType::Boolean,
        Value::Number(_) => FieldType::Number,
        Value::String(_) | Value::Null => FieldType::Text,
    }
}
