//! Value updates and array item management.
//!
//! Array items are named by position (`"0"`, `"1"`, ...) and the first item is
//! the template new items are cloned from. The removal policy keeps that
//! template in place: the item at index 0 is never removed, which also means an
//! array never drops to zero items.

use serde_json::Value;
use tracing::debug;

use super::search::find_field_mut;
use crate::{
    field::{Field, FieldType, value::is_truthy},
    path::build_path,
};

/// Returns a copy of `fields` with the value at `target_path` replaced.
///
/// Unknown paths leave the tree unchanged.
pub fn update_field_value(fields: &[Field], target_path: &str, new_value: Value) -> Vec<Field> {
    let mut updated = fields.to_vec();
    match find_field_mut(&mut updated, target_path) {
        Some(field) => field.value = Some(new_value),
        None => debug!(path = target_path, "update ignored: no field at path"),
    }
    updated
}

/// The empty value for a field type: `""` for text and enum, `0` for numbers,
/// `false` for booleans, `[]` for multiselect and `None` for containers.
pub fn default_value_for_type(field_type: FieldType) -> Option<Value> {
    field_type.default_value()
}

/// Recursively resets every scalar value in `field` to its empty value.
///
/// Numbers keep an already-set non-zero value so that authored defaults in an
/// array template carry over to new items. Container values are left as they
/// are; their children are reset.
pub fn reset_field_values(field: &Field) -> Field {
    let mut reset = field.clone();
    reset_in_place(&mut reset);
    reset
}

fn reset_in_place(field: &mut Field) {
    match field.field_type {
        FieldType::Number => {
            if !field.value.as_ref().is_some_and(is_truthy) {
                field.value = Some(Value::from(0));
            }
        }
        FieldType::Text | FieldType::Boolean | FieldType::Enum | FieldType::Multiselect => {
            field.value = field.field_type.default_value();
        }
        FieldType::Object | FieldType::Array => {}
    }

    if let Some(children) = field.children.as_mut() {
        children.iter_mut().for_each(reset_in_place);
    }
}

/// Builds a new array item from a template, named by its index, with every
/// value reset.
pub fn create_array_item(template: &Field, index: usize) -> Field {
    let mut item = template.clone();
    item.name = index.to_string();
    reset_in_place(&mut item);
    item
}

/// Appends a fresh item to the array at `array_path`.
///
/// The new item is cloned from the first child. This is a no-op when the path
/// does not address an array, when the array has no template item, or when it
/// already holds `maxItems` items.
pub fn add_item_to_array(fields: &[Field], array_path: &str) -> Vec<Field> {
    let mut updated = fields.to_vec();

    let Some(array) = array_mut(&mut updated, array_path) else {
        debug!(path = array_path, "add ignored: no array at path");
        return updated;
    };
    let limit = array.item_limit();
    let Some(children) = array.children.as_mut() else {
        debug!(path = array_path, "add ignored: array has no template item");
        return updated;
    };

    if let Some(limit) = limit
        && children.len() >= limit
    {
        debug!(path = array_path, limit, "add ignored: array is at maxItems");
        return updated;
    }

    let Some(template) = children.first() else {
        debug!(path = array_path, "add ignored: array has no template item");
        return updated;
    };

    let item = create_array_item(template, children.len());
    children.push(item);
    updated
}

/// Removes the item at `item_path` from the array at `array_path` and
/// renames the remaining items to `"0".."n-1"` by position.
///
/// The template item at index 0 is protected, so removing it (or removing the
/// only item) is a no-op, as is an `item_path` that names no item of the array.
pub fn remove_item_from_array(fields: &[Field], array_path: &str, item_path: &str) -> Vec<Field> {
    let mut updated = fields.to_vec();

    let Some(children) = array_mut(&mut updated, array_path).and_then(|f| f.children.as_mut())
    else {
        debug!(path = array_path, "remove ignored: no array at path");
        return updated;
    };

    let Some(index) = children
        .iter()
        .position(|child| build_path(array_path, &child.name) == item_path)
    else {
        debug!(path = item_path, "remove ignored: no such array item");
        return updated;
    };

    if index == 0 {
        debug!(path = item_path, "remove ignored: template item is protected");
        return updated;
    }

    children.remove(index);
    for (position, child) in children.iter_mut().enumerate() {
        child.name = position.to_string();
    }
    updated
}

fn array_mut<'a>(fields: &'a mut [Field], array_path: &str) -> Option<&'a mut Field> {
    find_field_mut(fields, array_path).filter(|field| field.field_type == FieldType::Array)
}
