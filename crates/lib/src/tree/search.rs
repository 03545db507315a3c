//! Lookup and filtering over field trees.

use crate::{
    field::Field,
    path::{build_path, is_strict_descendant},
};

/// Depth-first search for the field whose computed path equals `path`.
pub fn find_field_by_path<'a>(fields: &'a [Field], path: &str) -> Option<&'a Field> {
    find_in(fields, path, "")
}

fn find_in<'a>(fields: &'a [Field], path: &str, parent: &str) -> Option<&'a Field> {
    for field in fields {
        let current = build_path(parent, &field.name);
        if current == path {
            return Some(field);
        }
        if let Some(children) = field.children.as_deref()
            && let Some(found) = find_in(children, path, &current)
        {
            return Some(found);
        }
    }
    None
}

/// Mutable lookup used by the tree operations on their working copy.
///
/// Only descends into subtrees that can contain `path`.
pub(crate) fn find_field_mut<'a>(fields: &'a mut [Field], path: &str) -> Option<&'a mut Field> {
    find_in_mut(fields, path, "")
}

fn find_in_mut<'a>(fields: &'a mut [Field], path: &str, parent: &str) -> Option<&'a mut Field> {
    for field in fields.iter_mut() {
        let current = build_path(parent, &field.name);
        if current == path {
            return Some(field);
        }
        if is_strict_descendant(path, &current)
            && let Some(children) = field.children.as_mut()
            && let Some(found) = find_in_mut(children, path, &current)
        {
            return Some(found);
        }
    }
    None
}

/// Filters a tree by a case-insensitive search query.
///
/// A field is kept when its name, title or description contains the query, or
/// when any descendant does. If some children match, the kept field carries
/// only those children; a field that matches on its own with no matching
/// children keeps all of them. A blank query returns the tree unchanged.
pub fn filter_fields(fields: &[Field], query: &str) -> Vec<Field> {
    if query.trim().is_empty() {
        return fields.to_vec();
    }
    filter_matching(fields, &query.to_lowercase())
}

fn filter_matching(fields: &[Field], needle: &str) -> Vec<Field> {
    fields
        .iter()
        .filter_map(|field| {
            let matching_children = field
                .children
                .as_deref()
                .map(|children| filter_matching(children, needle))
                .unwrap_or_default();

            if !matching_children.is_empty() {
                let mut kept = field.clone();
                kept.children = Some(matching_children);
                Some(kept)
            } else if matches_query(field, needle) {
                Some(field.clone())
            } else {
                None
            }
        })
        .collect()
}

fn matches_query(field: &Field, needle: &str) -> bool {
    let contains = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(needle));
    contains(Some(&field.name))
        || contains(field.title.as_deref())
        || contains(field.description.as_deref())
}
