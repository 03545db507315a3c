//! Expansion state for an outline view of the tree.
//!
//! The expanded set is a list of paths of container fields. These helpers
//! compute and update it without touching the tree itself.

use crate::{
    field::Field,
    path::{ancestor_paths, build_path, is_strict_descendant},
};

/// Paths of fields with children, down to `levels` levels deep.
///
/// `levels == 1` returns only the expandable fields at the root.
pub fn expandable_paths(fields: &[Field], levels: usize) -> Vec<String> {
    let mut paths = Vec::new();
    collect_expandable(fields, "", Some(levels), &mut paths);
    paths
}

/// Paths of every field with children, at any depth.
pub fn all_expandable_paths(fields: &[Field]) -> Vec<String> {
    let mut paths = Vec::new();
    collect_expandable(fields, "", None, &mut paths);
    paths
}

fn collect_expandable(
    fields: &[Field],
    parent: &str,
    levels: Option<usize>,
    out: &mut Vec<String>,
) {
    if levels == Some(0) {
        return;
    }
    for field in fields {
        let children = field.children();
        if children.is_empty() {
            continue;
        }
        let path = build_path(parent, &field.name);
        out.push(path.clone());
        collect_expandable(children, &path, levels.map(|l| l - 1), out);
    }
}

/// Expanded set with every container open.
pub fn expand_all(fields: &[Field]) -> Vec<String> {
    all_expandable_paths(fields)
}

/// Expanded set with everything closed.
pub fn collapse_all() -> Vec<String> {
    Vec::new()
}

pub fn is_expanded(path: &str, expanded: &[String]) -> bool {
    expanded.iter().any(|p| p == path)
}

/// Opens `path` if closed, closes it if open.
pub fn toggle_expansion(path: &str, expanded: &[String]) -> Vec<String> {
    if is_expanded(path, expanded) {
        expanded.iter().filter(|p| *p != path).cloned().collect()
    } else {
        let mut toggled = expanded.to_vec();
        toggled.push(path.to_string());
        toggled
    }
}

/// Adds every ancestor of `path` to the expanded set so the field is visible.
///
/// Existing entries keep their order; new ancestors are appended outermost
/// first and duplicates are not introduced.
pub fn expand_parents(path: &str, expanded: &[String]) -> Vec<String> {
    let mut result = expanded.to_vec();
    for ancestor in ancestor_paths(path) {
        if !is_expanded(&ancestor, &result) {
            result.push(ancestor);
        }
    }
    result
}

/// Returns true if any descendant of `path` is expanded.
pub fn has_expanded_children(path: &str, expanded: &[String]) -> bool {
    expanded.iter().any(|p| is_strict_descendant(p, path))
}
