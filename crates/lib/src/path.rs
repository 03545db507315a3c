//! Dotted path addressing for field trees.
//!
//! Every field in a tree is addressed by the dot-joined `name`s from the root
//! down to the field, e.g. `database.host` or `items.0.label`. Array items are
//! named by their decimal index, so the path of the second item of `tags` is
//! `tags.1`.
//!
//! Paths are plain strings rather than a validated newtype: they round-trip
//! through UI state and share links unchanged, and the empty string stands for
//! the tree root.
//!
//! # Examples
//!
//! ```rust
//! use formtree::path::{build_path, field_name, parent_path};
//!
//! let path = build_path("user", "name");
//! assert_eq!(path, "user.name");
//! assert_eq!(parent_path(&path), "user");
//! assert_eq!(field_name(&path), "name");
//! ```

/// Separator between path components.
pub const SEPARATOR: char = '.';

/// Joins a parent path and a field name.
///
/// Returns `name` unchanged when `parent` is empty (root level).
pub fn build_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

/// Splits a path into its components.
///
/// The empty path parses to a single empty component, so callers that need to
/// treat the root specially must check for it themselves.
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Returns everything but the last component, or `""` for a single component.
pub fn parent_path(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(last_dot) => &path[..last_dot],
        None => "",
    }
}

/// Returns the last component of a path.
pub fn field_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(last_dot) => &path[last_dot + 1..],
        None => path,
    }
}

/// Returns true if `child` is `parent` itself or lies beneath it.
///
/// Everything is a child of the root (empty `parent`). Matching is by whole
/// components: `user.name` is a child of `user`, `username` is not.
pub fn is_child_path(child: &str, parent: &str) -> bool {
    if parent.is_empty() {
        return true;
    }
    child == parent || is_strict_descendant(child, parent)
}

/// Returns true if `path` lies strictly beneath `ancestor`.
pub(crate) fn is_strict_descendant(path: &str, ancestor: &str) -> bool {
    path.len() > ancestor.len()
        && path.starts_with(ancestor)
        && path[ancestor.len()..].starts_with(SEPARATOR)
}

/// Number of components in a path; `0` for the root.
pub fn path_depth(path: &str) -> usize {
    if path.is_empty() {
        0
    } else {
        path.split(SEPARATOR).count()
    }
}

/// All proper ancestors of a path, outermost first.
///
/// `a.b.c` yields `["a", "a.b"]`; a single-component path has none.
pub fn ancestor_paths(path: &str) -> Vec<String> {
    path.match_indices(SEPARATOR)
        .map(|(idx, _)| path[..idx].to_string())
        .collect()
}
