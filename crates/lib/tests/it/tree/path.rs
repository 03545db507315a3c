use formtree::path::{build_path, field_name, parent_path, parse_path};

use crate::helpers::*;

#[test]
fn test_parent_and_name_rebuild_every_path() {
    for path in all_paths(&service_config()) {
        assert_eq!(build_path(parent_path(&path), field_name(&path)), path);
    }
}

#[test]
fn test_parse_matches_depth() {
    for path in all_paths(&service_config()) {
        let parts = parse_path(&path);
        assert_eq!(parts.join("."), path);
        assert_eq!(parts.len(), formtree::path::path_depth(&path));
    }
}
