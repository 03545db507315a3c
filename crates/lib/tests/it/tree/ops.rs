use formtree::{
    FieldType,
    tree::{add_item_to_array, find_field_by_path, remove_item_from_array, update_field_value},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_remove_second_tag_scenario() {
    let tree = vec![text_array("tags", &["a", "b"])];
    let updated = remove_item_from_array(&tree, "tags", "tags.1");
    assert_eq!(child_names(&updated[0]), vec!["0"]);
    assert_eq!(child_values(&updated[0]), vec![Some(json!("a"))]);
}

#[test]
fn test_remove_reindexes_from_every_position() {
    let values = ["a", "b", "c", "d", "e"];
    for removed in 1..values.len() {
        let tree = vec![text_array("items", &values)];
        let updated = remove_item_from_array(&tree, "items", &format!("items.{removed}"));

        let expected_names: Vec<String> = (0..values.len() - 1).map(|i| i.to_string()).collect();
        assert_eq!(child_names(&updated[0]), expected_names);

        let expected_values: Vec<_> = values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != removed)
            .map(|(_, v)| Some(json!(v)))
            .collect();
        assert_eq!(child_values(&updated[0]), expected_values);
    }
}

#[test]
fn test_add_never_exceeds_max_items() {
    let mut tree = service_config();
    for _ in 0..10 {
        tree = add_item_to_array(&tree, "tags");
        let tags = find_field_by_path(&tree, "tags").unwrap();
        assert!(tags.children().len() <= 4);
    }
    let tags = find_field_by_path(&tree, "tags").unwrap();
    assert_eq!(child_names(tags), vec!["0", "1", "2", "3"]);
    assert_eq!(tags.children()[3].value, Some(json!("")));
}

#[test]
fn test_add_object_item_resets_nested_values() {
    let tree = add_item_to_array(&service_config(), "owners");
    let item = find_field_by_path(&tree, "owners.1").unwrap();
    assert_eq!(item.field_type, FieldType::Object);
    assert_eq!(find_field_by_path(&tree, "owners.1.email").unwrap().value, Some(json!("")));
    assert_eq!(find_field_by_path(&tree, "owners.1.pager").unwrap().value, Some(json!(false)));
    // The template keeps its values
    assert_eq!(
        find_field_by_path(&tree, "owners.0.email").unwrap().value,
        Some(json!("ops@example.com"))
    );
}

#[test]
fn test_add_then_update_new_item_leaves_template_alone() {
    let tree = add_item_to_array(&service_config(), "owners");
    let tree = update_field_value(&tree, "owners.1.email", json!("dev@example.com"));
    assert_eq!(
        find_field_by_path(&tree, "owners.0.email").unwrap().value,
        Some(json!("ops@example.com"))
    );
    assert_eq!(
        find_field_by_path(&tree, "owners.1.email").unwrap().value,
        Some(json!("dev@example.com"))
    );
}

#[test]
fn test_structural_no_ops() {
    let tree = service_config();
    assert_eq!(update_field_value(&tree, "service.missing", json!(1)), tree);
    assert_eq!(add_item_to_array(&tree, "service"), tree);
    assert_eq!(remove_item_from_array(&tree, "tags", "tags.0"), tree);
    assert_eq!(remove_item_from_array(&tree, "tags", "owners.0"), tree);
}
