use formtree::{
    Field, FieldType,
    import::{ImportError, ImportFormat, import, import_json, import_yaml},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_json_import_round_trips_serialized_tree() {
    let tree = service_config();
    let text = serde_json::to_string_pretty(&tree).unwrap();
    assert_eq!(import_json(&text).unwrap(), tree);
}

#[test]
fn test_json_import_error_messages() {
    let err = import_json(r#""fields""#).unwrap_err();
    assert_eq!(err.to_string(), "JSON must be an array of field objects");

    let err = import_json(r#"[{"name": "a", "type": "object", "children": [{"type": "text"}]}]"#)
        .unwrap_err();
    assert!(matches!(err, ImportError::InvalidFieldStructure { .. }));
    assert!(
        err.to_string()
            .starts_with("Invalid field structure. Each field must have name and type properties.")
    );
    assert_eq!(err.location(), Some("[0].children[0]"));

    let err: formtree::Error = import_json("not json").unwrap_err().into();
    assert_eq!(err.module(), "import");
    assert!(err.is_serialization_error());
}

#[test]
fn test_json_import_keeps_unknown_keys_and_null_values() {
    let text = r#"[{"name": "a", "type": "text", "value": null, "uiHint": "wide"}]"#;
    let fields = import_json(text).unwrap();
    assert_eq!(fields[0].value, Some(serde_json::Value::Null));
    assert_eq!(fields[0].extra.get("uiHint"), Some(&json!("wide")));
    let reserialized = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        reserialized,
        json!([{"name": "a", "type": "text", "value": null, "uiHint": "wide"}])
    );
}

#[test]
fn test_yaml_import_infers_tree() {
    let yaml = "\
server:
  host: example.com
  port: 443
features:
  - name: auth
    enabled: true
  - name: cache
    enabled: false
";
    let fields = import_yaml(yaml).unwrap();
    assert_eq!(fields[0].field_type, FieldType::Object);
    assert_eq!(fields[0].children()[1].value, Some(json!(443)));

    let features = &fields[1];
    assert_eq!(features.field_type, FieldType::Array);
    assert_eq!(child_names(features), vec!["0", "1"]);
    let second: &Field = &features.children()[1];
    assert_eq!(second.field_type, FieldType::Object);
    assert_eq!(second.children()[1].value, Some(json!(false)));
}

#[test]
fn test_yaml_merge_keys_are_resolved() {
    let yaml = "\
defaults: &defaults
  timeout: 30
  retries: 3
services:
  - name: api
    <<: *defaults
    retries: 5
";
    let fields = import_yaml(yaml).unwrap();
    let api = &fields[1].children()[0];
    assert_eq!(child_names(api), vec!["name", "retries", "timeout"]);
    assert_eq!(api.children()[1].value, Some(json!(5)));
    assert_eq!(api.children()[2].value, Some(json!(30)));
}

#[test]
fn test_yaml_parse_error_surfaces_parser_message() {
    let err = import_yaml("a: [1, 2").unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().starts_with("Invalid YAML: "));
    assert!(err.to_string().len() > "Invalid YAML: ".len());
}

#[test]
fn test_import_dispatches_on_format() {
    assert_eq!(import("a: 1", ImportFormat::Yaml).unwrap().len(), 1);
    assert!(import("a: 1", ImportFormat::Json).unwrap_err().is_parse_error());
}
