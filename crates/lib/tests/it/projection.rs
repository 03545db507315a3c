use formtree::{
    FieldType,
    export::{to_json_pretty, to_kyaml, to_yaml},
    projection::{build_data_structure, yaml_to_fields},
};
use serde_json::{Value, json};

use crate::helpers::*;

#[test]
fn test_service_config_projection() {
    let data = Value::Object(build_data_structure(&service_config()));
    assert_eq!(
        data,
        json!({
            "service": {
                "name": "billing",
                "replicas": 3,
                "public": false,
                "tier": "gold",
                "regions": ["eu", "us"]
            },
            "tags": ["a", "b", "c"],
            "owners": [{"email": "ops@example.com", "pager": true}]
        })
    );
}

#[test]
fn test_yaml_to_fields_scenario() {
    let Value::Object(map) = json!({"a": 1, "b": [1, "x", true]}) else {
        unreachable!()
    };
    let fields = yaml_to_fields(&map);

    assert_eq!(fields[0].name, "a");
    assert_eq!(fields[0].field_type, FieldType::Number);
    assert_eq!(fields[0].value, Some(json!(1)));

    assert_eq!(fields[1].name, "b");
    assert_eq!(fields[1].field_type, FieldType::Array);
    let types: Vec<_> = fields[1].children().iter().map(|c| c.field_type).collect();
    assert_eq!(types, vec![FieldType::Number, FieldType::Text, FieldType::Boolean]);
}

#[test]
fn test_exports_agree_with_projection() {
    let tree = service_config();
    let data = Value::Object(build_data_structure(&tree));

    let from_json: Value = serde_json::from_str(&to_json_pretty(&tree).unwrap()).unwrap();
    assert_eq!(from_json, data);

    let from_yaml: Value = serde_yaml::from_str(&to_yaml(&tree).unwrap()).unwrap();
    assert_eq!(from_yaml, data);

    let from_kyaml: Value = serde_yaml::from_str(&to_kyaml(&tree).unwrap()).unwrap();
    assert_eq!(from_kyaml, data);
}

#[test]
fn test_kyaml_layout() {
    let kyaml = to_kyaml(&service_config()).unwrap();
    assert!(kyaml.starts_with("---\n{\n  service: {\n    name: \"billing\",\n"));
    assert!(kyaml.contains("    regions: [\n      \"eu\",\n      \"us\",\n    ],\n"));
    assert!(kyaml.contains(
        "  owners: [{\n    email: \"ops@example.com\",\n    pager: true,\n  }],\n"
    ));
    assert!(kyaml.ends_with("}\n"));
}

#[test]
fn test_yaml_export_then_import_keeps_data() {
    let tree = service_config();
    let yaml = to_yaml(&tree).unwrap();
    let imported = formtree::import::import_yaml(&yaml).unwrap();
    assert_eq!(build_data_structure(&imported), build_data_structure(&tree));
}
