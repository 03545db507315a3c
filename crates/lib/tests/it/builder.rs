use formtree::{
    FieldType, FormBuilder,
    draft::{DraftStore, InMemoryDraftStore},
    share::StaticEnvironment,
    templates::example_form,
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_editing_session() {
    let mut builder = FormBuilder::new(example_form());
    assert!(!builder.validation().valid);

    builder.update_value("appConfig.serviceName", json!("checkout"));
    builder.update_value("appConfig.environment", json!("staging"));
    assert_eq!(builder.validation_error(), None);
    assert!(builder.validation().valid);

    builder.add_array_item("appConfig.endpoints");
    builder.update_value("appConfig.endpoints.1.path", json!("/api/orders"));
    builder.add_array_item("appConfig.endpoints");
    builder.remove_array_item("appConfig.endpoints", "appConfig.endpoints.1");

    let data: serde_json::Value = serde_json::from_str(&builder.json_output().unwrap()).unwrap();
    assert_eq!(data["appConfig"]["serviceName"], json!("checkout"));
    let endpoints = data["appConfig"]["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0]["path"], json!("/api/users"));
    assert_eq!(endpoints[1]["path"], json!(""));

    assert!(builder.yaml_output().contains("serviceName: checkout"));
    assert!(builder.kyaml_output().contains("    serviceName: \"checkout\",\n"));
}

#[test]
fn test_share_draft_and_reopen() {
    let mut builder = FormBuilder::new(service_config());
    builder.update_value("service.replicas", json!(5));
    let link = builder
        .share_link(&StaticEnvironment::default(), Some("Billing"), Some("Service settings"))
        .unwrap();

    let store = InMemoryDraftStore::new();
    builder.save_draft(&store);
    assert!(store.has_draft());

    let mut from_link = FormBuilder::default();
    let (name, description) = from_link.open_shared(&link).unwrap();
    assert_eq!(name, "Billing");
    assert_eq!(description.as_deref(), Some("Service settings"));

    let mut from_draft = FormBuilder::default();
    assert!(from_draft.restore_draft(&store));
    assert_eq!(from_link.fields(), from_draft.fields());
}

#[test]
fn test_filter_and_outline() {
    let mut builder = FormBuilder::new(service_config());
    let filtered = builder.filtered("pager");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "owners");

    builder.expand_all();
    assert_eq!(builder.expanded(), ["service", "tags", "owners", "owners.0"]);
    builder.toggle_expanded("tags");
    assert_eq!(builder.expanded(), ["service", "owners", "owners.0"]);
    builder.collapse_all();
    assert!(builder.expanded().is_empty());

    builder.select("owners.0.email");
    assert_eq!(builder.expanded(), ["owners", "owners.0"]);
}

#[test]
fn test_imports_replace_tree() {
    let mut builder = FormBuilder::new(service_config());
    builder.select("service.name");

    builder.import_yaml("debug: true\n").unwrap();
    assert_eq!(builder.fields().len(), 1);
    assert_eq!(builder.fields()[0].field_type, FieldType::Boolean);
    assert_eq!(builder.selected_path(), None);

    assert!(builder.import_json("[]").unwrap().is_empty());
    assert!(builder.import_yaml("- not a mapping").is_err());
    assert!(builder.fields().is_empty());
}
