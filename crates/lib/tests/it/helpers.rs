use std::sync::atomic::{AtomicI64, Ordering};

use formtree::{Clock, Field, FieldType};
use serde_json::Value;

/// A text field with a value.
pub fn text(name: &str, value: &str) -> Field {
    Field::new(name, FieldType::Text).with_value(value)
}

/// An array whose items are text fields named by index.
pub fn text_array(name: &str, values: &[&str]) -> Field {
    let items = values
        .iter()
        .enumerate()
        .map(|(i, v)| text(&i.to_string(), v))
        .collect();
    Field::new(name, FieldType::Array).with_children(items)
}

/// A small service configuration touching every field type.
pub fn service_config() -> Vec<Field> {
    vec![
        Field::new("service", FieldType::Object)
            .with_title("Service")
            .with_children(vec![
                text("name", "billing")
                    .with_title("Service Name")
                    .with_regex("^[a-z][a-z0-9-]*$")
                    .required(),
                Field::new("replicas", FieldType::Number).with_value(3),
                Field::new("public", FieldType::Boolean).with_value(false),
                Field::new("tier", FieldType::Enum)
                    .with_value("gold")
                    .with_description("Support tier"),
                Field::new("regions", FieldType::Multiselect)
                    .with_value(serde_json::json!(["eu", "us"])),
            ]),
        text_array("tags", &["a", "b", "c"]).with_max_items(4),
        Field::new("owners", FieldType::Array).with_children(vec![
            Field::new("0", FieldType::Object).with_children(vec![
                text("email", "ops@example.com").with_title("Owner e-mail"),
                Field::new("pager", FieldType::Boolean).with_value(true),
            ]),
        ]),
    ]
}

/// Names of the children of a field, in order.
pub fn child_names(field: &Field) -> Vec<String> {
    field.children().iter().map(|c| c.name.clone()).collect()
}

/// Values of the children of a field, in order.
pub fn child_values(field: &Field) -> Vec<Option<Value>> {
    field.children().iter().map(|c| c.value.clone()).collect()
}

/// Every path in a tree, depth first.
pub fn all_paths(fields: &[Field]) -> Vec<String> {
    fn walk(fields: &[Field], parent: &str, out: &mut Vec<String>) {
        for field in fields {
            let path = formtree::path::build_path(parent, &field.name);
            out.push(path.clone());
            walk(field.children(), &path, out);
        }
    }
    let mut out = Vec::new();
    walk(fields, "", &mut out);
    out
}

/// A clock that advances by one second every time it is read.
#[derive(Debug)]
pub struct StepClock(AtomicI64);

impl StepClock {
    pub fn starting_at(millis: i64) -> Self {
        Self(AtomicI64::new(millis))
    }
}

impl Clock for StepClock {
    fn now_millis(&self) -> i64 {
        self.0.fetch_add(1_000, Ordering::SeqCst)
    }
}
