//! Starter content: the bundled example form and quick-insert templates.

use serde::Serialize;
use serde_json::json;

use crate::field::{Field, FieldLink, FieldType, SelectOption};

/// Grouping of a template in the insert menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Basic,
}

/// A ready-made field offered for quick insertion while editing a tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldTemplate {
    pub label: &'static str,
    pub icon: &'static str,
    pub category: TemplateCategory,
    pub template: Field,
}

fn options(pairs: &[(&str, &str)]) -> Vec<SelectOption> {
    pairs
        .iter()
        .map(|(value, label)| SelectOption::new(*value, *label))
        .collect()
}

fn optional(mut field: Field) -> Field {
    field.required = Some(false);
    field
}

fn basic(label: &'static str, icon: &'static str, template: Field) -> FieldTemplate {
    FieldTemplate {
        label,
        icon,
        category: TemplateCategory::Basic,
        template,
    }
}

/// One template per field type.
pub fn basic_templates() -> Vec<FieldTemplate> {
    let choices = || {
        options(&[
            ("option1", "Option 1"),
            ("option2", "Option 2"),
            ("option3", "Option 3"),
        ])
    };

    vec![
        basic(
            "Text",
            "📝",
            optional(
                Field::new("fieldName", FieldType::Text)
                    .with_title("Field Title")
                    .with_placeholder("Enter value...")
                    .with_description("Field description"),
            ),
        ),
        basic(
            "Number",
            "🔢",
            optional(
                Field::new("fieldName", FieldType::Number)
                    .with_title("Field Title")
                    .with_value(0)
                    .with_description("Numeric value"),
            ),
        ),
        basic(
            "Boolean",
            "☑️",
            optional(
                Field::new("fieldName", FieldType::Boolean)
                    .with_title("Field Title")
                    .with_value(false)
                    .with_description("True/false toggle"),
            ),
        ),
        basic(
            "Enum",
            "📋",
            optional(
                Field::new("fieldName", FieldType::Enum)
                    .with_title("Field Title")
                    .with_placeholder("Select option...")
                    .with_description("Select one option")
                    .with_options(choices()),
            ),
        ),
        basic(
            "Multiselect",
            "☑️",
            optional(
                Field::new("fieldName", FieldType::Multiselect)
                    .with_title("Field Title")
                    .with_description("Select multiple options")
                    .with_options(choices())
                    .with_value(json!([])),
            ),
        ),
        basic(
            "Object",
            "📦",
            Field::new("section", FieldType::Object)
                .with_title("Section Title")
                .with_description("Grouped fields")
                .with_children(Vec::new()),
        ),
        basic(
            "Array",
            "📚",
            Field::new("items", FieldType::Array)
                .with_title("List Items")
                .with_description("Dynamic list of items")
                .with_max_items(10)
                .with_children(vec![
                    Field::new("0", FieldType::Text)
                        .with_title("Item")
                        .with_placeholder("Enter item..."),
                ]),
        ),
    ]
}

/// An application configuration form that uses every field type.
pub fn example_form() -> Vec<Field> {
    let service_name = Field::new("serviceName", FieldType::Text)
        .with_title("Service Name")
        .with_placeholder("my-service")
        .with_description("Unique service identifier")
        .with_regex("^[a-z][a-z0-9-]*$")
        .with_validation_message("Lowercase letters, numbers, and hyphens only")
        .with_links(vec![FieldLink {
            text: "Service naming conventions".to_string(),
            url: "https://kubernetes.io/docs/concepts/overview/working-with-objects/names/"
                .to_string(),
        }])
        .required();

    let database = Field::new("database", FieldType::Object)
        .with_title("Database")
        .with_description("Database configuration")
        .with_children(vec![
            Field::new("host", FieldType::Text)
                .with_title("Host")
                .with_placeholder("localhost")
                .with_value("localhost")
                .required(),
            Field::new("port", FieldType::Number)
                .with_title("Port")
                .with_value(5432),
            Field::new("ssl", FieldType::Boolean)
                .with_title("Use SSL")
                .with_value(true),
        ]);

    let endpoint = Field::new("0", FieldType::Object)
        .with_title("Endpoint")
        .with_children(vec![
            Field::new("path", FieldType::Text)
                .with_title("Path")
                .with_placeholder("/api/users")
                .with_value("/api/users")
                .required(),
            Field::new("method", FieldType::Enum)
                .with_title("Method")
                .with_options(options(&[
                    ("GET", "GET"),
                    ("POST", "POST"),
                    ("PUT", "PUT"),
                    ("DELETE", "DELETE"),
                ]))
                .with_value("GET"),
            Field::new("public", FieldType::Boolean)
                .with_title("Public")
                .with_value(false),
        ]);

    vec![
        Field::new("appConfig", FieldType::Object)
            .with_title("Application Configuration")
            .with_description("Example demonstrating all field types")
            .with_children(vec![
                service_name,
                Field::new("port", FieldType::Number)
                    .with_title("Port")
                    .with_value(3000)
                    .with_description("Service port number"),
                Field::new("debugMode", FieldType::Boolean)
                    .with_title("Debug Mode")
                    .with_value(false)
                    .with_description("Enable verbose logging"),
                Field::new("environment", FieldType::Enum)
                    .with_title("Environment")
                    .with_options(options(&[
                        ("development", "Development"),
                        ("staging", "Staging"),
                        ("production", "Production"),
                    ]))
                    .required(),
                Field::new("features", FieldType::Multiselect)
                    .with_title("Features")
                    .with_description("Enable features")
                    .with_options(options(&[
                        ("auth", "Authentication"),
                        ("api", "REST API"),
                        ("websockets", "WebSockets"),
                        ("cache", "Caching"),
                        ("metrics", "Metrics"),
                    ]))
                    .with_value(json!(["auth", "api"])),
                database,
                Field::new("endpoints", FieldType::Array)
                    .with_title("API Endpoints")
                    .with_description("List of endpoints")
                    .with_max_items(5)
                    .with_children(vec![endpoint]),
            ]),
    ]
}
