//! The field tree data model.
//!
//! A form is an ordered sequence of [`Field`]s. Scalar fields (`text`,
//! `number`, `boolean`, `enum`, `multiselect`) carry a `value`; containers
//! (`object`, `array`) carry `children`. The first child of an `array` doubles
//! as the template that new items are cloned from, and array items are named
//! by their decimal index.
//!
//! The wire format is the camelCase JSON used by share links, drafts and JSON
//! import. Serialization is lossless: display metadata the core never reads
//! and keys it does not know about are carried through unchanged.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod value;

/// The kind of a field.
///
/// The legacy name `string` is accepted as an alias for [`FieldType::Text`]
/// and is written back out as `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[serde(alias = "string")]
    Text,
    Number,
    Boolean,
    Object,
    Array,
    Enum,
    Multiselect,
}

impl FieldType {
    /// All field types in display order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Object,
        FieldType::Array,
        FieldType::Enum,
        FieldType::Multiselect,
    ];

    /// The wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Enum => "enum",
            FieldType::Multiselect => "multiselect",
        }
    }

    /// Human readable label shown in type pickers.
    pub fn label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Boolean => "Boolean",
            FieldType::Object => "Object",
            FieldType::Array => "Array",
            FieldType::Enum => "Dropdown",
            FieldType::Multiselect => "Multi-Select",
        }
    }

    /// Returns true for `object` and `array`, which hold state in `children`.
    pub fn is_container(&self) -> bool {
        matches!(self, FieldType::Object | FieldType::Array)
    }

    /// The empty value for this type, or `None` for containers.
    pub fn default_value(&self) -> Option<Value> {
        match self {
            FieldType::Text | FieldType::Enum => Some(Value::String(String::new())),
            FieldType::Number => Some(Value::from(0)),
            FieldType::Boolean => Some(Value::Bool(false)),
            FieldType::Multiselect => Some(Value::Array(Vec::new())),
            FieldType::Object | FieldType::Array => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type '{0}'")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" | "string" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "object" => Ok(FieldType::Object),
            "array" => Ok(FieldType::Array),
            "enum" => Ok(FieldType::Enum),
            "multiselect" => Ok(FieldType::Multiselect),
            other => Err(UnknownFieldType(other.to_string())),
        }
    }
}

/// One choice of an `enum` or `multiselect` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
        }
    }
}

/// A help link shown next to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLink {
    pub text: String,
    pub url: String,
}

/// A node in the form tree.
///
/// `value` distinguishes an absent value (`None`, omitted when serialized) from
/// an explicit `null` (`Some(Value::Null)`). Other optional attributes collapse
/// an explicit `null` to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "value::deserialize_present"
    )]
    pub value: Option<Value>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "value::deserialize_present"
    )]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<FieldLink>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Field>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<serde_json::Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Keys this crate does not interpret, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    /// Creates a bare field with no value, children or metadata.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            value: None,
            default_value: None,
            placeholder: None,
            title: None,
            description: None,
            links: None,
            required: None,
            regex: None,
            validation_message: None,
            children: None,
            max_items: None,
            options: None,
            multiple: None,
            helper_text: None,
            multiline: None,
            min: None,
            max: None,
            step: None,
            reference: None,
            example: None,
            label: None,
            id: None,
            extra: Map::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Field>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_regex(mut self, regex: impl Into<String>) -> Self {
        self.regex = Some(regex.into());
        self
    }

    pub fn with_validation_message(mut self, message: impl Into<String>) -> Self {
        self.validation_message = Some(message.into());
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_links(mut self, links: Vec<FieldLink>) -> Self {
        self.links = Some(links);
        self
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }

    /// The title if set and non-empty, otherwise the name.
    pub fn display_name(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }

    /// The children, or an empty slice when none are set.
    pub fn children(&self) -> &[Field] {
        self.children.as_deref().unwrap_or_default()
    }

    /// The effective item limit of an array; `0` means unlimited.
    pub fn item_limit(&self) -> Option<usize> {
        self.max_items.filter(|max| *max > 0)
    }
}
