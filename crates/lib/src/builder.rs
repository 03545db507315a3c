//! An editing session over a single field tree.
//!
//! [`FormBuilder`] owns the current tree together with the state an editor
//! keeps beside it: the selected field, the outline's expanded paths and the
//! message from the last value that failed its pattern. Every edit goes
//! through the pure tree operations and replaces the tree wholesale.

use serde_json::Value;
use tracing::{debug, info};

use crate::{
    draft::DraftStore,
    export,
    field::Field,
    import::{self, ImportError},
    path::is_strict_descendant,
    share::{self, Environment, ShareError},
    tree::{self, outline},
    validation::{self, ValidationReport},
};

/// Shown in place of YAML output that could not be generated.
pub const YAML_ERROR_PLACEHOLDER: &str = "# Error generating YAML";

/// Shown in place of KYAML output that could not be generated.
pub const KYAML_ERROR_PLACEHOLDER: &str = "# Error generating KYAML";

#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    fields: Vec<Field>,
    selected_path: Option<String>,
    validation_error: Option<String>,
    expanded: Vec<String>,
}

impl FormBuilder {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Swaps in a new tree, dropping the selection and any edit error.
    pub fn replace_fields(&mut self, fields: Vec<Field>) {
        self.fields = fields;
        self.selected_path = None;
        self.validation_error = None;
        self.expanded.retain(|path| tree::find_field_by_path(&self.fields, path).is_some());
    }

    /// Writes `value` into the field at `path`.
    ///
    /// The value is stored even when it fails the field's pattern; the failure
    /// is reported through [`FormBuilder::validation_error`] until the next
    /// edit.
    pub fn update_value(&mut self, path: &str, value: Value) {
        self.validation_error = tree::find_field_by_path(&self.fields, path)
            .and_then(|field| validation::check_value(field, &value));
        self.fields = tree::update_field_value(&self.fields, path, value);
    }

    pub fn add_array_item(&mut self, array_path: &str) {
        self.fields = tree::add_item_to_array(&self.fields, array_path);
    }

    /// Removes an array item. Clears the selection if it pointed at or into
    /// an array item, since item paths shift after reindexing.
    pub fn remove_array_item(&mut self, array_path: &str, item_path: &str) {
        let item_count = |fields: &[Field]| {
            tree::find_field_by_path(fields, array_path).map(|f| f.children().len())
        };
        let before = item_count(&self.fields);
        self.fields = tree::remove_item_from_array(&self.fields, array_path, item_path);
        if item_count(&self.fields) != before
            && let Some(selected) = self.selected_path.as_deref()
            && is_strict_descendant(selected, array_path)
        {
            self.selected_path = None;
        }
    }

    /// Selects the field at `path` and expands its ancestors so it is
    /// visible. Unknown paths clear the selection.
    pub fn select(&mut self, path: &str) {
        if tree::find_field_by_path(&self.fields, path).is_none() {
            debug!(path, "selection cleared: no field at path");
            self.selected_path = None;
            return;
        }
        self.expanded = outline::expand_parents(path, &self.expanded);
        self.selected_path = Some(path.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selected_path = None;
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn selected_field(&self) -> Option<&Field> {
        let path = self.selected_path.as_deref()?;
        tree::find_field_by_path(&self.fields, path)
    }

    /// Message from the last edit whose value failed the field's pattern.
    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn expanded(&self) -> &[String] {
        &self.expanded
    }

    pub fn toggle_expanded(&mut self, path: &str) {
        self.expanded = outline::toggle_expansion(path, &self.expanded);
    }

    pub fn expand_all(&mut self) {
        self.expanded = outline::expand_all(&self.fields);
    }

    pub fn collapse_all(&mut self) {
        self.expanded = outline::collapse_all();
    }

    pub fn validation(&self) -> ValidationReport {
        validation::validate_required_fields(&self.fields)
    }

    pub fn json_output(&self) -> crate::Result<String> {
        export::to_json_pretty(&self.fields)
    }

    /// YAML of the data projection, or [`YAML_ERROR_PLACEHOLDER`].
    pub fn yaml_output(&self) -> String {
        export::to_yaml(&self.fields).unwrap_or_else(|err| {
            debug!(error = %err, "failed to render YAML");
            YAML_ERROR_PLACEHOLDER.to_string()
        })
    }

    /// KYAML of the data projection, or [`KYAML_ERROR_PLACEHOLDER`].
    pub fn kyaml_output(&self) -> String {
        export::to_kyaml(&self.fields).unwrap_or_else(|err| {
            debug!(error = %err, "failed to render KYAML");
            KYAML_ERROR_PLACEHOLDER.to_string()
        })
    }

    /// The tree filtered by a search query.
    pub fn filtered(&self, query: &str) -> Vec<Field> {
        tree::filter_fields(&self.fields, query)
    }

    /// Replaces the tree with a JSON import. The tree is untouched on error.
    pub fn import_json(&mut self, text: &str) -> Result<&[Field], ImportError> {
        let fields = import::import_json(text)?;
        self.replace_fields(fields);
        info!(fields = self.fields.len(), "imported fields from JSON");
        Ok(&self.fields)
    }

    /// Replaces the tree with a YAML import. The tree is untouched on error.
    pub fn import_yaml(&mut self, text: &str) -> Result<&[Field], ImportError> {
        let fields = import::import_yaml(text)?;
        self.replace_fields(fields);
        info!(fields = self.fields.len(), "imported fields from YAML");
        Ok(&self.fields)
    }

    pub fn share_link(
        &self,
        env: &impl Environment,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<String, ShareError> {
        share::encode_form_to_url(env, &self.fields, name, description)
    }

    /// Loads the form carried by a share link or bare token.
    ///
    /// Returns the shared form's name and description, or `None` (leaving the
    /// tree as it was) if the link does not decode.
    pub fn open_shared(&mut self, link: &str) -> Option<(String, Option<String>)> {
        let form = share::decode_url_to_form(share::extract_token(link))?;
        self.replace_fields(form.fields);
        Some((form.name, form.description))
    }

    pub fn save_draft(&self, store: &dyn DraftStore) {
        store.save(&self.fields);
    }

    /// Replaces the tree with the stored draft, if there is one.
    pub fn restore_draft(&mut self, store: &dyn DraftStore) -> bool {
        match store.load() {
            Some(fields) => {
                self.replace_fields(fields);
                true
            }
            None => false,
        }
    }
}
