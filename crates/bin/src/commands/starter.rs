//! Bundled starter content.

use formtree::templates::{basic_templates, example_form};

use crate::output::{OutputFormat, print_json, print_table};

/// Run the example command
pub fn example(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let fields = example_form();
    match format {
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Json => print_json(&fields)?,
    }
    Ok(())
}

/// Run the templates command
pub fn templates(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let templates = basic_templates();
    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = templates
                .iter()
                .map(|t| {
                    vec![
                        t.icon.to_string(),
                        t.label.to_string(),
                        t.template.field_type.label().to_string(),
                        t.template.name.clone(),
                    ]
                })
                .collect();
            print_table(&["", "TEMPLATE", "TYPE", "NAME"], &rows);
        }
        OutputFormat::Json => print_json(&templates)?,
    }
    Ok(())
}
