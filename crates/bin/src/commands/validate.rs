//! Required field validation command.

use formtree::validation::{ValidationReport, missing_fields};

use crate::cli::ValidateArgs;
use crate::output::{OutputFormat, print_json, print_table, read_fields};

/// Run the validate command. Returns whether the tree is valid.
pub fn run(args: &ValidateArgs, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let fields = read_fields(&args.file)?;
    let missing = missing_fields(&fields);

    match format {
        OutputFormat::Human => {
            if missing.is_empty() {
                println!("All required fields are filled in.");
            } else {
                let rows: Vec<Vec<String>> = missing
                    .iter()
                    .map(|m| vec![m.path.clone(), m.display_name.clone(), m.status.to_string()])
                    .collect();
                print_table(&["PATH", "FIELD", "STATUS"], &rows);
            }
        }
        OutputFormat::Json => print_json(&ValidationReport {
            valid: missing.is_empty(),
            missing: missing.iter().map(ToString::to_string).collect(),
        })?,
    }

    Ok(missing.is_empty())
}
