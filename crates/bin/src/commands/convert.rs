//! Import and export commands.

use formtree::{export, import};
use tracing::info;

use crate::cli::{ExportArgs, ImportArgs, TextFormat};
use crate::output::{OutputFormat, print_json, read_fields, read_input};

/// Run the import command
pub fn run_import(
    args: &ImportArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&args.file)?;
    let fields = match args.format {
        TextFormat::Json => import::import_json(&text)?,
        TextFormat::Yaml | TextFormat::Kyaml => import::import_yaml(&text)?,
    };
    info!(fields = fields.len(), "imported field tree");

    match format {
        OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&fields)?),
        OutputFormat::Json => print_json(&fields)?,
    }
    Ok(())
}

/// Run the export command
pub fn run_export(args: &ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let fields = read_fields(&args.file)?;
    let rendered = match args.format {
        TextFormat::Json => export::to_json_pretty(&fields)?,
        TextFormat::Yaml => export::to_yaml(&fields)?,
        TextFormat::Kyaml => export::to_kyaml(&fields)?,
    };
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
