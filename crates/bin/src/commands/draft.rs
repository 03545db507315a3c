//! Draft persistence commands.

use formtree::draft::{DraftStore, FileDraftStore};

use crate::cli::{DraftArgs, DraftCommands};
use crate::output::{OutputFormat, print_json, read_fields};

/// Run a draft subcommand
pub fn run(args: &DraftArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = FileDraftStore::new(&args.dir)?;

    match &args.command {
        DraftCommands::Save { file } => {
            let fields = read_fields(file)?;
            store.try_save(&fields)?;
            tracing::info!(dir = %store.dir().display(), fields = fields.len(), "saved draft");
        }
        DraftCommands::Load => {
            let Some(fields) = store.load() else {
                return Err(format!("No draft found in {}", store.dir().display()).into());
            };
            match format {
                OutputFormat::Human => println!("{}", serde_json::to_string_pretty(&fields)?),
                OutputFormat::Json => print_json(&fields)?,
            }
        }
        DraftCommands::Status => {
            let saved_at = store.last_saved().map(|t| t.to_rfc3339());
            match format {
                OutputFormat::Human => match (store.has_draft(), saved_at) {
                    (true, Some(saved_at)) => println!("Draft saved at {saved_at}"),
                    (true, None) => println!("Draft present, save time unknown"),
                    (false, _) => println!("No draft"),
                },
                OutputFormat::Json => print_json(&serde_json::json!({
                    "exists": store.has_draft(),
                    "saved_at": saved_at,
                }))?,
            }
        }
        DraftCommands::Clear => {
            store.try_clear()?;
            tracing::info!(dir = %store.dir().display(), "cleared draft");
        }
    }
    Ok(())
}
