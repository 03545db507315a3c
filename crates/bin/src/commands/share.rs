//! Share link commands.

use formtree::share::{self, ShareConfig};
use tracing::{info, warn};

use crate::cli::{DecodeArgs, EncodeArgs};
use crate::output::{OutputFormat, print_json, read_fields};

/// Run the encode command
pub fn encode(args: &EncodeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let fields = read_fields(&args.file)?;
    let config = ShareConfig::default()
        .with_origin(args.share.origin.clone())
        .with_max_url_length(args.share.max_url_length);

    let link = share::encode_form_to_url(
        &config,
        &fields,
        args.name.as_deref(),
        args.description.as_deref(),
    )?;
    let safe = config.is_url_safe(&link);
    info!(fields = fields.len(), length = link.len(), "encoded share link");
    if !safe {
        warn!(
            length = link.len(),
            limit = config.max_url_length,
            "share link is longer than the configured limit"
        );
    }

    match format {
        OutputFormat::Human => println!("{link}"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "url": link,
            "length": link.len(),
            "safe": safe,
        }))?,
    }
    Ok(())
}

/// Run the decode command
pub fn decode(args: &DecodeArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let Some(form) = share::decode_url_to_form(share::extract_token(&args.link)) else {
        return Err("Invalid or corrupted share link".into());
    };

    match format {
        OutputFormat::Human => {
            println!("Name:        {}", form.name);
            if let Some(description) = &form.description {
                println!("Description: {description}");
            }
            println!("Fields:");
            println!("{}", serde_json::to_string_pretty(&form.fields)?);
        }
        OutputFormat::Json => print_json(&form)?,
    }
    Ok(())
}
