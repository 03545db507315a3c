//! CLI argument definitions for the formtree binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use formtree::share::{DEFAULT_ORIGIN, MAX_URL_LENGTH};

/// Text format for importing and exporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextFormat {
    Json,
    Yaml,
    /// Flow-style Kubernetes YAML; read back as YAML on import
    Kyaml,
}

/// Form tree toolkit: share links, import, export and validation
#[derive(Parser, Debug)]
#[command(name = "formtree")]
#[command(about = "Work with form field trees from the command line")]
#[command(version)]
pub struct Cli {
    /// Print machine-readable JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pack a field tree into a share link
    Encode(EncodeArgs),
    /// Unpack a share link or token
    Decode(DecodeArgs),
    /// Convert JSON or YAML into a field tree
    Import(ImportArgs),
    /// Render the data described by a field tree
    Export(ExportArgs),
    /// Check that every required field has a valid value
    Validate(ValidateArgs),
    /// Print the bundled example form
    Example,
    /// List the quick-insert field templates
    Templates,
    /// Manage the saved draft
    Draft(DraftArgs),
}

/// Where share links point
#[derive(clap::Args, Debug)]
pub struct ShareArgs {
    /// Origin the builder is served from
    #[arg(long, default_value = DEFAULT_ORIGIN, env = "FORMTREE_ORIGIN")]
    pub origin: String,

    /// Warn when a link is longer than this
    #[arg(long, default_value_t = MAX_URL_LENGTH, env = "FORMTREE_MAX_URL_LENGTH")]
    pub max_url_length: usize,
}

/// Arguments for the encode command
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// JSON field tree to share (`-` for stdin)
    pub file: PathBuf,

    /// Form name shown to recipients
    #[arg(short, long)]
    pub name: Option<String>,

    /// Form description shown to recipients
    #[arg(short, long)]
    pub description: Option<String>,

    #[command(flatten)]
    pub share: ShareArgs,
}

/// Arguments for the decode command
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// Share link or bare token
    pub link: String,
}

/// Arguments for the import command
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Format of the input
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: TextFormat,

    /// Input file (`-` for stdin)
    pub file: PathBuf,
}

/// Arguments for the export command
#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: TextFormat,

    /// JSON field tree (`-` for stdin)
    pub file: PathBuf,
}

/// Arguments for the validate command
#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// JSON field tree (`-` for stdin)
    pub file: PathBuf,
}

/// Arguments for the draft commands
#[derive(clap::Args, Debug)]
pub struct DraftArgs {
    /// Directory holding the draft files
    #[arg(short = 'D', long, default_value = ".formtree", env = "FORMTREE_DRAFT_DIR")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: DraftCommands,
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Save a JSON field tree as the draft
    Save {
        /// JSON field tree (`-` for stdin)
        file: PathBuf,
    },
    /// Print the saved draft
    Load,
    /// Show whether a draft exists and when it was saved
    Status,
    /// Delete the saved draft
    Clear,
}
