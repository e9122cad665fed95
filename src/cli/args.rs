//! Command-line arguments

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, schema::SchemaArgs, show::ShowArgs, status::StatusArgs,
    validate::ValidateArgs,
};
use crate::core::config::DocumentFormat;

#[derive(Parser, Debug)]
#[command(
    name = "gdm",
    version,
    about = "Validate and inspect JSON:API metadata documents (data source identifiers, problem status)"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Config file (default: $GDM_CONFIG or the user config directory)
    #[arg(long, global = true, env = "GDM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for rendered documents
    #[arg(long, short = 'f', global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Use the configured default
    Auto,
    Json,
    Yaml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate documents against the embedded schemas
    Validate(ValidateArgs),

    /// Parse a document into its typed model and print it normalized
    Show(ShowArgs),

    /// Print the status descriptor for an HTTP status code
    Status(StatusArgs),

    /// List embedded schemas or print one
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl OutputFormat {
    /// Resolve `Auto` against the configured default
    pub fn resolve(self, default: DocumentFormat) -> DocumentFormat {
        match self {
            OutputFormat::Auto => default,
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}
