//! `gdm status` command - Print the status descriptor for an HTTP code

use console::style;
use miette::Result;

use crate::cli::output::{effective_format, print_document};
use crate::cli::GlobalOpts;
use crate::core::{Config, Model};
use crate::models::StatusType;

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// HTTP status code
    #[arg(value_parser = clap::value_parser!(i32).range(100..=599))]
    pub code: i32,

    /// Override the reason phrase
    #[arg(long, short = 'r')]
    pub reason: Option<String>,

    /// Extra members as key=value (value parsed as JSON, else kept as a string)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub extra: Vec<String>,

    /// Print a one-line summary instead of the document
    #[arg(long)]
    pub short: bool,
}

pub fn run(args: StatusArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let mut status = match args.reason {
        Some(reason) => StatusType::new(args.code, reason),
        None => StatusType::from_code(args.code),
    };

    for pair in &args.extra {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| miette::miette!("Expected KEY=VALUE, got '{}'", pair))?;
        let value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
        status
            .set_additional(key.trim(), value)
            .map_err(|e| miette::miette!("{}", e))?;
    }

    if args.short {
        let line = if status.is_error() {
            style(status.to_string()).red()
        } else {
            style(status.to_string()).green()
        };
        println!("{}", line);
        return Ok(());
    }

    print_document(&status, effective_format(global.format, config))
}
