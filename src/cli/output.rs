//! Output formatting utilities

use miette::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::core::config::{Config, DocumentFormat};
use crate::yaml::render;

/// Determine the effective output format based on config
pub fn effective_format(format: OutputFormat, config: &Config) -> DocumentFormat {
    format.resolve(config.output_format)
}

/// Print a serializable value in the given format
pub fn print_document<T: Serialize>(value: &T, format: DocumentFormat) -> Result<()> {
    let text = render(value, format)?;
    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
