//! `gdm schema` command - List or print embedded schemas

use console::style;
use miette::Result;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::core::ModelKind;
use crate::schema::registry::SchemaRegistry;

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// Kind to print (omit to list all)
    pub kind: Option<ModelKind>,
}

#[derive(Tabled)]
struct SchemaRow {
    #[tabled(rename = "KIND")]
    kind: String,
    #[tabled(rename = "SCHEMA")]
    schema: String,
    #[tabled(rename = "URI")]
    uri: String,
}

pub fn run(args: SchemaArgs) -> Result<()> {
    let registry = SchemaRegistry::default();

    match args.kind {
        Some(kind) => {
            let schema = registry
                .get(kind)
                .ok_or_else(|| miette::miette!("No embedded schema for {}", kind))?;
            println!("{}", schema.trim_end());
        }
        None => {
            let rows: Vec<SchemaRow> = registry
                .kinds()
                .map(|kind| SchemaRow {
                    kind: kind.to_string(),
                    schema: kind.schema_name().to_string(),
                    uri: SchemaRegistry::uri(kind),
                })
                .collect();
            let count = rows.len();
            println!("{}", Table::new(rows).with(Style::rounded()));
            println!("{} schema(s)", style(count).cyan());
        }
    }

    Ok(())
}
