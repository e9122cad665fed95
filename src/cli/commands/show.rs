//! `gdm show` command - Decode a document into its typed model

use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output::{effective_format, print_document};
use crate::cli::GlobalOpts;
use crate::core::{Config, Model, ModelKind};
use crate::models::{
    JsonApiDataSourceIdentifierOutList, JsonApiDataSourceIdentifierOutWithLinks, StatusType,
};
use crate::yaml::parse_document;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Document to show (JSON or YAML)
    pub path: PathBuf,

    /// Decode as this kind instead of detecting it
    #[arg(long, short = 'k')]
    pub kind: Option<ModelKind>,

    /// Print identifiers as a table instead of a document
    #[arg(long)]
    pub table: bool,
}

#[derive(Tabled)]
struct IdentifierRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    data_source_type: String,
    #[tabled(rename = "SCHEMA")]
    schema: String,
    #[tabled(rename = "ACCESS")]
    access: String,
}

impl From<&JsonApiDataSourceIdentifierOutWithLinks> for IdentifierRow {
    fn from(dsi: &JsonApiDataSourceIdentifierOutWithLinks) -> Self {
        let access = if dsi.can_manage() {
            "manage"
        } else if dsi.can_use() {
            "use"
        } else {
            "-"
        };
        Self {
            id: dsi.id.clone(),
            name: dsi.attributes.name.clone(),
            data_source_type: dsi.attributes.data_source_type.to_string(),
            schema: dsi.attributes.schema.clone(),
            access: access.to_string(),
        }
    }
}

/// Decoded document of any supported kind
enum Decoded {
    Identifier(Box<JsonApiDataSourceIdentifierOutWithLinks>),
    List(JsonApiDataSourceIdentifierOutList),
    Status(StatusType),
}

pub fn run(args: ShowArgs, global: &GlobalOpts, config: &Config) -> Result<()> {
    let content = std::fs::read_to_string(&args.path).into_diagnostic()?;
    let filename = args.path.display().to_string();
    let value = parse_document(&content, &filename)?;

    let kind = match args.kind {
        Some(kind) => kind,
        None => ModelKind::detect(&value).ok_or_else(|| {
            miette::miette!("Unknown document kind (pass --kind): {}", filename)
        })?,
    };
    tracing::debug!(file = %filename, %kind, "decoding document");

    let decoded = match kind {
        ModelKind::DataSourceIdentifier => Decoded::Identifier(Box::new(
            JsonApiDataSourceIdentifierOutWithLinks::from_value(value).into_diagnostic()?,
        )),
        ModelKind::DataSourceIdentifierList => Decoded::List(
            JsonApiDataSourceIdentifierOutList::from_value(value).into_diagnostic()?,
        ),
        ModelKind::StatusType => {
            Decoded::Status(StatusType::from_value(value).into_diagnostic()?)
        }
    };

    if args.table {
        return print_table(&decoded);
    }

    let format = effective_format(global.format, config);
    match &decoded {
        Decoded::Identifier(dsi) => print_document(dsi, format),
        Decoded::List(list) => print_document(list, format),
        Decoded::Status(status) => print_document(status, format),
    }
}

fn print_table(decoded: &Decoded) -> Result<()> {
    let rows: Vec<IdentifierRow> = match decoded {
        Decoded::Identifier(dsi) => vec![IdentifierRow::from(dsi.as_ref())],
        Decoded::List(list) => list.iter().map(IdentifierRow::from).collect(),
        Decoded::Status(status) => {
            println!("{}", style(status).bold());
            return Ok(());
        }
    };

    let count = rows.len();
    println!("{}", Table::new(rows).with(Style::rounded()));

    if let Decoded::List(list) = decoded {
        let more = if list.has_next() {
            format!(" {}", style("(more pages available)").dim())
        } else {
            String::new()
        };
        println!("{} data source(s){}", style(count).cyan(), more);
    }
    Ok(())
}

