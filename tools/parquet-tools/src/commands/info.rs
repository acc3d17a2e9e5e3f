use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pqtools::{ParquetFileInfo, read_info};
use serde::Serialize;

use crate::format::with_thousands;

#[derive(Args)]
pub struct InfoArgs {
    /// Parquet file to inspect
    input: PathBuf,

    /// Output in YAML format
    #[arg(long)]
    yaml: bool,
}

impl InfoArgs {
    pub fn run(self) -> Result<()> {
        let info = read_info(&self.input)?;
        if self.yaml {
            print!("{}", to_yaml(&info)?);
        } else {
            print!("{}", to_text(&info));
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct InfoDocument<'a> {
    file: FileSection<'a>,
    schema: serde_yaml::Mapping,
}

#[derive(Serialize)]
struct FileSection<'a> {
    path: String,
    rows: u64,
    columns: u32,
    row_groups: u32,
    compression: &'static str,
    created_by: Option<&'a str>,
}

fn to_yaml(info: &ParquetFileInfo) -> Result<String> {
    let schema = info
        .schema
        .iter()
        .map(|column| {
            (
                serde_yaml::Value::from(column.name.as_str()),
                serde_yaml::Value::from(column.type_name.as_str()),
            )
        })
        .collect();
    let document = InfoDocument {
        file: FileSection {
            path: info.path.display().to_string(),
            rows: info.row_count,
            columns: info.column_count,
            row_groups: info.row_group_count,
            compression: info.compression.footer_name(),
            created_by: info.created_by.as_deref(),
        },
        schema,
    };
    Ok(serde_yaml::to_string(&document)?)
}

fn to_text(info: &ParquetFileInfo) -> String {
    let mut out = String::new();
    out.push_str("=== File Info ===\n");
    out.push_str(&format!("Path: {}\n", info.path.display()));
    out.push_str(&format!("Rows: {}\n", with_thousands(info.row_count)));
    out.push_str(&format!("Columns: {}\n", info.column_count));
    out.push_str(&format!("Row Groups: {}\n", info.row_group_count));
    out.push_str(&format!("Compression: {}\n", info.compression.footer_name()));
    out.push_str(&format!(
        "Created By: {}\n",
        info.created_by.as_deref().unwrap_or("unknown")
    ));
    out.push_str("\n=== Schema ===\n");
    for column in &info.schema {
        out.push_str(&format!("  {}: {}\n", column.name, column.type_name));
    }
    out
}
