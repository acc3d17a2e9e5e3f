use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pqtools::core::load_schema;
use pqtools::csv_to_parquet;

use crate::format::CompressionArg;

#[derive(Args)]
pub struct Csv2ParquetArgs {
    /// CSV file to convert
    input: PathBuf,

    /// Output file path (default: input with .parquet extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compression codec for the output
    #[arg(short, long, value_enum, default_value_t = CompressionArg::Snappy)]
    compression: CompressionArg,

    /// YAML or JSON file declaring column types
    #[arg(long)]
    schema: Option<PathBuf>,
}

impl Csv2ParquetArgs {
    pub fn run(self) -> Result<()> {
        let has_csv_extension = self
            .input
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !has_csv_extension {
            eprintln!("Warning: Input file does not have .csv extension");
        }

        let schema = match &self.schema {
            Some(path) => {
                let schema = load_schema(path)?;
                println!("Schema loaded: {} fields", schema.len());
                Some(schema)
            }
            None => None,
        };

        let output = self
            .output
            .unwrap_or_else(|| self.input.with_extension("parquet"));
        let result = csv_to_parquet(
            &self.input,
            schema.as_ref(),
            &output,
            self.compression.into(),
        )?;

        println!(
            "Saved: {} (compression: {})",
            result.output.display(),
            result.compression
        );
        Ok(())
    }
}
