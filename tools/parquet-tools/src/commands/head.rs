use std::path::PathBuf;

use anyhow::Result;
use arrow::util::pretty::pretty_format_batches;
use clap::Args;
use pqtools::{DEFAULT_HEAD_ROWS, read_head};

use crate::writer::{CsvWriter, RecordBatchWriter};

#[derive(Args)]
pub struct HeadArgs {
    /// Parquet file to read
    input: PathBuf,

    /// Number of rows to display
    #[arg(short = 'n', long, default_value_t = DEFAULT_HEAD_ROWS)]
    rows: usize,

    /// Write the rows to a CSV file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl HeadArgs {
    pub fn run(self) -> Result<()> {
        let batches = read_head(&self.input, self.rows)?;

        match self.output {
            Some(path) => {
                let mut writer = CsvWriter::create(&path)?;
                for batch in &batches {
                    writer.write_batch(batch)?;
                }
                writer.finish()?;
                println!("Saved: {}", path.display());
            }
            None => println!("{}", pretty_format_batches(&batches)?),
        }
        Ok(())
    }
}
