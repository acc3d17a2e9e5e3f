use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use pqtools::{Merger, collect_parquet_inputs, default_merge_output};

use crate::format::{CompressionArg, with_thousands};

#[derive(Args)]
pub struct MergeArgs {
    /// Directory containing .parquet files to merge
    input_dir: PathBuf,

    /// Output file path (default: <input_dir>_merged.parquet)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compression codec for the output
    #[arg(short, long, value_enum, default_value_t = CompressionArg::Snappy)]
    compression: CompressionArg,
}

impl MergeArgs {
    pub fn run(self) -> Result<()> {
        let inputs = collect_parquet_inputs(&self.input_dir)?;
        println!("Files found: {}", inputs.len());

        let merger = Merger::builder()
            .with_compression(self.compression.into())
            .build();
        let plan = merger.plan(&inputs)?;

        let pb = ProgressBar::new(plan.total_rows());
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
            )?
            .progress_chars("=>-"),
        );

        let output = self
            .output
            .unwrap_or_else(|| default_merge_output(&self.input_dir));
        let result = merger.execute(plan, &output, |rows| pb.inc(rows));
        pb.finish_and_clear();
        let result = result?;

        println!(
            "Merged: {} rows, {} columns (compression: {})",
            with_thousands(result.rows_written),
            result.columns,
            result.compression
        );
        println!("Saved: {}", result.output.display());
        Ok(())
    }
}
