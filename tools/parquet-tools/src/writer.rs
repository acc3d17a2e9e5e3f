use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;

pub trait RecordBatchWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

/// CSV with a single header row, written to a file.
pub struct CsvWriter {
    dest: BufWriter<fs::File>,
    header_written: bool,
}

impl CsvWriter {
    pub fn create(path: &Path) -> Result<Self> {
        let file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            dest: BufWriter::new(file),
            header_written: false,
        })
    }
}

impl RecordBatchWriter for CsvWriter {
    fn write_batch(&mut self, batch: &RecordBatch) -> Result<()> {
        let mut csv_writer = arrow::csv::WriterBuilder::new()
            .with_header(!self.header_written)
            .build(&mut self.dest);
        csv_writer.write(batch)?;
        self.header_written = true;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}
