use std::path::{Path, PathBuf};

use pqtools_arrow::typed_table_to_record_batch;
use pqtools_core::{CodecTag, DEFAULT_COMPRESSION, TypedTable};

use crate::{compression::writer_properties, error::PqToolsError, output::AtomicParquetOutput};

/// Default maximum rows per row group written by [`TableWriter`].
pub const DEFAULT_MAX_ROW_GROUP_SIZE: usize = 1024 * 1024;

/// Outcome of writing a Parquet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    pub output: PathBuf,
    pub rows_written: u64,
    pub columns: usize,
    pub row_groups: usize,
    pub compression: CodecTag,
}

/// Writes a [`TypedTable`] as a single Parquet file.
#[derive(Debug, Clone)]
pub struct TableWriter {
    compression: CodecTag,
    max_row_group_size: usize,
}

impl TableWriter {
    pub fn builder() -> TableWriterBuilder {
        TableWriterBuilder::default()
    }

    pub fn compression(&self) -> CodecTag {
        self.compression
    }

    /// Write `table` to `output`, replacing any existing file only once the
    /// new one is complete.
    pub fn write(&self, table: &TypedTable, output: &Path) -> Result<WriteResult, PqToolsError> {
        let batch = typed_table_to_record_batch(table)?;
        let props = writer_properties(self.compression, self.max_row_group_size);

        let mut out = AtomicParquetOutput::create(output, batch.schema(), props)?;
        out.write(&batch)?;
        let row_groups = out.commit()?;

        tracing::info!(
            path = %output.display(),
            rows = batch.num_rows(),
            row_groups,
            codec = %self.compression,
            "wrote parquet file"
        );
        Ok(WriteResult {
            output: output.to_path_buf(),
            rows_written: batch.num_rows() as u64,
            columns: table.num_columns(),
            row_groups,
            compression: self.compression,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TableWriterBuilder {
    compression: CodecTag,
    max_row_group_size: usize,
}

impl Default for TableWriterBuilder {
    fn default() -> Self {
        Self {
            compression: DEFAULT_COMPRESSION,
            max_row_group_size: DEFAULT_MAX_ROW_GROUP_SIZE,
        }
    }
}

impl TableWriterBuilder {
    pub fn with_compression(mut self, compression: CodecTag) -> Self {
        self.compression = compression;
        self
    }

    /// Set the maximum number of rows per row group. `0` is treated as `1`.
    pub fn with_max_row_group_size(mut self, rows: usize) -> Self {
        self.max_row_group_size = rows.max(1);
        self
    }

    pub fn build(self) -> TableWriter {
        TableWriter {
            compression: self.compression,
            max_row_group_size: self.max_row_group_size,
        }
    }
}

/// Write `table` to `output` with `compression` and default settings.
pub fn write_typed_table(
    table: &TypedTable,
    output: &Path,
    compression: CodecTag,
) -> Result<WriteResult, PqToolsError> {
    TableWriter::builder()
        .with_compression(compression)
        .build()
        .write(table, output)
}
