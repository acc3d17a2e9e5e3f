use std::path::Path;

use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::{DEFAULT_BATCH_SIZE, error::PqToolsError, input::open_input};

/// Rows shown by `head` when no count is given.
pub const DEFAULT_HEAD_ROWS: usize = 10;

/// Read at most `rows` leading rows of a Parquet file.
///
/// Row groups are decoded lazily and reading stops once the limit is met.
/// The result always holds at least one batch so that callers can render
/// the column header even when no rows are returned.
pub fn read_head(path: &Path, rows: usize) -> Result<Vec<RecordBatch>, PqToolsError> {
    let file = open_input(path)?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).map_err(PqToolsError::corrupt(path))?;
    let schema = builder.schema().clone();
    if rows == 0 {
        return Ok(vec![RecordBatch::new_empty(schema)]);
    }

    let reader = builder
        .with_limit(rows)
        .with_batch_size(rows.min(DEFAULT_BATCH_SIZE))
        .build()
        .map_err(PqToolsError::corrupt(path))?;

    let mut batches = Vec::new();
    for batch in reader {
        let batch = batch.map_err(|source| PqToolsError::CorruptFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        batches.push(batch);
    }
    if batches.is_empty() {
        batches.push(RecordBatch::new_empty(schema));
    }
    Ok(batches)
}
