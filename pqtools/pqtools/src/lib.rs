//! Parquet inspection, CSV-to-Parquet conversion and merging.
//!
//! The entry points are free functions, each running one operation to
//! completion:
//! - [`read_info`]: footer-only metadata summary.
//! - [`read_head`]: leading rows of a file.
//! - [`load_csv`] + [`core::cast`] + [`write_typed_table`] (or
//!   [`csv_to_parquet`] for the whole pipeline).
//! - [`merge`] / [`Merger`]: concatenate files with identical schemas.
//!
//! Every operation that produces a file writes it to a temporary path next
//! to the destination and renames it into place only on success.

mod compression;
mod convert;
mod csv_ingest;
mod error;
mod head;
mod input;
mod merge;
mod metadata;
mod output;
mod writer;

pub use convert::csv_to_parquet;
pub use csv_ingest::load_csv;
pub use error::{ErrorKind, PqToolsError};
pub use head::{DEFAULT_HEAD_ROWS, read_head};
pub use merge::{
    MergePlan, MergeResult, Merger, MergerBuilder, collect_parquet_inputs, default_merge_output,
    merge,
};
pub use metadata::{ColumnInfo, ParquetFileInfo, read_info};
pub use pqtools_arrow as arrow;
pub use pqtools_core as core;
pub use writer::{
    DEFAULT_MAX_ROW_GROUP_SIZE, TableWriter, TableWriterBuilder, WriteResult, write_typed_table,
};

/// Rows per decoded RecordBatch when streaming Parquet data.
pub const DEFAULT_BATCH_SIZE: usize = 8192;
