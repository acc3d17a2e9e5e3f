use std::path::Path;

use pqtools_core::{CodecTag, SchemaDescriptor, cast};

use crate::{csv_ingest::load_csv, error::PqToolsError, writer::WriteResult, write_typed_table};

/// Convert a CSV file to Parquet: [`load_csv`], [`cast`], then
/// [`write_typed_table`]. Nothing is written if loading or casting fails.
pub fn csv_to_parquet(
    csv: &Path,
    schema: Option<&SchemaDescriptor>,
    output: &Path,
    compression: CodecTag,
) -> Result<WriteResult, PqToolsError> {
    let table = load_csv(csv)?;
    let typed = cast(table, schema)?;
    write_typed_table(&typed, output, compression)
}
