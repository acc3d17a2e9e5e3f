use std::path::{Path, PathBuf};

use parquet::arrow::parquet_to_arrow_schema;
use parquet::file::reader::{FileReader, SerializedFileReader};
use pqtools_arrow::datatype_label;
use pqtools_core::CodecTag;
use serde::Serialize;

use crate::{compression, error::PqToolsError, input::open_input};

/// Footer-level summary of a Parquet file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParquetFileInfo {
    pub path: PathBuf,
    pub row_count: u64,
    pub column_count: u32,
    pub row_group_count: u32,
    /// Codec of the first column chunk; a file with no row groups reports
    /// [`CodecTag::Uncompressed`].
    pub compression: CodecTag,
    pub created_by: Option<String>,
    pub schema: Vec<ColumnInfo>,
}

/// A top-level column and its display type label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub type_name: String,
}

/// Read [`ParquetFileInfo`] from the footer of `path` without decoding any
/// row data.
pub fn read_info(path: &Path) -> Result<ParquetFileInfo, PqToolsError> {
    let file = open_input(path)?;
    let reader = SerializedFileReader::new(file).map_err(PqToolsError::corrupt(path))?;
    let metadata = reader.metadata();
    let file_metadata = metadata.file_metadata();

    let row_count = metadata
        .row_groups()
        .iter()
        .map(|rg| u64::try_from(rg.num_rows()).unwrap_or_default())
        .sum();

    let compression = match metadata
        .row_groups()
        .iter()
        .find_map(|rg| rg.columns().first())
    {
        Some(chunk) => compression::from_parquet(path, chunk.compression())?,
        None => CodecTag::Uncompressed,
    };

    let arrow_schema = parquet_to_arrow_schema(
        file_metadata.schema_descr(),
        file_metadata.key_value_metadata(),
    )
    .map_err(PqToolsError::corrupt(path))?;
    let schema = arrow_schema
        .fields()
        .iter()
        .map(|field| ColumnInfo {
            name: field.name().clone(),
            type_name: datatype_label(field.data_type()),
        })
        .collect();

    let info = ParquetFileInfo {
        path: path.to_path_buf(),
        row_count,
        column_count: count_u32(file_metadata.schema_descr().num_columns()),
        row_group_count: count_u32(metadata.num_row_groups()),
        compression,
        created_by: file_metadata.created_by().map(str::to_string),
        schema,
    };
    tracing::debug!(
        path = %path.display(),
        rows = info.row_count,
        row_groups = info.row_group_count,
        codec = %info.compression,
        "read footer"
    );
    Ok(info)
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
