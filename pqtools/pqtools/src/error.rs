use std::path::{Path, PathBuf};

use pqtools_arrow::ArrowConvertError;
use pqtools_core::{CastError, SchemaError, TableError};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification of a [`PqToolsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An input path is absent or cannot be opened.
    NotFound,
    /// CSV shape, schema document or input set is invalid.
    MalformedInput,
    /// A schema references columns absent from the data.
    UnknownColumn,
    /// A cell cannot be parsed as its declared type.
    CastFailure,
    /// Merge inputs disagree on schema.
    SchemaMismatch,
    /// A Parquet footer or page cannot be decoded.
    CorruptFile,
    /// The destination cannot be written.
    WriteFailure,
}

#[derive(Debug, thiserror::Error)]
pub enum PqToolsError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read Parquet file {}: {source}", path.display())]
    CorruptFile {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error("{}: unsupported compression codec {codec}", path.display())]
    UnsupportedCodec { path: PathBuf, codec: String },

    #[error(
        "{}: data row {row_index} has {actual_cols} fields, expected {expected_cols}",
        path.display()
    )]
    MalformedRow {
        path: PathBuf,
        row_index: usize,
        expected_cols: usize,
        actual_cols: usize,
    },

    #[error("failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error(
        "schema mismatch in {}: expected [{expected}], found [{actual}]",
        file.display()
    )]
    SchemaMismatch {
        file: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("No .parquet files found{}", describe_dir(.dir.as_deref()))]
    EmptyInput { dir: Option<PathBuf> },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: BoxedError,
    },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Cast(#[from] CastError),

    #[error(transparent)]
    Convert(#[from] ArrowConvertError),
}

impl PqToolsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } | Self::Open { .. } => ErrorKind::NotFound,
            Self::Schema(SchemaError::NotFound { .. } | SchemaError::Io { .. }) => {
                ErrorKind::NotFound
            }
            Self::CorruptFile { .. } | Self::UnsupportedCodec { .. } => ErrorKind::CorruptFile,
            Self::MalformedRow { .. }
            | Self::Csv { .. }
            | Self::EmptyInput { .. }
            | Self::Schema(_)
            | Self::Table(_)
            | Self::Cast(CastError::Table(_))
            | Self::Convert(_) => ErrorKind::MalformedInput,
            Self::Cast(CastError::UnknownColumns { .. }) => ErrorKind::UnknownColumn,
            Self::Cast(CastError::CastFailure { .. }) => ErrorKind::CastFailure,
            Self::SchemaMismatch { .. } => ErrorKind::SchemaMismatch,
            Self::WriteFailure { .. } => ErrorKind::WriteFailure,
        }
    }

    pub(crate) fn corrupt(path: &Path) -> impl FnOnce(parquet::errors::ParquetError) -> Self {
        move |source| Self::CorruptFile {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    pub(crate) fn write_failure<E>(path: &Path) -> impl FnOnce(E) -> Self
    where
        E: Into<BoxedError>,
    {
        move |source| Self::WriteFailure {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

fn describe_dir(dir: Option<&Path>) -> String {
    dir.map(|d| format!(" in {}", d.display()))
        .unwrap_or_default()
}
