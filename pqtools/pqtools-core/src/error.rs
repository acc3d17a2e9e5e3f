//! Error types for schema loading, table construction and casting.

use std::path::PathBuf;

use crate::schema::TypeTag;

/// Error returned by [`load_schema`](crate::load_schema).
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema file does not exist.
    #[error("Schema file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The schema file could not be read.
    #[error("failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is neither YAML nor JSON.
    #[error("Unsupported schema format: '{extension}' (use .yaml, .yml or .json)")]
    UnsupportedFormat { extension: String },

    /// The document is not valid YAML/JSON.
    #[error("failed to parse schema file {}: {detail}", path.display())]
    Parse { path: PathBuf, detail: String },

    /// The document has no top-level `fields` sequence.
    #[error("schema must contain a 'fields' list")]
    MissingFieldsKey,

    /// An entry of `fields` has no `name`.
    #[error("field #{index} in schema is missing 'name'")]
    MissingFieldName { index: usize },

    /// An entry declares a type outside the supported vocabulary.
    #[error(
        "Unknown type '{type_name}' for field '{name}' (supported: string, int64, float64, boolean, timestamp, date)"
    )]
    UnknownType { name: String, type_name: String },

    /// The same field name is declared twice.
    #[error("field '{name}' is declared more than once")]
    DuplicateField { name: String },
}

/// Error returned when an [`UntypedTable`](crate::UntypedTable) would violate
/// its shape invariants.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A data row does not have one cell per header column.
    #[error("row {row_index} has {actual_cols} fields, expected {expected_cols}")]
    MalformedRow {
        row_index: usize,
        expected_cols: usize,
        actual_cols: usize,
    },

    /// The header names the same column twice.
    #[error("column '{name}' appears more than once in the header")]
    DuplicateColumn { name: String },

    /// Typed columns of one table disagree on length.
    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// A typed column holds a value of another type.
    #[error("column '{column}' of type {type_tag} holds a mismatched value at row {row_index}")]
    ValueType {
        column: String,
        type_tag: TypeTag,
        row_index: usize,
    },
}

/// A single cell could not be parsed as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse '{raw}' as {target}")]
pub struct ParseValueError {
    pub raw: String,
    pub target: TypeTag,
}

impl ParseValueError {
    pub fn new(raw: impl Into<String>, target: TypeTag) -> Self {
        Self {
            raw: raw.into(),
            target,
        }
    }
}

/// Error returned by [`cast`](crate::cast).
#[derive(Debug, thiserror::Error)]
pub enum CastError {
    /// Schema columns that are absent from the table header.
    #[error("schema columns not found in data: {}", names.join(", "))]
    UnknownColumns { names: Vec<String> },

    /// A non-null cell could not be parsed as its declared type.
    #[error(
        "cannot cast column '{column}' row {row_index}: '{raw_value}' is not a valid {target_type}"
    )]
    CastFailure {
        column: String,
        row_index: usize,
        raw_value: String,
        target_type: TypeTag,
    },

    /// The cast columns do not form a valid table.
    #[error(transparent)]
    Table(#[from] TableError),
}
