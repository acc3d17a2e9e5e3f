use arrow::error::ArrowError;
use pqtools_core::TypeTag;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArrowConvertError {
    #[error("column '{column}' of type {type_tag} holds a value of another type at row {row_index}")]
    ValueType {
        column: String,
        type_tag: TypeTag,
        row_index: usize,
    },
    #[error(transparent)]
    Arrow(#[from] ArrowError),
}
