//! Arrow integration layer for `pqtools`.
//!
//! This crate focuses on two responsibilities:
//! 1. Map `pqtools-core` [`TypeTag`](pqtools_core::TypeTag)s to Arrow types
//!    (and Arrow types back to short display labels).
//! 2. Convert a [`TypedTable`](pqtools_core::TypedTable) into an Arrow
//!    `RecordBatch`.
//!
//! # Typical Flow
//! ```rust
//! use pqtools_arrow::typed_table_to_record_batch;
//! use pqtools_core::{UntypedTable, cast};
//!
//! let table = UntypedTable::from_rows(vec!["a".to_string()], vec![vec!["x"]]).unwrap();
//! let typed = cast(table, None).unwrap();
//! let batch = typed_table_to_record_batch(&typed).unwrap();
//! assert_eq!(batch.num_rows(), 1);
//! ```
pub mod arrow_convert;
pub mod error;
pub mod schema_convert;

/// Re-export of [`arrow_convert::typed_table_to_record_batch`].
pub use arrow_convert::typed_table_to_record_batch;
/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{datatype_label, type_tag_to_datatype, typed_table_arrow_schema};
