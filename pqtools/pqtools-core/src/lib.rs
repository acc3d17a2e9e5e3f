//! Arrow-independent core types for `pqtools`.
//!
//! This crate holds the intermediate representations shared by the Parquet
//! layer: the user-declared [`SchemaDescriptor`], the untyped
//! ([`UntypedTable`]) and typed ([`TypedTable`]) columnar tables, and the
//! [`cast`] function that turns one into the other.

mod cast;
mod codec;
mod error;
mod null_token;
mod schema;
mod table;
mod value;

pub use cast::{cast, cast_value};
pub use codec::{CodecTag, DEFAULT_COMPRESSION};
pub use error::{CastError, ParseValueError, SchemaError, TableError};
pub use null_token::{NULL_TOKENS, is_null_token};
pub use schema::{FieldSpec, SchemaDescriptor, SchemaFormat, TypeTag, load_schema};
pub use table::{TypedColumn, TypedTable, UntypedTable};
pub use value::Value;
