//! User-declared column schema and its YAML/JSON loader.

mod load;
mod types;

pub use load::{SchemaFormat, load_schema};
pub use types::{FieldSpec, SchemaDescriptor, TypeTag};
