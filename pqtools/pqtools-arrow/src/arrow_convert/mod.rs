//! Conversion from a [`TypedTable`] to an Arrow `RecordBatch`.

mod append;
mod builder;

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use pqtools_core::{TypedColumn, TypedTable};

use crate::error::ArrowConvertError;

/// Convert a typed table to a single RecordBatch.
///
/// The batch schema is [`typed_table_arrow_schema`](crate::typed_table_arrow_schema);
/// null values become Arrow nulls. A table with no columns yields a batch
/// with the table's row count and an empty schema.
pub fn typed_table_to_record_batch(table: &TypedTable) -> Result<RecordBatch, ArrowConvertError> {
    let schema = Arc::new(crate::schema_convert::typed_table_arrow_schema(table));
    let arrays = table
        .columns()
        .iter()
        .map(build_array_from_column)
        .collect::<Result<Vec<ArrayRef>, _>>()?;

    let options = RecordBatchOptions::new().with_row_count(Some(table.num_rows()));
    Ok(RecordBatch::try_new_with_options(schema, arrays, &options)?)
}

fn build_array_from_column(column: &TypedColumn) -> Result<ArrayRef, ArrowConvertError> {
    let mut builder = builder::make_builder(column.type_tag, column.len());
    for (row_index, value) in column.values.iter().enumerate() {
        if !append::append_value_to_builder(&mut builder, column.type_tag, value) {
            return Err(ArrowConvertError::ValueType {
                column: column.name.clone(),
                type_tag: column.type_tag,
                row_index,
            });
        }
    }
    Ok(builder.finish())
}
