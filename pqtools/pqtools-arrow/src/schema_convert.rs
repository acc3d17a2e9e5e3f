use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use pqtools_core::{TypeTag, TypedTable};

// ---------------------------------------------------------------------------
// TypeTag -> Arrow
// ---------------------------------------------------------------------------

/// Arrow type used to store a column of the given [`TypeTag`].
pub fn type_tag_to_datatype(tag: TypeTag) -> DataType {
    match tag {
        TypeTag::String => DataType::Utf8,
        TypeTag::Int64 => DataType::Int64,
        TypeTag::Float64 => DataType::Float64,
        TypeTag::Boolean => DataType::Boolean,
        TypeTag::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, None),
        TypeTag::Date => DataType::Date32,
    }
}

/// Arrow schema for a typed table. Every field is nullable.
pub fn typed_table_arrow_schema(table: &TypedTable) -> Schema {
    let fields: Vec<Field> = table
        .columns()
        .iter()
        .map(|c| Field::new(&c.name, type_tag_to_datatype(c.type_tag), true))
        .collect();
    Schema::new(fields)
}

// ---------------------------------------------------------------------------
// Arrow -> display label
// ---------------------------------------------------------------------------

/// Short, human-oriented label for an Arrow type.
///
/// This is a best-effort description (e.g. every timestamp unit is
/// `timestamp`), not a round-trippable type name.
pub fn datatype_label(dt: &DataType) -> String {
    let label = match dt {
        DataType::Null => "null",
        DataType::Boolean => "boolean",
        DataType::Int8 => "int8",
        DataType::Int16 => "int16",
        DataType::Int32 => "int32",
        DataType::Int64 => "int64",
        DataType::UInt8 => "uint8",
        DataType::UInt16 => "uint16",
        DataType::UInt32 => "uint32",
        DataType::UInt64 => "uint64",
        DataType::Float16 => "half_float",
        DataType::Float32 => "float",
        DataType::Float64 => "double",
        DataType::Utf8 | DataType::LargeUtf8 | DataType::Utf8View => "string",
        DataType::Binary
        | DataType::LargeBinary
        | DataType::BinaryView
        | DataType::FixedSizeBinary(_) => "binary",
        DataType::Timestamp(_, _) => "timestamp",
        DataType::Date32 | DataType::Date64 => "date",
        DataType::Time32(_) | DataType::Time64(_) => "time",
        DataType::Duration(_) => "duration",
        DataType::Interval(_) => "interval",
        DataType::Decimal128(precision, scale) | DataType::Decimal256(precision, scale) => {
            return format!("decimal({precision},{scale})");
        }
        DataType::List(_) | DataType::LargeList(_) | DataType::FixedSizeList(_, _) => "list",
        DataType::Struct(_) => "struct",
        DataType::Map(_, _) => "map",
        DataType::Dictionary(_, value) => return datatype_label(value),
        other => return other.to_string().to_lowercase(),
    };
    label.to_string()
}
