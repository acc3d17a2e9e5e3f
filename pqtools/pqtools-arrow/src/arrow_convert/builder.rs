use arrow::array::{
    ArrayBuilder, BooleanBuilder, Date32Builder, Float64Builder, Int64Builder, StringBuilder,
    TimestampMicrosecondBuilder,
};
use pqtools_core::TypeTag;

pub(super) fn make_builder(tag: TypeTag, capacity: usize) -> Box<dyn ArrayBuilder> {
    match tag {
        TypeTag::String => Box::new(StringBuilder::with_capacity(capacity, capacity * 16)),
        TypeTag::Int64 => Box::new(Int64Builder::with_capacity(capacity)),
        TypeTag::Float64 => Box::new(Float64Builder::with_capacity(capacity)),
        TypeTag::Boolean => Box::new(BooleanBuilder::with_capacity(capacity)),
        TypeTag::Timestamp => Box::new(TimestampMicrosecondBuilder::with_capacity(capacity)),
        TypeTag::Date => Box::new(Date32Builder::with_capacity(capacity)),
    }
}
