use arrow::array::{
    ArrayBuilder, BooleanBuilder, Date32Builder, Float64Builder, Int64Builder, StringBuilder,
    TimestampMicrosecondBuilder,
};
use pqtools_core::{TypeTag, Value};

macro_rules! cast_builder {
    ($b:expr, $T:ty) => {
        $b.as_any_mut()
            .downcast_mut::<$T>()
            .expect(concat!("expected builder type: ", stringify!($T)))
    };
}

/// Append `value` to a builder created by `make_builder(tag, ..)`.
///
/// Returns `false` without appending if `value` does not fit `tag`.
pub(super) fn append_value_to_builder(
    builder: &mut Box<dyn ArrayBuilder>,
    tag: TypeTag,
    value: &Value,
) -> bool {
    if !value.fits(tag) {
        return false;
    }
    match tag {
        TypeTag::String => cast_builder!(builder, StringBuilder).append_option(value.as_str()),
        TypeTag::Int64 => cast_builder!(builder, Int64Builder).append_option(value.as_i64()),
        TypeTag::Float64 => cast_builder!(builder, Float64Builder).append_option(value.as_f64()),
        TypeTag::Boolean => cast_builder!(builder, BooleanBuilder).append_option(value.as_bool()),
        TypeTag::Timestamp => cast_builder!(builder, TimestampMicrosecondBuilder)
            .append_option(value.as_timestamp_micros()),
        TypeTag::Date => {
            cast_builder!(builder, Date32Builder).append_option(value.as_date_days())
        }
    }
    true
}
