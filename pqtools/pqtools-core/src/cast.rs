//! Conversion of an [`UntypedTable`] into a [`TypedTable`].

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::{
    error::{CastError, ParseValueError},
    schema::{SchemaDescriptor, TypeTag},
    table::{TypedColumn, TypedTable, UntypedTable},
    value::Value,
};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Days from 0001-01-01 (CE) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Cast an untyped table according to an optional schema.
///
/// Without a schema every column is `String`. With a schema, declared
/// columns come first (declaration order) and are cast to their type; the
/// remaining columns follow in header order as `String`. Null cells stay
/// null and are never handed to a parser.
///
/// Fails with [`CastError::UnknownColumns`] listing every declared column
/// missing from the header, or with [`CastError::CastFailure`] for the first
/// unparseable cell. No partial table is returned.
pub fn cast(
    table: UntypedTable,
    schema: Option<&SchemaDescriptor>,
) -> Result<TypedTable, CastError> {
    let Some(schema) = schema else {
        let columns = table
            .into_columns()
            .map(|(name, cells)| string_column(name, cells))
            .collect();
        return build_table(columns);
    };

    let missing: Vec<String> = schema
        .names()
        .filter(|name| !table.header().iter().any(|h| h == name))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(CastError::UnknownColumns { names: missing });
    }

    let mut declared: Vec<Option<TypedColumn>> = vec![None; schema.len()];
    let mut undeclared = Vec::new();

    for (name, cells) in table.into_columns() {
        match schema.iter().position(|field| field.name == name) {
            Some(index) => {
                let column = cast_column(name, schema[index].type_tag, cells)?;
                declared[index] = Some(column);
            }
            None => undeclared.push(string_column(name, cells)),
        }
    }

    let columns = declared.into_iter().flatten().chain(undeclared).collect();
    build_table(columns)
}

/// Parse one non-null cell as `target`.
pub fn cast_value(raw: &str, target: TypeTag) -> Result<Value, ParseValueError> {
    let fail = || ParseValueError::new(raw, target);
    match target {
        TypeTag::String => Ok(Value::string(raw)),
        TypeTag::Int64 => raw.parse::<i64>().map(Value::Int64).map_err(|_| fail()),
        TypeTag::Float64 => raw.parse::<f64>().map(Value::Float64).map_err(|_| fail()),
        TypeTag::Boolean => parse_bool(raw).map(Value::Boolean).ok_or_else(fail),
        TypeTag::Timestamp => parse_timestamp_micros(raw)
            .map(Value::Timestamp)
            .ok_or_else(fail),
        TypeTag::Date => parse_date_days(raw).map(Value::Date).ok_or_else(fail),
    }
}

fn cast_column(
    name: String,
    type_tag: TypeTag,
    cells: Vec<Option<String>>,
) -> Result<TypedColumn, CastError> {
    let mut values = Vec::with_capacity(cells.len());
    for (row_index, cell) in cells.into_iter().enumerate() {
        let value = match cell {
            None => Value::Null,
            Some(raw) => cast_value(&raw, type_tag).map_err(|_| CastError::CastFailure {
                column: name.clone(),
                row_index,
                raw_value: raw.clone(),
                target_type: type_tag,
            })?,
        };
        values.push(value);
    }
    Ok(TypedColumn::new(name, type_tag, values))
}

fn string_column(name: String, cells: Vec<Option<String>>) -> TypedColumn {
    let values = cells
        .into_iter()
        .map(|cell| cell.map_or(Value::Null, Value::string))
        .collect();
    TypedColumn::new(name, TypeTag::String, values)
}

fn build_table(columns: Vec<TypedColumn>) -> Result<TypedTable, CastError> {
    Ok(TypedTable::new(columns)?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_timestamp_micros(raw: &str) -> Option<i64> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|ts| ts.and_utc().timestamp_micros())
}

fn parse_date_days(raw: &str) -> Option<i32> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|date| date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
}
