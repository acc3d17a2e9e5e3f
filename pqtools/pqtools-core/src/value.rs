//! Typed cell values produced by the caster.

use std::sync::Arc;

use crate::schema::TypeTag;

/// A single typed cell.
///
/// Temporal values are stored in their Parquet/Arrow physical form:
/// `Timestamp` as microseconds since the Unix epoch, `Date` as days since
/// the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(Arc<str>),
    Int64(i64),
    Float64(f64),
    Boolean(bool),
    Timestamp(i64),
    Date(i32),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this value may be stored in a column of type `tag`.
    pub fn fits(&self, tag: TypeTag) -> bool {
        matches!(
            (self, tag),
            (Value::Null, _)
                | (Value::String(_), TypeTag::String)
                | (Value::Int64(_), TypeTag::Int64)
                | (Value::Float64(_), TypeTag::Float64)
                | (Value::Boolean(_), TypeTag::Boolean)
                | (Value::Timestamp(_), TypeTag::Timestamp)
                | (Value::Date(_), TypeTag::Date)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_ref()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp_micros(&self) -> Option<i64> {
        match self {
            Value::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date_days(&self) -> Option<i32> {
        match self {
            Value::Date(v) => Some(*v),
            _ => None,
        }
    }
}
