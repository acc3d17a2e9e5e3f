//! Untyped (text) and typed columnar tables.

use std::collections::HashSet;

use crate::{error::TableError, null_token::is_null_token, schema::TypeTag, value::Value};

/// Column-major table of raw text cells, as read from a delimited file.
///
/// Null tokens are resolved when rows are pushed: a cell is stored as `None`
/// if it is empty or one of [`NULL_TOKENS`](crate::NULL_TOKENS).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UntypedTable {
    header: Vec<String>,
    columns: Vec<Vec<Option<String>>>,
    num_rows: usize,
}

impl UntypedTable {
    /// Create an empty table with the given header.
    pub fn new(header: Vec<String>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(header.len());
        for name in &header {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn { name: name.clone() });
            }
        }
        let columns = vec![Vec::new(); header.len()];
        Ok(Self {
            header,
            columns,
            num_rows: 0,
        })
    }

    /// Build a table from a header and raw text rows.
    pub fn from_rows<R, C>(header: Vec<String>, rows: R) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = Vec<C>>,
        C: AsRef<str>,
    {
        let mut table = Self::new(header)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append one row. `row_index` in the error is the zero-based data row.
    pub fn push_row<C: AsRef<str>>(&mut self, row: Vec<C>) -> Result<(), TableError> {
        if row.len() != self.header.len() {
            return Err(TableError::MalformedRow {
                row_index: self.num_rows,
                expected_cols: self.header.len(),
                actual_cols: row.len(),
            });
        }
        for (column, cell) in self.columns.iter_mut().zip(row) {
            let cell = cell.as_ref();
            column.push((!is_null_token(cell)).then(|| cell.to_string()));
        }
        self.num_rows += 1;
        Ok(())
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    pub fn column(&self, index: usize) -> Option<&[Option<String>]> {
        self.columns.get(index).map(Vec::as_slice)
    }

    pub fn column_by_name(&self, name: &str) -> Option<&[Option<String>]> {
        let index = self.header.iter().position(|h| h == name)?;
        self.column(index)
    }

    /// Consume the table, yielding `(name, cells)` pairs in header order.
    pub fn into_columns(self) -> impl Iterator<Item = (String, Vec<Option<String>>)> {
        self.header.into_iter().zip(self.columns)
    }
}

/// One named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedColumn {
    pub name: String,
    pub type_tag: TypeTag,
    pub values: Vec<Value>,
}

impl TypedColumn {
    pub fn new(name: impl Into<String>, type_tag: TypeTag, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            type_tag,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// Columnar table whose columns all have the same length and hold only
/// values matching their declared [`TypeTag`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypedTable {
    columns: Vec<TypedColumn>,
    num_rows: usize,
}

impl TypedTable {
    pub fn new(columns: Vec<TypedColumn>) -> Result<Self, TableError> {
        let num_rows = columns.first().map(TypedColumn::len).unwrap_or(0);
        for column in &columns {
            if column.len() != num_rows {
                return Err(TableError::ColumnLength {
                    column: column.name.clone(),
                    expected: num_rows,
                    actual: column.len(),
                });
            }
            if let Some(row_index) = column.values.iter().position(|v| !v.fits(column.type_tag)) {
                return Err(TableError::ValueType {
                    column: column.name.clone(),
                    type_tag: column.type_tag,
                    row_index,
                });
            }
        }
        Ok(Self { columns, num_rows })
    }

    pub fn columns(&self) -> &[TypedColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&TypedColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}
