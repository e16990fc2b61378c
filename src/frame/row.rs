use std::fmt::Display;

use super::schema::{DataType, Schema};
use super::value::Value;
use crate::error::{FrameError, Result};

/// A single row of values shaped by a [`Schema`].
///
/// Rows are cursors: a traversal creates one row and refills it for every
/// row index, so a row is not tied to a particular position in a frame.
#[derive(Clone, Debug)]
pub struct Row {
    schema: Schema,
    index: usize,
    values: Vec<Value>,
}

impl Row {
    pub fn new(schema: &Schema) -> Row {
        //! Create a row for `schema` with every slot holding the missing
        //! value of its type.

        Row {
            schema: schema.clone(),
            index: 0,
            values: schema.types().iter().map(|t| Value::missing(*t)).collect(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set<V: Into<Value>>(&mut self, column: usize, value: V) -> Result<()> {
        //! Store `value` in slot `column`. The value must have the type the
        //! row's schema records for that column.

        let value: Value = value.into();
        let expected = self.datatype(column);
        if value.datatype() != expected {
            let error = FrameError::TypeMismatch {
                expected,
                found: value.datatype(),
            };
            return Err(error.logged("row set"));
        }
        self.values[column] = value;
        Ok(())
    }

    pub fn get(&self, column: usize) -> &Value {
        &self.values[column]
    }

    pub fn get_int(&self, column: usize) -> Result<i64> {
        match &self.values[column] {
            Value::Int(i) => Ok(*i),
            other => Err(mismatch(DataType::Int, other)),
        }
    }

    pub fn get_bool(&self, column: usize) -> Result<bool> {
        match &self.values[column] {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(DataType::Bool, other)),
        }
    }

    pub fn get_float(&self, column: usize) -> Result<f64> {
        match &self.values[column] {
            Value::Float(f) => Ok(*f),
            other => Err(mismatch(DataType::Float, other)),
        }
    }

    pub fn get_string(&self, column: usize) -> Result<Option<&str>> {
        //! Borrow the string in slot `column`; `None` is a missing string.
        //! Clone it to keep it past the next refill of the row.

        match &self.values[column] {
            Value::Str(s) => Ok(s.as_deref()),
            other => Err(mismatch(DataType::Str, other)),
        }
    }

    pub(crate) fn datatype(&self, column: usize) -> DataType {
        self.schema.types()[column]
    }

    pub(crate) fn values(&self) -> &[Value] {
        &self.values
    }

    pub(crate) fn put(&mut self, column: usize, value: Value) {
        // Callers guarantee the type agrees with the schema.
        self.values[column] = value;
    }
}

fn mismatch(expected: DataType, found: &Value) -> FrameError {
    let error = FrameError::TypeMismatch {
        expected,
        found: found.datatype(),
    };
    error.logged("row get")
}

impl Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", row.join(" | "))
    }
}
