use std::fmt::Display;

use super::schema::DataType;

/// A single native value held in a [`super::Row`] slot.
///
/// `Str(None)` is the missing string marker.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Float(f64),
    Str(Option<String>),
}

impl Value {
    pub fn datatype(&self) -> DataType {
        match self {
            Value::Int(_) => DataType::Int,
            Value::Bool(_) => DataType::Bool,
            Value::Float(_) => DataType::Float,
            Value::Str(_) => DataType::Str,
        }
    }

    pub fn missing(datatype: DataType) -> Value {
        //! The placeholder a column of `datatype` is padded with.

        match datatype {
            DataType::Int => Value::Int(0),
            DataType::Bool => Value::Bool(false),
            DataType::Float => Value::Float(0.0),
            DataType::Str => Value::Str(None),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Some(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(Some(value.to_string()))
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        Value::Str(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(Some(s)) => write!(f, "\"{}\"", s),
            Value::Str(None) => write!(f, "NIL"),
        }
    }
}
