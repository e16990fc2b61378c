use super::schema::DataType;
use super::serializer::Serializer;
use super::value::Value;
use crate::error::{FrameError, Result};

/// A growable array of one native type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedColumn<T> {
    values: Vec<T>,
}

pub type IntColumn = TypedColumn<i64>;
pub type BoolColumn = TypedColumn<bool>;
pub type FloatColumn = TypedColumn<f64>;
/// `None` entries are missing strings.
pub type StringColumn = TypedColumn<Option<String>>;

impl<T> TypedColumn<T> {
    pub fn new() -> TypedColumn<T> {
        TypedColumn { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> &T {
        //! Panics if `index` is out of range.

        &self.values[index]
    }

    pub fn set(&mut self, index: usize, value: T) {
        //! Panics if `index` is out of range.

        self.values[index] = value;
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T> From<Vec<T>> for TypedColumn<T> {
    fn from(values: Vec<T>) -> Self {
        TypedColumn { values }
    }
}

impl StringColumn {
    pub fn get_str(&self, index: usize) -> Option<&str> {
        self.values[index].as_deref()
    }
}

/// A column of a frame: one of the four typed arrays.
///
/// The type of a column never changes once it is created. Downcasting with
/// the `as_*` family succeeds for exactly one of the four types.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    Int(IntColumn),
    Bool(BoolColumn),
    Float(FloatColumn),
    Str(StringColumn),
}

impl Column {
    pub fn empty(datatype: DataType) -> Column {
        match datatype {
            DataType::Int => Column::Int(IntColumn::new()),
            DataType::Bool => Column::Bool(BoolColumn::new()),
            DataType::Float => Column::Float(FloatColumn::new()),
            DataType::Str => Column::Str(StringColumn::new()),
        }
    }

    pub fn datatype(&self) -> DataType {
        match self {
            Column::Int(_) => DataType::Int,
            Column::Bool(_) => DataType::Bool,
            Column::Float(_) => DataType::Float,
            Column::Str(_) => DataType::Str,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Int(c) => c.len(),
            Column::Bool(c) => c.len(),
            Column::Float(c) => c.len(),
            Column::Str(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Value {
        //! Read the value at `index`, cloning strings. Panics if out of range.

        match self {
            Column::Int(c) => Value::Int(*c.get(index)),
            Column::Bool(c) => Value::Bool(*c.get(index)),
            Column::Float(c) => Value::Float(*c.get(index)),
            Column::Str(c) => Value::Str(c.get(index).clone()),
        }
    }

    pub fn push(&mut self, value: Value) -> Result<()> {
        //! Append a value of this column's type. The column takes ownership
        //! of string values.

        match (self, value) {
            (Column::Int(c), Value::Int(v)) => c.push(v),
            (Column::Bool(c), Value::Bool(v)) => c.push(v),
            (Column::Float(c), Value::Float(v)) => c.push(v),
            (Column::Str(c), Value::Str(v)) => c.push(v),
            (column, value) => {
                let error = FrameError::TypeMismatch {
                    expected: column.datatype(),
                    found: value.datatype(),
                };
                return Err(error.logged("push"));
            }
        }
        Ok(())
    }

    pub fn append_missing(&mut self) {
        match self {
            Column::Int(c) => c.push(0),
            Column::Bool(c) => c.push(false),
            Column::Float(c) => c.push(0.0),
            Column::Str(c) => c.push(None),
        }
    }

    pub(crate) fn pad_to(&mut self, len: usize) {
        while self.len() < len {
            self.append_missing();
        }
    }

    fn mismatch(&self, expected: DataType) -> FrameError {
        FrameError::TypeMismatch {
            expected,
            found: self.datatype(),
        }
    }

    pub fn as_int(&self) -> Result<&IntColumn> {
        match self {
            Column::Int(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Int)),
        }
    }

    pub fn as_bool(&self) -> Result<&BoolColumn> {
        match self {
            Column::Bool(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Bool)),
        }
    }

    pub fn as_float(&self) -> Result<&FloatColumn> {
        match self {
            Column::Float(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Float)),
        }
    }

    pub fn as_string(&self) -> Result<&StringColumn> {
        match self {
            Column::Str(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Str)),
        }
    }

    pub fn as_int_mut(&mut self) -> Result<&mut IntColumn> {
        match self {
            Column::Int(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Int)),
        }
    }

    pub fn as_bool_mut(&mut self) -> Result<&mut BoolColumn> {
        match self {
            Column::Bool(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Bool)),
        }
    }

    pub fn as_float_mut(&mut self) -> Result<&mut FloatColumn> {
        match self {
            Column::Float(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Float)),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut StringColumn> {
        match self {
            Column::Str(c) => Ok(c),
            _ => Err(self.mismatch(DataType::Str)),
        }
    }

    pub fn serialize(&self) -> String {
        //! Render the column as `[{v0},{v1},...]`.

        let values: Vec<String> = match self {
            Column::Int(c) => c.iter().map(|v| Serializer::serialize_int(*v)).collect(),
            Column::Bool(c) => c.iter().map(|v| Serializer::serialize_bool(*v)).collect(),
            Column::Float(c) => c.iter().map(|v| Serializer::serialize_float(*v)).collect(),
            Column::Str(c) => c
                .iter()
                .map(|v| Serializer::serialize_string(v.as_deref()))
                .collect(),
        };
        format!("[{}]", values.join(","))
    }
}

impl From<Vec<i64>> for Column {
    fn from(values: Vec<i64>) -> Self {
        Column::Int(IntColumn::from(values))
    }
}

impl From<Vec<bool>> for Column {
    fn from(values: Vec<bool>) -> Self {
        Column::Bool(BoolColumn::from(values))
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Column::Float(FloatColumn::from(values))
    }
}

impl From<Vec<Option<String>>> for Column {
    fn from(values: Vec<Option<String>>) -> Self {
        Column::Str(StringColumn::from(values))
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Column::Str(StringColumn::from(
            values.into_iter().map(Some).collect::<Vec<_>>(),
        ))
    }
}

impl From<Vec<&str>> for Column {
    fn from(values: Vec<&str>) -> Self {
        Column::Str(StringColumn::from(
            values
                .into_iter()
                .map(|s| Some(s.to_string()))
                .collect::<Vec<_>>(),
        ))
    }
}
