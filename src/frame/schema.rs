use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// The type tag of a column. A frame only ever holds these four kinds of
/// columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Bool,
    Float,
    Str,
}

impl DataType {
    pub fn tag(&self) -> char {
        match self {
            DataType::Int => 'I',
            DataType::Bool => 'B',
            DataType::Float => 'F',
            DataType::Str => 'S',
        }
    }
}

impl TryFrom<char> for DataType {
    type Error = FrameError;

    fn try_from(tag: char) -> Result<Self, Self::Error> {
        match tag.to_ascii_uppercase() {
            'I' => Ok(DataType::Int),
            'B' => Ok(DataType::Bool),
            'F' => Ok(DataType::Float),
            'S' => Ok(DataType::Str),
            other => Err(FrameError::InvalidType(other)),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Ordered column types of a frame.
///
/// A [`Schema`] is owned by its frame. Handing one out and then mutating it
/// behind the frame's back is not supported.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema(Vec<DataType>);

impl Schema {
    pub fn new() -> Schema {
        //! An empty schema, zero columns wide.

        Schema(Vec::new())
    }

    pub fn from(types: Vec<DataType>) -> Schema {
        Schema(types)
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<DataType> {
        self.0.get(index).copied()
    }

    pub fn types(&self) -> &[DataType] {
        //! Get the column types, in order, as a read-only slice.

        self.0.as_ref()
    }

    pub fn add_column(&mut self, datatype: DataType) {
        self.0.push(datatype);
    }
}

impl FromStr for Schema {
    type Err = FrameError;

    fn from_str(tags: &str) -> Result<Self, Self::Err> {
        //! Parse a schema from its tag letters, e.g. `"IBFS"`.

        tags.chars()
            .filter(|c| !c.is_whitespace())
            .map(DataType::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Schema)
    }
}

impl Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: String = self.0.iter().map(DataType::tag).collect();
        write!(f, "{}", tags)
    }
}
